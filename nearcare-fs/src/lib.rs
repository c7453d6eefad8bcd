//! Capability-based file access for nearcare input files.
//!
//! Paths are UTF-8 (`camino`) and every open goes through `cap-std` using
//! ambient authority scoped to the file's parent directory.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
///
/// Propagates the underlying open failure.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read an entire file into a string.
///
/// # Errors
///
/// Fails if the file cannot be opened or is not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Whether `path` names an existing regular file.
///
/// Returns `Ok(false)` for directories and other non-file entries and an
/// `ErrorKind::NotFound` error when nothing exists at `path`.
///
/// # Errors
///
/// Propagates failures to open the parent directory or read metadata.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}
