//! Error types emitted by the nearcare CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nearcare_core::{CoordinateError, DirectoryError};
use nearcare_data::geocode::GeocoderBuildError;
use thiserror::Error;

/// Errors emitted by the nearcare CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Only one half of an origin coordinate was supplied.
    #[error("missing {missing} (set --{missing} or {env}, or omit both coordinates)")]
    IncompleteOrigin {
        missing: &'static str,
        env: &'static str,
    },
    /// The supplied origin lies outside the valid coordinate range.
    #[error("invalid origin: {0}")]
    InvalidOrigin(#[source] CoordinateError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The hospital directory could not supply candidates.
    #[error("hospital directory failed: {0}")]
    Directory(#[from] DirectoryError),
    /// Constructing the reverse geocoder failed.
    #[error("failed to build reverse geocoder for {base_url:?}: {source}")]
    BuildGeocoder {
        base_url: String,
        #[source]
        source: GeocoderBuildError,
    },
    /// Serializing the nearby report failed.
    #[error("failed to serialize nearby report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing the nearby report failed.
    #[error("failed to write nearby report: {0}")]
    WriteReport(#[source] std::io::Error),
}
