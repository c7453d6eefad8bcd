//! Hospital directories backed by files on disk.
//!
//! [`JsonHospitalDirectory`] reads a JSON array of
//! [`nearcare_core::HospitalRecord`] values once, validates every
//! coordinate, and serves the same list for any origin.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use nearcare_core::{
    Candidate, Coordinate, DirectoryError, DirectoryLookup, Hospital, HospitalRecord,
};

/// A fixed list of hospitals loaded from a JSON file.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use nearcare_core::{DEFAULT_ORIGIN, DirectoryLookup, rank_by_distance};
/// use nearcare_data::directory::JsonHospitalDirectory;
///
/// let directory = JsonHospitalDirectory::open(Utf8Path::new("hospitals.json"))?;
/// let ranked = rank_by_distance(DEFAULT_ORIGIN, directory.candidates_near(DEFAULT_ORIGIN)?);
/// # Ok::<(), nearcare_core::DirectoryError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonHospitalDirectory {
    path: Utf8PathBuf,
    hospitals: Vec<Candidate<Hospital>>,
}

impl JsonHospitalDirectory {
    /// Load and validate the hospital file at `path`.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Unavailable`] when the file cannot be read.
    /// - [`DirectoryError::Parse`] when it is not a JSON array of records.
    /// - [`DirectoryError::InvalidRecord`] when a record has a bad coordinate.
    pub fn open(path: &Utf8Path) -> Result<Self, DirectoryError> {
        let contents =
            nearcare_fs::read_utf8_file(path).map_err(|err| DirectoryError::Unavailable {
                source_name: path.to_string(),
                message: err.to_string(),
            })?;
        let directory = Self::from_json(path, &contents)?;
        debug!(
            "loaded {} hospitals from {}",
            directory.len(),
            directory.path()
        );
        Ok(directory)
    }

    /// Parse hospital records from an in-memory JSON document.
    ///
    /// `source` names the document in error messages.
    ///
    /// # Errors
    ///
    /// See [`JsonHospitalDirectory::open`].
    pub fn from_json(source: &Utf8Path, json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<HospitalRecord> =
            serde_json::from_str(json).map_err(|err| DirectoryError::Parse {
                source_name: source.to_string(),
                message: err.to_string(),
            })?;
        let hospitals = records
            .into_iter()
            .map(Candidate::<Hospital>::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            path: source.to_path_buf(),
            hospitals,
        })
    }

    /// Path the records were loaded from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Number of loaded hospitals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    /// Whether the file contained no hospitals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }
}

impl DirectoryLookup for JsonHospitalDirectory {
    type Payload = Hospital;

    fn candidates_near(
        &self,
        _origin: Coordinate,
    ) -> Result<Vec<Candidate<Hospital>>, DirectoryError> {
        Ok(self.hospitals.clone())
    }
}
