//! Test helpers for hospital files and stubbed nearby collaborators.

use super::*;
use crate::nearby::{DefaultNearbyServices, NearbyConfig, NearbyServices};
use camino::{Utf8Path, Utf8PathBuf};
use nearcare_core::test_support::{StubDirectory, StubGeocoder};
use nearcare_core::{Candidate, Coordinate, DirectoryLookup, Hospital, ReverseGeocoder};
use std::cell::Cell;
use tempfile::TempDir;

/// Three Manhattan hospitals; Battery Park Clinic is nearest to City Hall.
pub(super) const MANHATTAN_HOSPITALS: &str = r#"[
    { "id": 1, "name": "Upper West Hospital", "latitude": 40.7870, "longitude": -73.9754,
      "phone": "(212) 555-0101", "rating": 4.1, "reviews": 88 },
    { "id": 2, "name": "Battery Park Clinic", "latitude": 40.7033, "longitude": -74.0170,
      "phone": "(212) 555-0102", "rating": 4.6, "reviews": 31 },
    { "id": 3, "name": "Chelsea Medical", "latitude": 40.7465, "longitude": -74.0014 }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn hospital(id: u64, name: &str, phone: &str, at: (f64, f64)) -> Candidate<Hospital> {
    Candidate::new(
        id,
        Coordinate::new(at.0, at.1).expect("valid test coordinate"),
        Hospital {
            name: name.to_owned(),
            address: format!("{id} Test Street"),
            phone: phone.to_owned(),
            rating: 4.0,
            reviews: 10,
        },
    )
}

/// Serves a fixed directory and geocoder, counting geocoder requests.
pub(super) struct StubServices {
    pub(super) directory: Option<StubDirectory<Hospital>>,
    pub(super) geocoder: StubGeocoder,
    pub(super) geocoder_requests: Cell<usize>,
}

impl StubServices {
    /// Use the real directory selection with the given geocoder.
    pub(super) fn with_geocoder(geocoder: StubGeocoder) -> Self {
        Self {
            directory: None,
            geocoder,
            geocoder_requests: Cell::new(0),
        }
    }

    pub(super) fn with_directory(directory: StubDirectory<Hospital>) -> Self {
        Self {
            directory: Some(directory),
            ..Self::with_geocoder(StubGeocoder::no_address())
        }
    }
}

impl NearbyServices for StubServices {
    fn directory(
        &self,
        config: &NearbyConfig,
    ) -> Result<Box<dyn DirectoryLookup<Payload = Hospital>>, CliError> {
        match &self.directory {
            Some(stub) => Ok(Box::new(stub.clone())),
            None => DefaultNearbyServices.directory(config),
        }
    }

    fn geocoder(&self, _config: &NearbyConfig) -> Result<Box<dyn ReverseGeocoder>, CliError> {
        self.geocoder_requests.set(self.geocoder_requests.get() + 1);
        Ok(Box::new(self.geocoder.clone()))
    }
}
