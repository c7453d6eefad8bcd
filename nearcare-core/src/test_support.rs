//! Deterministic collaborator doubles used by unit and behaviour tests.

use crate::{
    AddressLabel, Candidate, Coordinate, DirectoryError, DirectoryLookup, GeocodeError,
    LocationError, LocationProvider, ReverseGeocoder,
};

/// `LocationProvider` returning a pre-configured outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct StubLocationProvider {
    response: Result<Coordinate, LocationError>,
}

impl StubLocationProvider {
    /// Always report `at`.
    #[must_use]
    pub const fn at(at: Coordinate) -> Self {
        Self { response: Ok(at) }
    }

    /// Always fail with `error`.
    #[must_use]
    pub const fn failing(error: LocationError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl LocationProvider for StubLocationProvider {
    fn current_location(&self) -> Result<Coordinate, LocationError> {
        self.response.clone()
    }
}

/// `DirectoryLookup` returning the same candidates regardless of origin.
#[derive(Debug, Clone, PartialEq)]
pub struct StubDirectory<T> {
    response: Result<Vec<Candidate<T>>, DirectoryError>,
}

impl<T> StubDirectory<T> {
    /// Return `candidates` for every lookup.
    #[must_use]
    pub const fn with_candidates(candidates: Vec<Candidate<T>>) -> Self {
        Self {
            response: Ok(candidates),
        }
    }

    /// Fail every lookup with `error`.
    #[must_use]
    pub const fn with_error(error: DirectoryError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl<T: Clone> DirectoryLookup for StubDirectory<T> {
    type Payload = T;

    fn candidates_near(&self, _origin: Coordinate) -> Result<Vec<Candidate<T>>, DirectoryError> {
        self.response.clone()
    }
}

/// `ReverseGeocoder` returning a pre-configured outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubGeocoder {
    response: Result<AddressLabel, GeocodeError>,
}

impl StubGeocoder {
    /// Answer every lookup with `label`.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            response: Ok(AddressLabel::new(label)),
        }
    }

    /// Fail every lookup with `error`.
    #[must_use]
    pub const fn with_error(error: GeocodeError) -> Self {
        Self {
            response: Err(error),
        }
    }

    /// Report that no address exists for any position.
    #[must_use]
    pub const fn no_address() -> Self {
        Self::with_error(GeocodeError::NoAddress)
    }
}

impl ReverseGeocoder for StubGeocoder {
    fn reverse(&self, _at: Coordinate) -> Result<AddressLabel, GeocodeError> {
        self.response.clone()
    }
}
