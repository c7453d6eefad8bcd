//! Core domain types for the nearcare proximity service.
//!
//! The heart of the crate is [`rank_by_distance`], a pure function ordering
//! [`Candidate`] locations nearest-first from an origin [`Coordinate`]. The
//! surrounding traits describe where its inputs come from:
//!
//! - [`LocationProvider`] supplies the origin; [`resolve_origin`] substitutes
//!   [`DEFAULT_ORIGIN`] when no fix is available.
//! - [`DirectoryLookup`] supplies candidates; [`SimulatedHospitalDirectory`]
//!   is a self-contained fixture.
//! - [`ReverseGeocoder`] labels the origin; [`label_origin`] never fails.
//!
//! Constructors validate input and return `Result`, so ranking itself has no
//! error cases.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
mod coordinate;
pub mod directory;
mod distance;
pub mod geocode;
mod hospital;
pub mod location;
mod ranker;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{Candidate, RankedCandidate};
pub use coordinate::{Coordinate, CoordinateError};
pub use directory::{DirectoryError, DirectoryLookup, SimulatedHospitalDirectory};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use geocode::{AddressLabel, GeocodeError, ReverseGeocoder, label_origin};
pub use hospital::{
    DIRECTIONS_BASE_URL, Hospital, HospitalError, HospitalRecord, directions_url, format_distance,
};
pub use location::{
    DEFAULT_ORIGIN, DEFAULT_ORIGIN_LABEL, FixedLocationProvider, LocationError, LocationProvider,
    OriginSource, ResolvedOrigin, UnsupportedLocationProvider, resolve_origin,
};
pub use ranker::{nearest, rank_by_distance};
