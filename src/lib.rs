//! Facade crate for the nearcare hospital finder.
//!
//! This crate re-exports the core ranking types and exposes the file-backed
//! directory and Nominatim geocoder behind a feature flag.

#![forbid(unsafe_code)]

pub use nearcare_core::{
    AddressLabel, Candidate, Coordinate, CoordinateError, DEFAULT_ORIGIN, DEFAULT_ORIGIN_LABEL,
    DirectoryError, DirectoryLookup, FixedLocationProvider, GeocodeError, Hospital,
    HospitalError, HospitalRecord, LocationError, LocationProvider, OriginSource,
    RankedCandidate, ResolvedOrigin, ReverseGeocoder, SimulatedHospitalDirectory,
    UnsupportedLocationProvider, directions_url, format_distance, haversine_km, label_origin,
    nearest, rank_by_distance, resolve_origin,
};

#[cfg(feature = "data")]
pub use nearcare_data::directory::JsonHospitalDirectory;

#[cfg(feature = "data")]
pub use nearcare_data::geocode::{NominatimGeocoder, NominatimGeocoderConfig};
