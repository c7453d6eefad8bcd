//! Obtain the query origin.
//!
//! The [`LocationProvider`] trait abstracts platform geolocation. Callers that
//! cannot tolerate a missing fix use [`resolve_origin`], which substitutes
//! [`DEFAULT_ORIGIN`] whenever the provider fails.

mod error;
mod provider;

pub use error::LocationError;
pub use provider::{
    DEFAULT_ORIGIN, DEFAULT_ORIGIN_LABEL, FixedLocationProvider, LocationProvider, OriginSource,
    ResolvedOrigin, UnsupportedLocationProvider, resolve_origin,
};
