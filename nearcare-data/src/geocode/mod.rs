//! HTTP reverse geocoding against Nominatim.
//!
//! [`NominatimGeocoder`] implements [`nearcare_core::ReverseGeocoder`] by
//! calling the `/reverse` endpoint of a Nominatim server. The synchronous
//! trait is served by blocking on async `reqwest` calls internally.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use nearcare_core::{Coordinate, ReverseGeocoder};
//! use nearcare_data::geocode::{NominatimGeocoder, NominatimGeocoderConfig};
//!
//! let config = NominatimGeocoderConfig::new("https://nominatim.openstreetmap.org")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let geocoder = NominatimGeocoder::with_config(config)?;
//!
//! let label = geocoder.reverse(Coordinate::new(40.7128, -74.0060)?)?;
//! println!("You are near {label}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod nominatim;
mod provider;

pub use provider::{
    DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT, GeocoderBuildError, NominatimGeocoder,
    NominatimGeocoderConfig,
};
