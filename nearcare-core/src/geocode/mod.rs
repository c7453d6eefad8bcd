//! Turn the query origin into a human-readable label.
//!
//! Geocoding is best effort: [`label_origin`] never fails and falls back to a
//! rounded coordinate label whenever the [`ReverseGeocoder`] does.

mod error;
mod label;

pub use error::GeocodeError;
pub use label::AddressLabel;

use log::warn;

use crate::Coordinate;

/// Resolve a coordinate to an address label.
pub trait ReverseGeocoder {
    /// Return a label for `at`.
    ///
    /// Implementations return [`GeocodeError::NoAddress`] when the service
    /// answers but knows no address for the position.
    fn reverse(&self, at: Coordinate) -> Result<AddressLabel, GeocodeError>;
}

/// Label `origin`, falling back to its coordinates on any geocoder failure.
///
/// ```
/// use nearcare_core::{AddressLabel, Coordinate, GeocodeError, ReverseGeocoder, label_origin};
///
/// struct Offline;
///
/// impl ReverseGeocoder for Offline {
///     fn reverse(&self, _at: Coordinate) -> Result<AddressLabel, GeocodeError> {
///         Err(GeocodeError::NoAddress)
///     }
/// }
///
/// # fn main() -> Result<(), nearcare_core::CoordinateError> {
/// let origin = Coordinate::new(40.71284, -74.00601)?;
/// assert_eq!(label_origin(&Offline, origin).as_str(), "40.7128, -74.0060");
/// # Ok(())
/// # }
/// ```
pub fn label_origin<G>(geocoder: &G, origin: Coordinate) -> AddressLabel
where
    G: ReverseGeocoder + ?Sized,
{
    geocoder.reverse(origin).unwrap_or_else(|err| {
        warn!("reverse geocoding failed ({err}); labelling origin by coordinates");
        AddressLabel::from_coordinate(origin)
    })
}
