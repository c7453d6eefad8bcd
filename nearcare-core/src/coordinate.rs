//! Validated WGS84 coordinates.
//!
//! A [`Coordinate`] can only be built from an in-range latitude and
//! longitude, so every function that accepts one is total.

use geo::{Coord, Point};
use thiserror::Error;

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was non-finite or outside `[-90, 90]`.
    #[error("latitude {0} must be a finite value within [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude was non-finite or outside `[-180, 180]`.
    #[error("longitude {0} must be a finite value within [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A position on the globe expressed in decimal degrees.
///
/// Stored as a [`geo::Coord`] with `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```
/// use nearcare_core::Coordinate;
///
/// # fn main() -> Result<(), nearcare_core::CoordinateError> {
/// let nyc = Coordinate::new(40.7128, -74.0060)?;
/// assert_eq!(nyc.latitude(), 40.7128);
/// assert_eq!(nyc.longitude(), -74.0060);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "wire::LatLon", into = "wire::LatLon"))]
pub struct Coordinate {
    location: Coord<f64>,
}

impl Coordinate {
    /// Validate and construct a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is non-finite or
    /// outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-LATITUDE_LIMIT..=LATITUDE_LIMIT).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-LONGITUDE_LIMIT..=LONGITUDE_LIMIT).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::from_trusted(latitude, longitude))
    }

    /// Build a coordinate from components already known to be in range.
    pub(crate) const fn from_trusted(latitude: f64, longitude: f64) -> Self {
        Self {
            location: Coord {
                x: longitude,
                y: latitude,
            },
        }
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// The underlying `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn as_coord(&self) -> Coord<f64> {
        self.location
    }

    /// Shift this coordinate by the given number of degrees.
    ///
    /// Latitude saturates at the poles and longitude wraps across the
    /// antimeridian.
    ///
    /// ```
    /// use nearcare_core::Coordinate;
    ///
    /// # fn main() -> Result<(), nearcare_core::CoordinateError> {
    /// let shifted = Coordinate::new(89.99, 179.99)?.offset_by(0.02, 0.02)?;
    /// assert_eq!(shifted.latitude(), 90.0);
    /// assert!(shifted.longitude() < -179.9);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] naming the shifted component when a delta
    /// is NaN or infinite.
    #[expect(
        clippy::float_arithmetic,
        reason = "offsets are applied in degree space"
    )]
    pub fn offset_by(
        &self,
        delta_latitude: f64,
        delta_longitude: f64,
    ) -> Result<Self, CoordinateError> {
        if !delta_latitude.is_finite() {
            return Err(CoordinateError::LatitudeOutOfRange(
                self.latitude() + delta_latitude,
            ));
        }
        if !delta_longitude.is_finite() {
            return Err(CoordinateError::LongitudeOutOfRange(
                self.longitude() + delta_longitude,
            ));
        }
        let latitude = (self.latitude() + delta_latitude).clamp(-LATITUDE_LIMIT, LATITUDE_LIMIT);
        let raw_longitude = self.longitude() + delta_longitude;
        let longitude = if (-LONGITUDE_LIMIT..=LONGITUDE_LIMIT).contains(&raw_longitude) {
            raw_longitude
        } else {
            (raw_longitude + LONGITUDE_LIMIT).rem_euclid(2.0 * LONGITUDE_LIMIT) - LONGITUDE_LIMIT
        };
        Ok(Self::from_trusted(latitude, longitude))
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        value.location
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self::from(value.location)
    }
}

#[cfg(feature = "serde")]
mod wire {
    use serde::{Deserialize, Serialize};

    use super::{Coordinate, CoordinateError};

    /// Serialized form of a [`Coordinate`].
    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    pub struct LatLon {
        pub latitude: f64,
        pub longitude: f64,
    }

    impl TryFrom<LatLon> for Coordinate {
        type Error = CoordinateError;

        fn try_from(value: LatLon) -> Result<Self, Self::Error> {
            Self::new(value.latitude, value.longitude)
        }
    }

    impl From<Coordinate> for LatLon {
        fn from(value: Coordinate) -> Self {
            Self {
                latitude: value.latitude(),
                longitude: value.longitude(),
            }
        }
    }
}
