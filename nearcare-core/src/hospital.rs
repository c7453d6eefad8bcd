//! Hospital metadata and the actions a presentation layer offers for it.

use thiserror::Error;

use crate::{Candidate, Coordinate, CoordinateError};

/// Base URL for turn-by-turn directions.
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Display metadata for a hospital, carried as a [`Candidate`] payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hospital {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact number as stored by the directory.
    pub phone: String,
    /// Average review rating.
    pub rating: f32,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
}

/// Errors raised while building hospital actions or records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HospitalError {
    /// The stored phone number contains no digits.
    #[error("hospital {name:?} has no callable phone number")]
    MissingPhone {
        /// Name of the affected hospital.
        name: String,
    },
    /// A record carried an out-of-range coordinate.
    #[error("hospital record {id} has an invalid coordinate: {source}")]
    InvalidCoordinate {
        /// Identifier of the affected record.
        id: u64,
        /// Validation failure.
        #[source]
        source: CoordinateError,
    },
}

impl Hospital {
    /// A `tel:` URI dialling this hospital.
    ///
    /// Formatting characters are dropped; a leading `+` is kept.
    ///
    /// ```
    /// use nearcare_core::Hospital;
    ///
    /// let hospital = Hospital {
    ///     name: "General Hospital".into(),
    ///     address: "456 Medical Plaza".into(),
    ///     phone: "(212) 555-5678".into(),
    ///     rating: 4.6,
    ///     reviews: 98,
    /// };
    /// assert_eq!(hospital.call_url().as_deref(), Ok("tel:2125555678"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::MissingPhone`] when the number has no digits.
    pub fn call_url(&self) -> Result<String, HospitalError> {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(HospitalError::MissingPhone {
                name: self.name.clone(),
            });
        }
        let prefix = if self.phone.trim_start().starts_with('+') {
            "+"
        } else {
            ""
        };
        Ok(format!("tel:{prefix}{digits}"))
    }
}

/// A map deep link giving directions to `destination`.
///
/// ```
/// use nearcare_core::{Coordinate, directions_url};
///
/// # fn main() -> Result<(), nearcare_core::CoordinateError> {
/// let url = directions_url(Coordinate::new(40.7228, -73.996)?);
/// assert_eq!(url, "https://www.google.com/maps/dir/?api=1&destination=40.7228,-73.996");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn directions_url(destination: Coordinate) -> String {
    format!(
        "{DIRECTIONS_BASE_URL}&destination={},{}",
        destination.latitude(),
        destination.longitude()
    )
}

/// Render a distance for display, to one decimal place.
///
/// ```
/// assert_eq!(nearcare_core::format_distance(1.26), "1.3 km away");
/// ```
#[must_use]
pub fn format_distance(distance_km: f64) -> String {
    format!("{distance_km:.1} km away")
}

/// Flat, serializable form of a hospital candidate.
///
/// This is the shape of hospital directory files.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HospitalRecord {
    /// Directory identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Street address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Contact number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phone: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Average review rating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f32,
    /// Number of reviews.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: u32,
}

impl TryFrom<HospitalRecord> for Candidate<Hospital> {
    type Error = HospitalError;

    fn try_from(record: HospitalRecord) -> Result<Self, Self::Error> {
        let location = Coordinate::new(record.latitude, record.longitude).map_err(|source| {
            HospitalError::InvalidCoordinate {
                id: record.id,
                source,
            }
        })?;
        Ok(Self::new(
            record.id,
            location,
            Hospital {
                name: record.name,
                address: record.address,
                phone: record.phone,
                rating: record.rating,
                reviews: record.reviews,
            },
        ))
    }
}

impl From<Candidate<Hospital>> for HospitalRecord {
    fn from(candidate: Candidate<Hospital>) -> Self {
        let Candidate {
            id,
            location,
            payload,
        } = candidate;
        Self {
            id,
            name: payload.name,
            address: payload.address,
            phone: payload.phone,
            latitude: location.latitude(),
            longitude: location.longitude(),
            rating: payload.rating,
            reviews: payload.reviews,
        }
    }
}
