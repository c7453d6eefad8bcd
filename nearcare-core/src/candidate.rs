//! Candidate locations and their ranked form.

use crate::Coordinate;

/// A location that may be ranked by proximity.
///
/// `payload` carries caller-defined display metadata (name, phone, rating,
/// ...). Ranking never inspects or alters it.
///
/// # Examples
///
/// ```
/// use nearcare_core::{Candidate, Coordinate};
///
/// # fn main() -> Result<(), nearcare_core::CoordinateError> {
/// let clinic = Candidate::new(7, Coordinate::new(40.72, -74.0)?, "Walk-in clinic");
/// assert_eq!(clinic.id, 7);
/// assert_eq!(clinic.payload, "Walk-in clinic");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate<T> {
    /// Caller-assigned identifier; never interpreted.
    pub id: u64,
    /// Position used for ranking.
    pub location: Coordinate,
    /// Metadata passed through unchanged.
    pub payload: T,
}

impl<T> Candidate<T> {
    /// Construct a [`Candidate`].
    pub const fn new(id: u64, location: Coordinate, payload: T) -> Self {
        Self {
            id,
            location,
            payload,
        }
    }
}

impl Candidate<()> {
    /// Construct a [`Candidate`] without payload.
    #[must_use]
    pub const fn bare(id: u64, location: Coordinate) -> Self {
        Self::new(id, location, ())
    }
}

/// A [`Candidate`] annotated with its distance from a query origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedCandidate<T> {
    /// The ranked candidate.
    pub candidate: Candidate<T>,
    /// Great-circle distance from the origin, in kilometres. Never negative.
    pub distance_km: f64,
}

impl<T> RankedCandidate<T> {
    /// Discard the distance annotation.
    pub fn into_candidate(self) -> Candidate<T> {
        self.candidate
    }
}
