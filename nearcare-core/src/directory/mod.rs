//! Look up candidate locations around an origin.
//!
//! A [`DirectoryLookup`] stands in for a places service. Its output is handed
//! unchanged to [`crate::rank_by_distance`]; directories need not return
//! candidates in any particular order.

mod error;
mod simulated;

pub use error::DirectoryError;
pub use simulated::SimulatedHospitalDirectory;

use crate::{Candidate, Coordinate};

/// Fetch candidates near an origin.
///
/// # Examples
///
/// ```rust
/// use nearcare_core::{Candidate, Coordinate, DirectoryError, DirectoryLookup};
///
/// struct OnSite;
///
/// impl DirectoryLookup for OnSite {
///     type Payload = &'static str;
///
///     fn candidates_near(
///         &self,
///         origin: Coordinate,
///     ) -> Result<Vec<Candidate<Self::Payload>>, DirectoryError> {
///         Ok(vec![Candidate::new(1, origin, "first aid post")])
///     }
/// }
///
/// let origin = Coordinate::new(0.0, 0.0)?;
/// assert_eq!(OnSite.candidates_near(origin)?.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait DirectoryLookup {
    /// Metadata attached to each candidate.
    type Payload;

    /// Return candidates relevant to `origin`.
    fn candidates_near(
        &self,
        origin: Coordinate,
    ) -> Result<Vec<Candidate<Self::Payload>>, DirectoryError>;
}
