//! Location provider trait, fixed providers and fallback resolution.

use log::warn;

use crate::Coordinate;

use super::error::LocationError;

/// Origin used when no position fix is available: lower Manhattan.
pub const DEFAULT_ORIGIN: Coordinate = Coordinate::from_trusted(40.7128, -74.0060);

/// Display label for [`DEFAULT_ORIGIN`].
pub const DEFAULT_ORIGIN_LABEL: &str = "New York, NY (Default)";

/// Supply the current position of the user.
///
/// # Examples
///
/// ```rust
/// use nearcare_core::{Coordinate, LocationError, LocationProvider};
///
/// struct Denied;
///
/// impl LocationProvider for Denied {
///     fn current_location(&self) -> Result<Coordinate, LocationError> {
///         Err(LocationError::PermissionDenied)
///     }
/// }
///
/// assert_eq!(Denied.current_location(), Err(LocationError::PermissionDenied));
/// ```
pub trait LocationProvider {
    /// Return the current position or the reason it is unknown.
    fn current_location(&self) -> Result<Coordinate, LocationError>;
}

/// Provider that always reports the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocationProvider(pub Coordinate);

impl LocationProvider for FixedLocationProvider {
    fn current_location(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Provider for environments without any geolocation capability.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedLocationProvider;

impl LocationProvider for UnsupportedLocationProvider {
    fn current_location(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Where a resolved origin came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OriginSource {
    /// The provider supplied a fix.
    Provider,
    /// The provider failed and [`DEFAULT_ORIGIN`] was substituted.
    Fallback,
}

/// An origin ready for ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOrigin {
    /// Coordinate to rank from.
    pub coordinate: Coordinate,
    /// Provenance of `coordinate`.
    pub source: OriginSource,
}

impl ResolvedOrigin {
    /// Whether the default origin was substituted.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, OriginSource::Fallback)
    }
}

/// Ask `provider` for a fix, falling back to [`DEFAULT_ORIGIN`] on failure.
///
/// ```
/// use nearcare_core::{DEFAULT_ORIGIN, OriginSource, UnsupportedLocationProvider, resolve_origin};
///
/// let origin = resolve_origin(&UnsupportedLocationProvider);
/// assert_eq!(origin.coordinate, DEFAULT_ORIGIN);
/// assert_eq!(origin.source, OriginSource::Fallback);
/// ```
pub fn resolve_origin<P>(provider: &P) -> ResolvedOrigin
where
    P: LocationProvider + ?Sized,
{
    match provider.current_location() {
        Ok(coordinate) => ResolvedOrigin {
            coordinate,
            source: OriginSource::Provider,
        },
        Err(err) => {
            warn!("location unavailable ({err}); falling back to {DEFAULT_ORIGIN_LABEL}");
            ResolvedOrigin {
                coordinate: DEFAULT_ORIGIN,
                source: OriginSource::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::StubLocationProvider;

    #[rstest]
    fn default_origin_is_valid() {
        let validated = Coordinate::new(DEFAULT_ORIGIN.latitude(), DEFAULT_ORIGIN.longitude())
            .expect("default origin should be in range");
        assert_eq!(validated, DEFAULT_ORIGIN);
    }

    #[rstest]
    fn provider_fix_is_used() {
        let here = Coordinate::new(51.5, -0.12).expect("valid coordinate");
        let origin = resolve_origin(&FixedLocationProvider(here));
        assert_eq!(origin.coordinate, here);
        assert!(!origin.is_fallback());
    }

    #[rstest]
    #[case(LocationError::PermissionDenied)]
    #[case(LocationError::Unsupported)]
    #[case(LocationError::Timeout { timeout_secs: 10 })]
    #[case(LocationError::Unavailable { message: "no satellites".into() })]
    fn any_failure_falls_back_to_default(#[case] error: LocationError) {
        let origin = resolve_origin(&StubLocationProvider::failing(error));
        assert_eq!(origin.coordinate, DEFAULT_ORIGIN);
        assert!(origin.is_fallback());
    }

    #[rstest]
    fn works_through_trait_objects() {
        let provider: Box<dyn LocationProvider> = Box::new(UnsupportedLocationProvider);
        assert!(resolve_origin(provider.as_ref()).is_fallback());
    }
}
