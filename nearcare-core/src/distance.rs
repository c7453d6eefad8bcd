//! Great-circle distance on a spherical Earth.

use crate::Coordinate;

/// Mean Earth radius used for all distance calculations, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
///
/// The intermediate term is clamped to `[0, 1]` so rounding near antipodal
/// points cannot produce `NaN`. Identical inputs yield exactly `0.0`.
///
/// # Examples
///
/// ```
/// use nearcare_core::{Coordinate, haversine_km};
///
/// # fn main() -> Result<(), nearcare_core::CoordinateError> {
/// let origin = Coordinate::new(0.0, 0.0)?;
/// let east = Coordinate::new(0.0, 1.0)?;
/// assert!((haversine_km(origin, east) - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let from_latitude = from.latitude().to_radians();
    let to_latitude = to.latitude().to_radians();
    let delta_latitude = (to.latitude() - from.latitude()).to_radians();
    let delta_longitude = (to.longitude() - from.longitude()).to_radians();

    let a = ((delta_latitude / 2.0).sin().powi(2)
        + from_latitude.cos() * to_latitude.cos() * (delta_longitude / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("valid test coordinate")
    }

    #[rstest]
    #[case(at(0.0, 0.0))]
    #[case(at(40.7128, -74.006))]
    #[case(at(-90.0, 180.0))]
    fn distance_to_self_is_zero(#[case] point: Coordinate) {
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[rstest]
    #[case(at(0.0, 0.0), at(0.0, 1.0), 111.19)]
    #[case(at(0.0, 0.0), at(1.0, 0.0), 111.19)]
    #[case(at(40.7128, -74.006), at(40.7228, -74.006), 1.11)]
    fn matches_known_distances(
        #[case] from: Coordinate,
        #[case] to: Coordinate,
        #[case] expected_km: f64,
    ) {
        let distance = haversine_km(from, to);
        assert!(
            (distance - expected_km).abs() < 0.01,
            "expected ~{expected_km} km, got {distance}"
        );
    }

    #[rstest]
    fn antipodal_points_are_half_the_circumference() {
        let distance = haversine_km(at(0.0, 0.0), at(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance - half_circumference).abs() < 1e-6);
        assert!(distance.is_finite());
    }

    #[rstest]
    fn distance_is_symmetric() {
        let london = at(51.5074, -0.1278);
        let sydney = at(-33.8688, 151.2093);
        let there = haversine_km(london, sydney);
        let back = haversine_km(sydney, london);
        assert!((there - back).abs() < 1e-9);
    }
}
