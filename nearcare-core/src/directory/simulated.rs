//! Fixture directory placing five hospitals around any origin.

use crate::{Candidate, Coordinate, Hospital, HospitalError};

use super::{DirectoryError, DirectoryLookup};

struct Fixture {
    id: u64,
    name: &'static str,
    address: &'static str,
    phone: &'static str,
    delta_latitude: f64,
    delta_longitude: f64,
    rating: f32,
    reviews: u32,
}

const FIXTURES: [Fixture; 5] = [
    Fixture {
        id: 1,
        name: "City Medical Center",
        address: "123 Healthcare Blvd, Suite 200",
        phone: "2125551234",
        delta_latitude: 0.01,
        delta_longitude: 0.01,
        rating: 4.8,
        reviews: 120,
    },
    Fixture {
        id: 2,
        name: "General Hospital",
        address: "456 Medical Plaza, Floor 5",
        phone: "2125555678",
        delta_latitude: -0.02,
        delta_longitude: 0.015,
        rating: 4.6,
        reviews: 98,
    },
    Fixture {
        id: 3,
        name: "Nephrology Clinic",
        address: "789 Kidney Care Lane, Suite 10",
        phone: "2125559012",
        delta_latitude: 0.005,
        delta_longitude: -0.02,
        rating: 4.9,
        reviews: 85,
    },
    Fixture {
        id: 4,
        name: "University Medical Center",
        address: "321 Academic Drive, Building A",
        phone: "2125553456",
        delta_latitude: -0.01,
        delta_longitude: -0.01,
        rating: 4.7,
        reviews: 150,
    },
    Fixture {
        id: 5,
        name: "Community Health Hospital",
        address: "654 Wellness Street, Main Campus",
        phone: "2125557890",
        delta_latitude: 0.015,
        delta_longitude: 0.02,
        rating: 4.5,
        reviews: 75,
    },
];

/// Directory that fabricates five hospitals at fixed offsets from the origin.
///
/// Useful for demos and tests where no places service is reachable. The
/// records are returned in declaration order, not by distance.
///
/// # Examples
///
/// ```
/// use nearcare_core::{DEFAULT_ORIGIN, DirectoryLookup, SimulatedHospitalDirectory};
///
/// let hospitals = SimulatedHospitalDirectory.candidates_near(DEFAULT_ORIGIN)?;
/// assert_eq!(hospitals.len(), 5);
/// assert_eq!(hospitals[0].payload.name, "City Medical Center");
/// # Ok::<(), nearcare_core::DirectoryError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedHospitalDirectory;

impl DirectoryLookup for SimulatedHospitalDirectory {
    type Payload = Hospital;

    fn candidates_near(
        &self,
        origin: Coordinate,
    ) -> Result<Vec<Candidate<Hospital>>, DirectoryError> {
        FIXTURES
            .iter()
            .map(|fixture| -> Result<Candidate<Hospital>, DirectoryError> {
                let location = origin
                    .offset_by(fixture.delta_latitude, fixture.delta_longitude)
                    .map_err(|source| HospitalError::InvalidCoordinate {
                        id: fixture.id,
                        source,
                    })?;
                Ok(Candidate::new(
                    fixture.id,
                    location,
                    Hospital {
                        name: fixture.name.to_owned(),
                        address: fixture.address.to_owned(),
                        phone: fixture.phone.to_owned(),
                        rating: fixture.rating,
                        reviews: fixture.reviews,
                    },
                ))
            })
            .collect()
    }
}
