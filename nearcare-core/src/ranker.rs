//! Rank candidates by great-circle distance from an origin.
//!
//! Ranking is a pure function of its inputs: no logging, no shared state.
//! Candidates at equal distances keep their input order.

use crate::{Candidate, Coordinate, RankedCandidate, haversine_km};

/// Order `candidates` nearest-first relative to `origin`.
///
/// Every candidate is returned; truncation is left to the caller (see
/// [`nearest`]). An empty input yields an empty output.
///
/// # Examples
///
/// ```
/// use nearcare_core::{Candidate, Coordinate, rank_by_distance};
///
/// # fn main() -> Result<(), nearcare_core::CoordinateError> {
/// let origin = Coordinate::new(0.0, 0.0)?;
/// let ranked = rank_by_distance(
///     origin,
///     vec![
///         Candidate::bare(1, Coordinate::new(0.0, 1.0)?),
///         Candidate::bare(2, Coordinate::new(0.0, 0.0)?),
///     ],
/// );
/// let ids: Vec<u64> = ranked.iter().map(|r| r.candidate.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// assert_eq!(ranked[0].distance_km, 0.0);
/// # Ok(())
/// # }
/// ```
pub fn rank_by_distance<T, I>(origin: Coordinate, candidates: I) -> Vec<RankedCandidate<T>>
where
    I: IntoIterator<Item = Candidate<T>>,
{
    let mut ranked: Vec<RankedCandidate<T>> = candidates
        .into_iter()
        .map(|candidate| RankedCandidate {
            distance_km: haversine_km(origin, candidate.location),
            candidate,
        })
        .collect();
    // `sort_by` is stable, which preserves input order for ties.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Rank `candidates` and keep at most `limit` of the nearest.
///
/// ```
/// use nearcare_core::{Candidate, Coordinate, CoordinateError, nearest};
///
/// # fn main() -> Result<(), CoordinateError> {
/// let origin = Coordinate::new(0.0, 0.0)?;
/// let pool = (1..=10_u32)
///     .map(|i| origin.offset_by(0.0, f64::from(i)).map(|at| Candidate::bare(u64::from(i), at)))
///     .collect::<Result<Vec<_>, CoordinateError>>()?;
/// assert_eq!(nearest(origin, pool, 3).len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn nearest<T, I>(origin: Coordinate, candidates: I, limit: usize) -> Vec<RankedCandidate<T>>
where
    I: IntoIterator<Item = Candidate<T>>,
{
    let mut ranked = rank_by_distance(origin, candidates);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn at(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("valid test coordinate")
    }

    fn ids<T>(ranked: &[RankedCandidate<T>]) -> Vec<u64> {
        ranked.iter().map(|r| r.candidate.id).collect()
    }

    #[fixture]
    fn equator_trio() -> Vec<Candidate<&'static str>> {
        vec![
            Candidate::new(1, at(0.0, 1.0), "P1"),
            Candidate::new(2, at(1.0, 0.0), "P2"),
            Candidate::new(3, at(0.0, 0.0), "P3"),
        ]
    }

    #[rstest]
    fn ties_keep_input_order(equator_trio: Vec<Candidate<&'static str>>) {
        let ranked = rank_by_distance(at(0.0, 0.0), equator_trio);
        assert_eq!(ids(&ranked), vec![3, 1, 2]);
    }

    #[rstest]
    fn ties_follow_reversed_input_order(equator_trio: Vec<Candidate<&'static str>>) {
        let reordered = vec![
            equator_trio[1].clone(),
            equator_trio[0].clone(),
            equator_trio[2].clone(),
        ];
        let ranked = rank_by_distance(at(0.0, 0.0), reordered);
        assert_eq!(ids(&ranked), vec![3, 2, 1]);
    }

    #[rstest]
    fn payload_passes_through_unchanged(equator_trio: Vec<Candidate<&'static str>>) {
        let ranked = rank_by_distance(at(0.0, 0.0), equator_trio);
        let payloads: Vec<&str> = ranked.iter().map(|r| r.candidate.payload).collect();
        assert_eq!(payloads, vec!["P3", "P1", "P2"]);
    }

    #[rstest]
    fn empty_input_yields_empty_output() {
        let ranked = rank_by_distance(at(10.0, 10.0), Vec::<Candidate<()>>::new());
        assert!(ranked.is_empty());
    }

    #[rstest]
    fn ranking_is_idempotent(equator_trio: Vec<Candidate<&'static str>>) {
        let origin = at(0.5, 0.25);
        let first = rank_by_distance(origin, equator_trio);
        let second = rank_by_distance(
            origin,
            first.iter().cloned().map(RankedCandidate::into_candidate),
        );
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(3, 3)]
    #[case(10, 3)]
    fn nearest_truncates_to_limit(
        equator_trio: Vec<Candidate<&'static str>>,
        #[case] limit: usize,
        #[case] expected: usize,
    ) {
        let ranked = nearest(at(0.0, 0.0), equator_trio, limit);
        assert_eq!(ranked.len(), expected);
    }
}
