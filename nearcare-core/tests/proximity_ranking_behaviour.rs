//! Behavioural tests for proximity ranking.

use nearcare_core::{Candidate, Coordinate, RankedCandidate, rank_by_distance};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

fn at(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).expect("valid test coordinate")
}

#[fixture]
fn origin() -> RefCell<Option<Coordinate>> {
    RefCell::new(None)
}

#[fixture]
fn candidates() -> RefCell<Vec<Candidate<&'static str>>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn ranked() -> RefCell<Vec<RankedCandidate<&'static str>>> {
    RefCell::new(Vec::new())
}

#[given("an origin on the equator at the prime meridian")]
fn given_equator_origin(#[from(origin)] origin: &RefCell<Option<Coordinate>>) {
    *origin.borrow_mut() = Some(at(0.0, 0.0));
}

#[given("an origin in lower Manhattan")]
fn given_manhattan_origin(#[from(origin)] origin: &RefCell<Option<Coordinate>>) {
    *origin.borrow_mut() = Some(at(40.7128, -74.0060));
}

#[given("candidates one degree east, one degree north and at the origin")]
fn given_equator_candidates(
    #[from(candidates)] candidates: &RefCell<Vec<Candidate<&'static str>>>,
) {
    *candidates.borrow_mut() = vec![
        Candidate::new(1, at(0.0, 1.0), "east"),
        Candidate::new(2, at(1.0, 0.0), "north"),
        Candidate::new(3, at(0.0, 0.0), "origin"),
    ];
}

#[given("a candidate one hundredth of a degree further north")]
fn given_manhattan_candidate(
    #[from(candidates)] candidates: &RefCell<Vec<Candidate<&'static str>>>,
) {
    *candidates.borrow_mut() = vec![Candidate::new(1, at(40.7228, -74.0060), "uptown")];
}

#[given("no candidates")]
fn given_no_candidates(#[from(candidates)] candidates: &RefCell<Vec<Candidate<&'static str>>>) {
    candidates.borrow_mut().clear();
}

#[when("I rank the candidates")]
fn when_rank(
    #[from(origin)] origin: &RefCell<Option<Coordinate>>,
    #[from(candidates)] candidates: &RefCell<Vec<Candidate<&'static str>>>,
    #[from(ranked)] ranked: &RefCell<Vec<RankedCandidate<&'static str>>>,
) {
    let start = origin.borrow().expect("origin configured");
    *ranked.borrow_mut() = rank_by_distance(start, candidates.borrow().clone());
}

#[then("the order is the origin candidate, then east, then north")]
fn then_stable_order(#[from(ranked)] ranked: &RefCell<Vec<RankedCandidate<&'static str>>>) {
    let labels: Vec<&str> = ranked.borrow().iter().map(|r| r.candidate.payload).collect();
    assert_eq!(labels, vec!["origin", "east", "north"]);
}

#[then("the first distance is about 1.11 kilometres")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point distances"
)]
fn then_manhattan_distance(#[from(ranked)] ranked: &RefCell<Vec<RankedCandidate<&'static str>>>) {
    let borrow = ranked.borrow();
    let first = borrow.first().expect("one ranked candidate");
    assert!(
        (first.distance_km - 1.11).abs() < 0.01,
        "unexpected distance {}",
        first.distance_km
    );
}

#[then("no ranked candidates are returned")]
fn then_empty(#[from(ranked)] ranked: &RefCell<Vec<RankedCandidate<&'static str>>>) {
    assert!(ranked.borrow().is_empty(), "expected no ranked candidates");
}

#[scenario(path = "tests/features/proximity_ranking.feature", index = 0)]
fn equidistant_candidates_are_stable(
    origin: RefCell<Option<Coordinate>>,
    candidates: RefCell<Vec<Candidate<&'static str>>>,
    ranked: RefCell<Vec<RankedCandidate<&'static str>>>,
) {
    let _ = (origin, candidates, ranked);
}

#[scenario(path = "tests/features/proximity_ranking.feature", index = 1)]
fn manhattan_candidate_distance(
    origin: RefCell<Option<Coordinate>>,
    candidates: RefCell<Vec<Candidate<&'static str>>>,
    ranked: RefCell<Vec<RankedCandidate<&'static str>>>,
) {
    let _ = (origin, candidates, ranked);
}

#[scenario(path = "tests/features/proximity_ranking.feature", index = 2)]
fn ranking_nothing(
    origin: RefCell<Option<Coordinate>>,
    candidates: RefCell<Vec<Candidate<&'static str>>>,
    ranked: RefCell<Vec<RankedCandidate<&'static str>>>,
) {
    let _ = (origin, candidates, ranked);
}
