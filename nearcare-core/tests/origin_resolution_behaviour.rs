//! Behavioural tests for origin resolution and the simulated directory.

use nearcare_core::{
    Coordinate, DEFAULT_ORIGIN, DirectoryLookup, Hospital, LocationError, OriginSource,
    RankedCandidate, ResolvedOrigin, SimulatedHospitalDirectory, nearest, resolve_origin,
    test_support::StubLocationProvider,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

fn london() -> Coordinate {
    Coordinate::new(51.5074, -0.1278).expect("valid coordinate")
}

#[fixture]
fn provider() -> RefCell<Option<StubLocationProvider>> {
    RefCell::new(None)
}

#[fixture]
fn resolved() -> RefCell<Option<ResolvedOrigin>> {
    RefCell::new(None)
}

#[fixture]
fn hospitals() -> RefCell<Vec<RankedCandidate<Hospital>>> {
    RefCell::new(Vec::new())
}

#[given("a location provider reporting London")]
fn given_london(#[from(provider)] provider: &RefCell<Option<StubLocationProvider>>) {
    *provider.borrow_mut() = Some(StubLocationProvider::at(london()));
}

#[given("a location provider that is denied access")]
fn given_denied(#[from(provider)] provider: &RefCell<Option<StubLocationProvider>>) {
    *provider.borrow_mut() = Some(StubLocationProvider::failing(
        LocationError::PermissionDenied,
    ));
}

#[when("I resolve the origin")]
fn when_resolve(
    #[from(provider)] provider: &RefCell<Option<StubLocationProvider>>,
    #[from(resolved)] resolved: &RefCell<Option<ResolvedOrigin>>,
) {
    let borrow = provider.borrow();
    let stub = borrow.as_ref().expect("provider configured");
    *resolved.borrow_mut() = Some(resolve_origin(stub));
}

#[when("I look up the three nearest simulated hospitals")]
fn when_lookup(
    #[from(resolved)] resolved: &RefCell<Option<ResolvedOrigin>>,
    #[from(hospitals)] hospitals: &RefCell<Vec<RankedCandidate<Hospital>>>,
) {
    let start = resolved.borrow().expect("origin resolved").coordinate;
    let candidates = SimulatedHospitalDirectory
        .candidates_near(start)
        .expect("simulated directory never fails");
    *hospitals.borrow_mut() = nearest(start, candidates, 3);
}

#[then("the origin is London")]
fn then_london(#[from(resolved)] resolved: &RefCell<Option<ResolvedOrigin>>) {
    let origin = resolved.borrow().expect("origin resolved");
    assert_eq!(origin.coordinate, london());
}

#[then("the origin came from the provider")]
fn then_from_provider(#[from(resolved)] resolved: &RefCell<Option<ResolvedOrigin>>) {
    let origin = resolved.borrow().expect("origin resolved");
    assert_eq!(origin.source, OriginSource::Provider);
}

#[then("the origin is the default origin")]
fn then_default(#[from(resolved)] resolved: &RefCell<Option<ResolvedOrigin>>) {
    let origin = resolved.borrow().expect("origin resolved");
    assert_eq!(origin.coordinate, DEFAULT_ORIGIN);
}

#[then("the origin is marked as a fallback")]
fn then_fallback(#[from(resolved)] resolved: &RefCell<Option<ResolvedOrigin>>) {
    let origin = resolved.borrow().expect("origin resolved");
    assert!(origin.is_fallback(), "expected fallback origin");
}

#[then("the nearest hospital is City Medical Center")]
fn then_nearest(#[from(hospitals)] hospitals: &RefCell<Vec<RankedCandidate<Hospital>>>) {
    let borrow = hospitals.borrow();
    let first = borrow.first().expect("at least one hospital");
    assert_eq!(first.candidate.payload.name, "City Medical Center");
}

#[then("three hospitals are listed")]
fn then_three(#[from(hospitals)] hospitals: &RefCell<Vec<RankedCandidate<Hospital>>>) {
    assert_eq!(hospitals.borrow().len(), 3);
}

#[scenario(path = "tests/features/origin_resolution.feature", index = 0)]
fn position_fix_available(
    provider: RefCell<Option<StubLocationProvider>>,
    resolved: RefCell<Option<ResolvedOrigin>>,
    hospitals: RefCell<Vec<RankedCandidate<Hospital>>>,
) {
    let _ = (provider, resolved, hospitals);
}

#[scenario(path = "tests/features/origin_resolution.feature", index = 1)]
fn location_access_denied(
    provider: RefCell<Option<StubLocationProvider>>,
    resolved: RefCell<Option<ResolvedOrigin>>,
    hospitals: RefCell<Vec<RankedCandidate<Hospital>>>,
) {
    let _ = (provider, resolved, hospitals);
}

#[scenario(path = "tests/features/origin_resolution.feature", index = 2)]
fn nearest_hospitals_around_fallback(
    provider: RefCell<Option<StubLocationProvider>>,
    resolved: RefCell<Option<ResolvedOrigin>>,
    hospitals: RefCell<Vec<RankedCandidate<Hospital>>>,
) {
    let _ = (provider, resolved, hospitals);
}
