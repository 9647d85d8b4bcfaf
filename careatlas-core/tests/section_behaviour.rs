//! Behaviour-driven tests for sectioning.

mod support;

use careatlas_core::{
    PlaceListing, PlanTier, ProviderListing, Section, SectionedResults, section_by_radius,
    section_statewide,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use support::{featured_provider, place, provider, radius};

#[fixture]
fn providers() -> RefCell<Vec<ProviderListing>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn places() -> RefCell<Vec<PlaceListing>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn outcome() -> RefCell<Option<SectionedResults>> {
    RefCell::new(None)
}

#[given("a featured provider 40 miles away and a free provider 5 miles away")]
fn given_featured_and_free(#[from(providers)] providers: &RefCell<Vec<ProviderListing>>) {
    providers.borrow_mut().extend([
        featured_provider("featured", PlanTier::Enterprise, Some(40.0)),
        provider("free", PlanTier::Free, Some(5.0)),
    ]);
}

#[given("a paid provider 50 miles away and a place 10 miles away")]
fn given_paid_and_place(
    #[from(providers)] providers: &RefCell<Vec<ProviderListing>>,
    #[from(places)] places: &RefCell<Vec<PlaceListing>>,
) {
    providers
        .borrow_mut()
        .push(provider("paid", PlanTier::Pro, Some(50.0)));
    places.borrow_mut().push(place("clinic", Some(10.0)));
}

#[when("the candidates are sectioned with a 25 mile radius")]
fn when_sectioned_by_radius(
    #[from(providers)] providers: &RefCell<Vec<ProviderListing>>,
    #[from(places)] places: &RefCell<Vec<PlaceListing>>,
    #[from(outcome)] outcome: &RefCell<Option<SectionedResults>>,
) {
    let provider_rows = std::mem::take(&mut *providers.borrow_mut());
    let place_rows = std::mem::take(&mut *places.borrow_mut());
    outcome.replace(Some(section_by_radius(
        provider_rows,
        place_rows,
        radius(25.0),
    )));
}

#[when("the candidates are sectioned state-wide")]
fn when_sectioned_statewide(
    #[from(providers)] providers: &RefCell<Vec<ProviderListing>>,
    #[from(places)] places: &RefCell<Vec<PlaceListing>>,
    #[from(outcome)] outcome: &RefCell<Option<SectionedResults>>,
) {
    let provider_rows = std::mem::take(&mut *providers.borrow_mut());
    let place_rows = std::mem::take(&mut *places.borrow_mut());
    outcome.replace(Some(section_statewide(provider_rows, place_rows)));
}

#[then("the first result is in the Featured section")]
fn then_first_is_featured(#[from(outcome)] outcome: &RefCell<Option<SectionedResults>>) {
    let outcome = outcome.borrow();
    let sectioned = outcome.as_ref().expect("candidates were sectioned");
    let first = sectioned.results.first().expect("results are not empty");
    assert_eq!(first.section, Section::Featured);
}

#[then("the Nearby section count is {expected}")]
fn then_nearby_count(expected: usize, #[from(outcome)] outcome: &RefCell<Option<SectionedResults>>) {
    let outcome = outcome.borrow();
    let sectioned = outcome.as_ref().expect("candidates were sectioned");
    assert_eq!(sectioned.nearby_count, expected);
}

#[then("the Other section count is {expected}")]
fn then_other_count(expected: usize, #[from(outcome)] outcome: &RefCell<Option<SectionedResults>>) {
    let outcome = outcome.borrow();
    let sectioned = outcome.as_ref().expect("candidates were sectioned");
    assert_eq!(sectioned.other_count, expected);
}

#[scenario(path = "tests/features/sectioning.feature", index = 0)]
fn featured_listings_lead(
    providers: RefCell<Vec<ProviderListing>>,
    places: RefCell<Vec<PlaceListing>>,
    outcome: RefCell<Option<SectionedResults>>,
) {
    let _ = (providers, places, outcome);
}

#[scenario(path = "tests/features/sectioning.feature", index = 1)]
fn distant_candidates_fall_into_other(
    providers: RefCell<Vec<ProviderListing>>,
    places: RefCell<Vec<PlaceListing>>,
    outcome: RefCell<Option<SectionedResults>>,
) {
    let _ = (providers, places, outcome);
}

#[scenario(path = "tests/features/sectioning.feature", index = 2)]
fn statewide_search_has_no_other_section(
    providers: RefCell<Vec<ProviderListing>>,
    places: RefCell<Vec<PlaceListing>>,
    outcome: RefCell<Option<SectionedResults>>,
) {
    let _ = (providers, places, outcome);
}
