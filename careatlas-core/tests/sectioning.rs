//! Integration tests for the sectioning engine's global ordering.

mod support;

use careatlas_core::{Candidate, PageRequest, PlanTier, Section, paginate, section_by_radius};
use rstest::rstest;
use support::{featured_provider, place, provider, radius};

fn names(results: &careatlas_core::SectionedResults) -> Vec<&str> {
    results
        .results
        .iter()
        .map(|r| r.candidate.display_name())
        .collect()
}

#[rstest]
fn full_sort_order_across_sections() {
    let providers = vec![
        featured_provider("featured-ent", PlanTier::Enterprise, Some(100.0)),
        provider("nearby-paid", PlanTier::Pro, Some(10.0)),
        provider("nearby-free", PlanTier::Free, Some(15.0)),
        provider("other-paid", PlanTier::Pro, Some(50.0)),
        provider("other-free", PlanTier::Free, Some(60.0)),
    ];
    let places = vec![place("place-nearby", Some(20.0)), place("place-other", Some(70.0))];

    let sectioned = section_by_radius(providers, places, radius(25.0));

    assert_eq!(
        names(&sectioned),
        vec![
            "featured-ent",
            "nearby-paid",
            "nearby-free",
            "place-nearby",
            "other-paid",
            "other-free",
            "place-other",
        ]
    );
    assert_eq!(sectioned.featured_count, 1);
    assert_eq!(sectioned.nearby_count, 3);
    assert_eq!(sectioned.other_count, 3);

    let sections: Vec<Section> = sectioned.results.iter().map(|r| r.section).collect();
    assert_eq!(
        sections,
        vec![
            Section::Featured,
            Section::Nearby,
            Section::Nearby,
            Section::Nearby,
            Section::Other,
            Section::Other,
            Section::Other,
        ]
    );
}

#[rstest]
fn featured_tag_implies_featured_flag() {
    let providers = vec![
        featured_provider("f", PlanTier::Free, None),
        provider("p", PlanTier::Pro, Some(1.0)),
    ];
    let sectioned = section_by_radius(providers, Vec::new(), radius(25.0));
    for result in &sectioned.results {
        if result.section == Section::Featured {
            match &result.candidate {
                Candidate::Provider(listing) => assert!(listing.is_featured),
                Candidate::Place(p) => panic!("place {} tagged featured", p.name),
            }
        }
    }
}

#[rstest]
fn radius_boundary_is_inclusive() {
    let providers = vec![provider("on-boundary", PlanTier::Free, Some(25.0))];
    let sectioned = section_by_radius(providers, Vec::new(), radius(25.0));
    assert_eq!(sectioned.nearby_count, 1);
    assert_eq!(sectioned.other_count, 0);
}

#[rstest]
fn unknown_distance_is_excluded_from_nearby() {
    let providers = vec![provider("unlocated", PlanTier::Enterprise, None)];
    let sectioned = section_by_radius(providers, Vec::new(), radius(25.0));
    assert_eq!(sectioned.nearby_count, 0);
    assert_eq!(sectioned.other_count, 1);
}

#[rstest]
fn paid_featured_listings_sort_before_free_featured() {
    let providers = vec![
        featured_provider("featured-free", PlanTier::Free, Some(1.0)),
        featured_provider("featured-paid", PlanTier::Pro, Some(90.0)),
    ];
    let sectioned = section_by_radius(providers, Vec::new(), radius(25.0));
    assert_eq!(names(&sectioned), vec!["featured-paid", "featured-free"]);
}

#[rstest]
fn sectioned_results_paginate_in_display_order() {
    let providers = vec![
        featured_provider("f", PlanTier::Enterprise, Some(45.0)),
        provider("near-paid", PlanTier::Pro, Some(5.0)),
        provider("near-free", PlanTier::Free, Some(10.0)),
        provider("far-free", PlanTier::Free, Some(80.0)),
    ];
    let places = vec![place("gp", Some(8.0))];

    let sectioned = section_by_radius(providers, places, radius(25.0));
    let request = PageRequest::new(2, 2).expect("valid request");
    let page = paginate(sectioned.into_results(), request);

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_more);
    let page_names: Vec<&str> = page.items.iter().map(|r| r.candidate.display_name()).collect();
    assert_eq!(page_names, vec!["near-free", "gp"]);
}
