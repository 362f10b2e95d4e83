// ABOUTME: Integration tests for the conflict validator
// ABOUTME: Tests diet conflicts, over-restriction thresholds and vegan exclusion warnings
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_dietary_engine::config::ValidationConfig;
use pierre_dietary_engine::dietary::{validate, validate_with};
use pierre_dietary_engine::models::{AllergenTag, DietTag, RestrictionProfile};

fn seven_allergies() -> RestrictionProfile {
    AllergenTag::KNOWN
        .iter()
        .take(7)
        .cloned()
        .fold(RestrictionProfile::new(), |profile, allergen| {
            profile.with_allergy(allergen)
        })
}

// ============================================================================
// Diet Conflict Tests
// ============================================================================

#[test]
fn test_vegan_and_ketogenic_conflict() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::Vegan)
        .with_diet(DietTag::Ketogenic);
    let report = validate(&profile);

    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("vegan"));
    assert!(report.errors[0].contains("ketogenic"));
}

#[test]
fn test_conflict_is_order_independent() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::Pescatarian)
        .with_diet(DietTag::Vegetarian);
    let report = validate(&profile);

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("vegetarian"));
    assert!(report.errors[0].contains("pescatarian"));
}

#[test]
fn test_every_conflicting_pair_is_reported() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::Vegan)
        .with_diet(DietTag::Paleo)
        .with_diet(DietTag::Whole30);
    let report = validate(&profile);

    assert_eq!(report.errors.len(), 2);
}

#[test]
fn test_compatible_profile_is_clean() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::Vegan)
        .with_allergy(AllergenTag::Dairy)
        .with_exclusion("cilantro");
    let report = validate(&profile);

    assert!(report.is_valid());
    assert!(!report.has_warnings());
}

// ============================================================================
// Over-Restriction Tests
// ============================================================================

#[test]
fn test_seven_allergies_warn_without_errors() {
    let report = validate(&seven_allergies());

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("over-restriction"));
}

#[test]
fn test_six_allergies_with_duplicates_do_not_warn() {
    let profile = AllergenTag::KNOWN
        .iter()
        .take(6)
        .chain(AllergenTag::KNOWN.iter().take(3))
        .cloned()
        .fold(RestrictionProfile::new(), |profile, allergen| {
            profile.with_allergy(allergen)
        });
    let report = validate(&profile);

    assert!(!report.has_warnings());
}

#[test]
fn test_many_exclusions_warn() {
    let profile = (0..21).fold(RestrictionProfile::new(), |profile, i| {
        profile.with_exclusion(format!("ingredient {i}"))
    });
    let report = validate(&profile);

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("21"));
}

#[test]
fn test_exclusions_counted_after_normalization() {
    let mut profile = (0..19).fold(RestrictionProfile::new(), |profile, i| {
        profile.with_exclusion(format!("ingredient {i}"))
    });
    profile.exclusions.push("Tomatoes".to_owned());
    profile.exclusions.push("tomato".to_owned());
    profile.exclusions.push("  TOMATO ".to_owned());

    assert!(!validate(&profile).has_warnings());
}

#[test]
fn test_thresholds_come_from_config() {
    let config = ValidationConfig {
        max_distinct_allergies: 1,
        max_distinct_exclusions: 20,
    };
    let profile = RestrictionProfile::new()
        .with_allergy(AllergenTag::Soy)
        .with_allergy(AllergenTag::Sesame);

    assert!(validate_with(&profile, &config).has_warnings());
    assert!(!validate(&profile).has_warnings());
}

// ============================================================================
// Vegan Exclusion and None Diet Tests
// ============================================================================

#[test]
fn test_vegan_with_animal_exclusions_warns() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::Vegan)
        .with_exclusion("Eggs")
        .with_exclusion("onion");
    let report = validate(&profile);

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("egg"));
    assert!(!report.warnings[0].contains("onion"));
}

#[test]
fn test_animal_exclusions_without_vegan_are_fine() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::Vegetarian)
        .with_exclusion("eggs");
    assert!(!validate(&profile).has_warnings());
}

#[test]
fn test_none_combined_with_diet_warns() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::None)
        .with_diet(DietTag::Paleo);
    let report = validate(&profile);

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("none"));
}

// ============================================================================
// Independence Tests
// ============================================================================

#[test]
fn test_all_checks_run() {
    let mut profile = seven_allergies()
        .with_diet(DietTag::Vegan)
        .with_diet(DietTag::Ketogenic)
        .with_exclusion("butter");
    profile.diets.push(DietTag::None);
    let report = validate(&profile);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.warnings.len(), 3);
}
