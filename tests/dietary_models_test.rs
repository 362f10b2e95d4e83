// ABOUTME: Integration tests for dietary model types
// ABOUTME: Tests tag spellings, parsing failures, serde shapes and relaxation step identifiers
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_dietary_engine::errors::{AppError, ErrorCode};
use pierre_dietary_engine::models::{
    AllergenTag, CalorieRange, DietTag, RelaxationStepId, RestrictionProfile, SearchOptions,
    ValidationReport,
};
use serde_json::json;

// ============================================================================
// Diet Tag Tests
// ============================================================================

#[test]
fn test_diet_tag_spellings_parse_back() {
    for diet in DietTag::ALL {
        assert_eq!(diet.as_str().parse::<DietTag>().unwrap(), diet);
    }
    assert_eq!(DietTag::LowFodmap.to_string(), "low-fodmap");
}

#[test]
fn test_diet_tag_accepts_alias_and_case() {
    assert_eq!("low_fodmap".parse::<DietTag>().unwrap(), DietTag::LowFodmap);
    assert_eq!(" Vegan ".parse::<DietTag>().unwrap(), DietTag::Vegan);
}

#[test]
fn test_unknown_diet_tag_is_invalid_input() {
    let err = "fruitarian".parse::<DietTag>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.to_string().contains("fruitarian"));
}

#[test]
fn test_only_none_is_unrestrictive() {
    let unrestrictive: Vec<DietTag> = DietTag::ALL
        .into_iter()
        .filter(|diet| !diet.is_restrictive())
        .collect();
    assert_eq!(unrestrictive, vec![DietTag::None]);
}

// ============================================================================
// Allergen Tag Tests
// ============================================================================

#[test]
fn test_allergen_parse_is_total() {
    assert_eq!(AllergenTag::parse("Tree Nuts"), AllergenTag::TreeNuts);
    assert_eq!(AllergenTag::parse("egg"), AllergenTag::Eggs);
    assert_eq!(
        AllergenTag::parse(" Lupin "),
        AllergenTag::Other("lupin".to_owned())
    );
}

#[test]
fn test_allergen_serde_uses_plain_strings() {
    let allergies = vec![AllergenTag::TreeNuts, AllergenTag::Other("lupin".to_owned())];
    let json = serde_json::to_value(&allergies).unwrap();
    assert_eq!(json, json!(["tree_nuts", "lupin"]));

    let back: Vec<AllergenTag> = serde_json::from_value(json).unwrap();
    assert_eq!(back, allergies);
}

// ============================================================================
// Profile and Options Serde Tests
// ============================================================================

#[test]
fn test_profile_serializes_camel_case() {
    let profile = RestrictionProfile::new()
        .with_diet(DietTag::LowFodmap)
        .with_strict_fodmap(true);
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["diets"], json!(["low-fodmap"]));
    assert_eq!(json["strictFodmap"], json!(true));
}

#[test]
fn test_options_from_empty_object() {
    let options: SearchOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, SearchOptions::default());
    assert!(options.calorie_range.is_none());
}

#[test]
fn test_calorie_range_helpers() {
    assert!(CalorieRange::default().is_unbounded());
    assert!(!CalorieRange::at_most(400).is_unbounded());
    assert_eq!(CalorieRange::between(100, 400).min, Some(100));
}

// ============================================================================
// Relaxation Step Id and Report Tests
// ============================================================================

#[test]
fn test_step_ids_parse_and_display() {
    for id in [
        RelaxationStepId::Time,
        RelaxationStepId::CommonExclusions,
        RelaxationStepId::Calories,
        RelaxationStepId::Diet,
    ] {
        assert_eq!(id.to_string().parse::<RelaxationStepId>().unwrap(), id);
        assert_eq!(serde_json::to_value(id).unwrap(), json!(id.as_str()));
    }
    assert!("relax_allergies".parse::<RelaxationStepId>().is_err());
}

#[test]
fn test_validation_report_flags() {
    let mut report = ValidationReport::default();
    assert!(report.is_valid());
    assert!(!report.has_warnings());

    report.warnings.push("careful".to_owned());
    assert!(report.is_valid());
    assert!(report.has_warnings());

    report.errors.push("broken".to_owned());
    assert!(!report.is_valid());
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_error_codes_and_display() {
    let err = AppError::storage("Failed to read profile.json");
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(
        err.to_string(),
        "Storage operation failed: Failed to read profile.json"
    );

    for (code, name) in [
        (ErrorCode::InvalidInput, "INVALID_INPUT"),
        (ErrorCode::ConfigInvalid, "CONFIG_INVALID"),
        (ErrorCode::StorageError, "STORAGE_ERROR"),
        (ErrorCode::SerializationError, "SERIALIZATION_ERROR"),
    ] {
        assert_eq!(serde_json::to_value(code).unwrap(), json!(name));
    }
}
