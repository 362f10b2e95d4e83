// ABOUTME: Integration tests for loading restriction profiles and search options from JSON
// ABOUTME: Tests field defaults, tag parsing and error code mapping for missing or bad files
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_dietary_engine::dietary::{load_profile, load_search_options, parse_profile_json};
use pierre_dietary_engine::errors::ErrorCode;
use pierre_dietary_engine::models::{AllergenTag, CalorieRange, DietTag};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_full_profile() {
    let profile = parse_profile_json(
        r#"{
            "diets": ["low_fodmap", "vegan"],
            "allergies": ["tree_nuts", "Peanut", "mustard"],
            "exclusions": ["cilantro"],
            "preferences": ["quick"],
            "strictFodmap": true
        }"#,
    )
    .unwrap();

    assert_eq!(profile.diets, vec![DietTag::LowFodmap, DietTag::Vegan]);
    assert_eq!(
        profile.allergies,
        vec![
            AllergenTag::TreeNuts,
            AllergenTag::Peanuts,
            AllergenTag::Other("mustard".to_owned()),
        ]
    );
    assert_eq!(profile.exclusions, vec!["cilantro".to_owned()]);
    assert!(profile.strict_fodmap);
}

#[test]
fn test_missing_fields_default() {
    let profile = parse_profile_json(r#"{"diets": ["paleo"]}"#).unwrap();

    assert_eq!(profile.diets, vec![DietTag::Paleo]);
    assert!(profile.allergies.is_empty());
    assert!(!profile.strict_fodmap);
}

#[test]
fn test_unknown_diet_is_rejected() {
    let err = parse_profile_json(r#"{"diets": ["carnivore"]}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.message.contains("carnivore"));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_profile_and_options_from_files() {
    let dir = TempDir::new().unwrap();
    let profile_path = dir.path().join("profile.json");
    let options_path = dir.path().join("options.json");
    fs::write(&profile_path, r#"{"diets": ["vegetarian"], "allergies": ["eggs"]}"#).unwrap();
    fs::write(
        &options_path,
        r#"{"resultCount": 5, "maxReadyTimeMinutes": 30, "calorieRange": {"max": 500}}"#,
    )
    .unwrap();

    let profile = load_profile(&profile_path).unwrap();
    let options = load_search_options(&options_path).unwrap();

    assert_eq!(profile.diets, vec![DietTag::Vegetarian]);
    assert_eq!(profile.allergies, vec![AllergenTag::Eggs]);
    assert_eq!(options.result_count, Some(5));
    assert_eq!(options.offset, None);
    assert_eq!(options.max_ready_time_minutes, Some(30));
    assert_eq!(options.calorie_range, Some(CalorieRange::at_most(500)));
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = load_profile(&dir.path().join("absent.json")).unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.message.contains("absent.json"));
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_search_options(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}
