// ABOUTME: Integration tests for ingredient name normalization
// ABOUTME: Tests case folding, whitespace collapsing, plural mapping and idempotence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_dietary_engine::dietary::normalize;

// ============================================================================
// Case and Whitespace Tests
// ============================================================================

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(normalize("  Garlic "), "garlic");
    assert_eq!(normalize("PEANUT BUTTER"), "peanut butter");
}

#[test]
fn test_normalize_collapses_internal_whitespace() {
    assert_eq!(normalize("soy \t  sauce"), "soy sauce");
    assert_eq!(normalize("green\nonion"), "green onion");
}

#[test]
fn test_normalize_empty_and_blank_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \t "), "");
}

// ============================================================================
// Plural Mapping Tests
// ============================================================================

#[test]
fn test_normalize_maps_known_plurals() {
    assert_eq!(normalize("Tomatoes"), "tomato");
    assert_eq!(normalize("eggs"), "egg");
    assert_eq!(normalize("Mushrooms"), "mushroom");
    assert_eq!(normalize("anchovies"), "anchovy");
}

#[test]
fn test_normalize_maps_each_word() {
    assert_eq!(normalize("Green Onions"), "green onion");
    assert_eq!(normalize("roasted peanuts"), "roasted peanut");
}

#[test]
fn test_normalize_leaves_unknown_words_alone() {
    assert_eq!(normalize("radishes"), "radishes");
    assert_eq!(normalize("hummus"), "hummus");
}

// ============================================================================
// Idempotence Tests
// ============================================================================

#[test]
fn test_normalize_is_idempotent_on_canonical_forms() {
    for name in ["tomato", "egg", "cherry tomato", "", "peanut butter"] {
        assert_eq!(normalize(name), name);
        assert_eq!(normalize(&normalize(name)), normalize(name));
    }
}

#[test]
fn test_normalize_is_idempotent_on_plurals() {
    for name in ["Tomatoes", "  EGGS ", "Chickpeas", "nuts"] {
        let once = normalize(name);
        assert_eq!(normalize(&once), once);
    }
}
