// ABOUTME: Exclusion set builder unioning diet, allergen and user exclusions
// ABOUTME: Normalizes, deduplicates and synonym-expands (one level) into a sorted list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalizer::normalize;
use super::vocabulary::{allergen_exclusions, diet_exclusions, synonyms};
use pierre_core::models::{AllergenTag, RestrictionProfile};
use std::collections::BTreeSet;
use tracing::debug;

/// Build the exclusion set for a profile
///
/// Collects diet-implied exclusions (strict low-FODMAP table when enabled),
/// allergen-implied exclusions and the user's own exclusions, normalizes and
/// deduplicates them, then expands every entry through the synonym table.
/// Synonyms are looked up per original entry, so synonyms of synonyms are
/// never chased.
///
/// The result is sorted lexicographically; the order feeds the query string
/// and must not depend on the order of the profile's collections.
#[must_use]
pub fn build_exclusions(profile: &RestrictionProfile) -> Vec<String> {
    let mut collected: Vec<String> = Vec::new();

    for diet in profile.diets.iter().filter(|diet| diet.is_restrictive()) {
        collected.extend(
            diet_exclusions(*diet, profile.strict_fodmap)
                .iter()
                .map(|&item| item.to_owned()),
        );
    }

    // Allergens exclude ingredients in addition to their intolerance tokens
    for allergen in &profile.allergies {
        match allergen {
            AllergenTag::Other(tag) => collected.push(tag.clone()),
            known => collected.extend(
                allergen_exclusions(known)
                    .iter()
                    .map(|&item| item.to_owned()),
            ),
        }
    }

    collected.extend(profile.exclusions.iter().cloned());

    let base: BTreeSet<String> = collected
        .iter()
        .map(|item| normalize(item))
        .filter(|item| !item.is_empty())
        .collect();

    let mut expanded: BTreeSet<String> = BTreeSet::new();
    for entry in &base {
        expanded.extend(synonyms(entry).iter().map(|&alias| normalize(alias)));
        expanded.insert(entry.clone());
    }

    debug!(
        collected = collected.len(),
        distinct = base.len(),
        expanded = expanded.len(),
        "Built exclusion set"
    );

    expanded.into_iter().collect()
}
