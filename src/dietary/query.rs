// ABOUTME: Query translator turning a restriction profile and search options into the external query shape
// ABOUTME: Maps the primary diet and allergies to API tokens and attaches the exclusion string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Query Translation
//!
//! ## Single diet token policy
//!
//! The external vocabulary has no way to express several diets at once, so
//! **only the first entry of `diets` becomes the `diet` token**. Additional
//! diets are not lost: their implied exclusions still reach
//! `excludeIngredients` through [`build_exclusions`]. Diets are never joined
//! into a single token.

use super::exclusions::build_exclusions;
use super::vocabulary::{diet_token, intolerance_token};
use crate::config::{DietaryConfig, SearchDefaultsConfig};
use pierre_core::models::{AllergenTag, RestrictionProfile, SearchOptions, TranslatedQuery};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Translate a profile and options using the global configuration
#[must_use]
pub fn translate(profile: &RestrictionProfile, options: &SearchOptions) -> TranslatedQuery {
    translate_with(profile, options, &DietaryConfig::global().search)
}

/// Translate a profile and options with explicit pagination defaults
#[must_use]
pub fn translate_with(
    profile: &RestrictionProfile,
    options: &SearchOptions,
    defaults: &SearchDefaultsConfig,
) -> TranslatedQuery {
    let diet = profile.primary_diet().and_then(diet_token).map(str::to_owned);

    let exclusions = build_exclusions(profile);
    let exclude_ingredients = (!exclusions.is_empty()).then(|| exclusions.join(","));

    let calorie_range = options.calorie_range.unwrap_or_default();

    let query = TranslatedQuery {
        diet,
        intolerances: intolerance_string(&profile.allergies),
        exclude_ingredients,
        number: options
            .result_count
            .unwrap_or(defaults.default_result_count),
        offset: options.offset.unwrap_or(defaults.default_offset),
        add_recipe_nutrition: options.include_nutrition,
        add_recipe_instructions: options.include_instructions,
        max_ready_time: options.max_ready_time_minutes,
        min_calories: calorie_range.min,
        max_calories: calorie_range.max,
    };

    debug!(
        diet = ?query.diet,
        excluded = exclusions.len(),
        number = query.number,
        offset = query.offset,
        "Translated restriction profile"
    );

    query
}

/// Comma-joined intolerance tokens, sorted and deduplicated
///
/// Unknown allergens pass through as their own lowercase tag rather than
/// being dropped.
fn intolerance_string(allergies: &[AllergenTag]) -> Option<String> {
    let tokens: BTreeSet<String> = allergies
        .iter()
        .map(|allergen| {
            intolerance_token(allergen).map_or_else(
                || {
                    warn!(
                        allergen = allergen.as_str(),
                        "Unknown allergen passed through as intolerance token"
                    );
                    allergen.as_str().to_lowercase()
                },
                str::to_owned,
            )
        })
        .filter(|token| !token.is_empty())
        .collect();

    (!tokens.is_empty()).then(|| tokens.into_iter().collect::<Vec<_>>().join(","))
}
