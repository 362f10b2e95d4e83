// ABOUTME: Property-based tests for the dietary engine
// ABOUTME: Checks order and duplicate insensitivity, idempotence, monotonicity and allergy preservation
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_dietary_engine::config::{RelaxationConfig, SearchDefaultsConfig};
use pierre_dietary_engine::dietary::{
    apply_relaxation_with, build_exclusions, cache_key_with, normalize, plan_relaxations_with,
};
use pierre_dietary_engine::models::{
    AllergenTag, CalorieRange, DietTag, RestrictionProfile, SearchOptions,
};
use proptest::prelude::*;

const INGREDIENTS: &[&str] = &[
    "onion", "Onions", "garlic", "tomatoes", "beef", "steak", "milk", "Eggs", "tofu", "cilantro",
    "peanut butter", "  Mushrooms ", "rice", "bacon",
];

fn diet_strategy() -> impl Strategy<Value = DietTag> {
    prop::sample::select(DietTag::ALL.to_vec())
}

fn allergen_strategy() -> impl Strategy<Value = AllergenTag> {
    prop_oneof![
        prop::sample::select(AllergenTag::KNOWN.to_vec()),
        "[a-z]{3,8}".prop_map(|tag| AllergenTag::parse(&tag)),
    ]
}

fn profile_strategy() -> impl Strategy<Value = RestrictionProfile> {
    (
        prop::collection::vec(diet_strategy(), 0..4),
        prop::collection::vec(allergen_strategy(), 0..5),
        prop::collection::vec(prop::sample::select(INGREDIENTS.to_vec()), 0..6),
        prop::collection::vec("[a-z]{2,6}", 0..3),
        any::<bool>(),
    )
        .prop_map(
            |(diets, allergies, exclusions, preferences, strict_fodmap)| RestrictionProfile {
                diets,
                allergies,
                exclusions: exclusions.into_iter().map(str::to_owned).collect(),
                preferences,
                strict_fodmap,
            },
        )
}

fn options_strategy() -> impl Strategy<Value = SearchOptions> {
    (
        prop::option::of(1u32..100),
        prop::option::of(0u32..50),
        prop::option::of(5u32..120),
        prop::option::of((prop::option::of(0u32..400), prop::option::of(100u32..2000))),
    )
        .prop_map(|(count, offset, ready, calories)| SearchOptions {
            result_count: count,
            offset,
            max_ready_time_minutes: ready,
            calorie_range: calories.map(|(min, max)| CalorieRange { min, max }),
            ..SearchOptions::default()
        })
}

/// Reverse every collection and append a copy of it
fn scrambled(profile: &RestrictionProfile) -> RestrictionProfile {
    fn twice<T: Clone>(items: &[T]) -> Vec<T> {
        items.iter().rev().chain(items.iter()).cloned().collect()
    }

    RestrictionProfile {
        diets: twice(&profile.diets),
        allergies: twice(&profile.allergies),
        exclusions: twice(&profile.exclusions),
        preferences: twice(&profile.preferences),
        strict_fodmap: profile.strict_fodmap,
    }
}

proptest! {
    #[test]
    fn cache_key_ignores_order_and_duplicates(
        profile in profile_strategy(),
        options in options_strategy(),
    ) {
        let defaults = SearchDefaultsConfig::default();
        prop_assert_eq!(
            cache_key_with(&profile, &options, &defaults),
            cache_key_with(&scrambled(&profile), &options, &defaults)
        );
    }

    #[test]
    fn exclusions_ignore_order_and_duplicates(profile in profile_strategy()) {
        prop_assert_eq!(build_exclusions(&profile), build_exclusions(&scrambled(&profile)));
    }

    #[test]
    fn exclusions_are_sorted_and_unique(profile in profile_strategy()) {
        let exclusions = build_exclusions(&profile);
        prop_assert!(exclusions.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(exclusions.iter().all(|item| !item.is_empty()));
    }

    #[test]
    fn normalize_is_idempotent(name in "[ A-Za-z]{0,24}") {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn adding_a_diet_never_shrinks_exclusions(
        profile in profile_strategy(),
        diet in diet_strategy(),
    ) {
        let before = build_exclusions(&profile);
        let after = build_exclusions(&profile.clone().with_diet(diet));
        prop_assert!(before.iter().all(|item| after.contains(item)));
    }

    #[test]
    fn relaxation_never_touches_allergies(
        profile in profile_strategy(),
        options in options_strategy(),
    ) {
        let config = RelaxationConfig::default();
        let steps = plan_relaxations_with(&profile, &options, &config);
        prop_assert!(steps.len() <= 4);
        prop_assert!(steps.windows(2).all(|pair| pair[0].step_id < pair[1].step_id));

        for step in steps {
            let (relaxed, _) =
                apply_relaxation_with(&profile, &options, step.step_id.as_str(), &config);
            prop_assert_eq!(&relaxed.allergies, &profile.allergies);
        }
    }
}
