// ABOUTME: Cache key generator for memoizing equivalent recipe searches
// ABOUTME: Order- and duplicate-insensitive, delimiter-joined fingerprint of profile and options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{DietaryConfig, SearchDefaultsConfig};
use pierre_core::constants::cache::{
    CACHE_KEY_DELIMITER, CACHE_KEY_LIST_SEPARATOR, CACHE_KEY_NAMESPACE, CACHE_KEY_STRICT_FODMAP,
};
use pierre_core::models::{AllergenTag, CalorieRange, DietTag, RestrictionProfile, SearchOptions};
use std::collections::BTreeSet;
use tracing::debug;

/// Cache key for a profile and options using the global configuration
#[must_use]
pub fn cache_key(profile: &RestrictionProfile, options: &SearchOptions) -> String {
    cache_key_with(profile, options, &DietaryConfig::global().search)
}

/// Cache key for a profile and options with explicit pagination defaults
///
/// Segments appear in a fixed order and carry a label so that values from
/// different fields never collide. Values are percent-encoded, so a `|`, `,`
/// or `=` inside a free-form entry cannot forge another segment. Each
/// collection is sorted and deduplicated independently. Empty and
/// default-valued segments are dropped, so an absent option and an option set
/// to its default produce the same key. A diet list made only of `none`
/// restricts nothing and is dropped as well.
///
/// ```
/// use pierre_dietary_engine::models::{DietTag, RestrictionProfile, SearchOptions};
/// use pierre_dietary_engine::config::SearchDefaultsConfig;
/// use pierre_dietary_engine::dietary::cache_key_with;
///
/// let defaults = SearchDefaultsConfig::default();
/// let a = RestrictionProfile::new()
///     .with_diet(DietTag::Vegan)
///     .with_exclusion("onion")
///     .with_exclusion("garlic");
/// let b = RestrictionProfile::new()
///     .with_diet(DietTag::Vegan)
///     .with_exclusion("garlic")
///     .with_exclusion("onion")
///     .with_exclusion("garlic");
///
/// assert_eq!(
///     cache_key_with(&a, &SearchOptions::new(), &defaults),
///     cache_key_with(&b, &SearchOptions::new().with_result_count(30), &defaults),
/// );
/// ```
#[must_use]
pub fn cache_key_with(
    profile: &RestrictionProfile,
    options: &SearchOptions,
    defaults: &SearchDefaultsConfig,
) -> String {
    let mut segments: Vec<String> = vec![CACHE_KEY_NAMESPACE.to_owned()];

    if profile.diets.iter().any(DietTag::is_restrictive) {
        push_set(
            &mut segments,
            "diets",
            profile.diets.iter().map(DietTag::as_str),
        );
    }
    push_set(
        &mut segments,
        "allergies",
        profile.allergies.iter().map(AllergenTag::as_str),
    );
    push_set(
        &mut segments,
        "exclusions",
        profile.exclusions.iter().map(String::as_str),
    );
    push_set(
        &mut segments,
        "preferences",
        profile.preferences.iter().map(String::as_str),
    );

    if profile.strict_fodmap {
        segments.push(CACHE_KEY_STRICT_FODMAP.to_owned());
    }

    let count = options
        .result_count
        .unwrap_or(defaults.default_result_count);
    if count != defaults.default_result_count {
        segments.push(format!("count={count}"));
    }

    let offset = options.offset.unwrap_or(defaults.default_offset);
    if offset != defaults.default_offset {
        segments.push(format!("offset={offset}"));
    }

    if let Some(minutes) = options.max_ready_time_minutes {
        segments.push(format!("ready={minutes}"));
    }

    if let Some(range) = options.calorie_range.filter(|range| !range.is_unbounded()) {
        segments.push(format!("calories={}", canonical_calorie_json(&range)));
    }

    let key = segments.join(CACHE_KEY_DELIMITER);
    debug!(segments = segments.len(), key_len = key.len(), "Generated cache key");
    key
}

/// Append `label=a,b,c` built from trimmed, encoded, sorted, deduplicated values
fn push_set<'a>(segments: &mut Vec<String>, label: &str, values: impl Iterator<Item = &'a str>) {
    let set: BTreeSet<String> = values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| urlencoding::encode(v).into_owned())
        .collect();
    if set.is_empty() {
        return;
    }
    let joined = set.into_iter().collect::<Vec<_>>().join(CACHE_KEY_LIST_SEPARATOR);
    segments.push(format!("{label}={joined}"));
}

/// Canonical JSON for a calorie range: fixed key order, absent bounds omitted
fn canonical_calorie_json(range: &CalorieRange) -> String {
    serde_json::to_string(range).unwrap_or_default()
}
