// ABOUTME: Conflict validator reporting contradictory or over-restrictive profiles
// ABOUTME: Produces display-ready errors and warnings; never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalizer::normalize;
use super::vocabulary::{ANIMAL_PRODUCT_TERMS, DIET_CONFLICTS};
use crate::config::{DietaryConfig, ValidationConfig};
use pierre_core::models::{AllergenTag, DietTag, RestrictionProfile, ValidationReport};
use std::collections::BTreeSet;
use tracing::debug;

/// Validate a profile using the global configuration
#[must_use]
pub fn validate(profile: &RestrictionProfile) -> ValidationReport {
    validate_with(profile, &DietaryConfig::global().validation)
}

/// Validate a profile with explicit thresholds
///
/// Every check runs; none short-circuits another.
#[must_use]
pub fn validate_with(profile: &RestrictionProfile, config: &ValidationConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_vegan_exclusions(profile, &mut report);
    check_allergy_count(profile, config, &mut report);
    check_exclusion_count(profile, config, &mut report);
    check_diet_conflicts(profile, &mut report);
    check_none_with_diets(profile, &mut report);

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validated restriction profile"
    );

    report
}

// Warns when a vegan profile's exclusion list names animal products.
// TODO(product): confirm whether these entries should pass silently instead.
fn check_vegan_exclusions(profile: &RestrictionProfile, report: &mut ValidationReport) {
    if !profile.has_diet(DietTag::Vegan) {
        return;
    }

    let flagged: BTreeSet<String> = profile
        .exclusions
        .iter()
        .map(|item| normalize(item))
        .filter(|item| ANIMAL_PRODUCT_TERMS.contains(&item.as_str()))
        .collect();

    if !flagged.is_empty() {
        report.warnings.push(format!(
            "Vegan diet is combined with excluded animal products ({}); please review your exclusions",
            flagged.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
}

fn check_allergy_count(
    profile: &RestrictionProfile,
    config: &ValidationConfig,
    report: &mut ValidationReport,
) {
    let distinct: BTreeSet<&str> = profile.allergies.iter().map(AllergenTag::as_str).collect();
    if distinct.len() > config.max_distinct_allergies {
        report.warnings.push(format!(
            "{} allergies selected; very few recipes may match (over-restriction risk)",
            distinct.len()
        ));
    }
}

fn check_exclusion_count(
    profile: &RestrictionProfile,
    config: &ValidationConfig,
    report: &mut ValidationReport,
) {
    let distinct: BTreeSet<String> = profile
        .exclusions
        .iter()
        .map(|item| normalize(item))
        .filter(|item| !item.is_empty())
        .collect();
    if distinct.len() > config.max_distinct_exclusions {
        report.warnings.push(format!(
            "{} excluded ingredients selected; very few recipes may match (over-restriction risk)",
            distinct.len()
        ));
    }
}

fn check_diet_conflicts(profile: &RestrictionProfile, report: &mut ValidationReport) {
    for (first, second, reason) in DIET_CONFLICTS {
        if profile.has_diet(*first) && profile.has_diet(*second) {
            report.errors.push(format!(
                "Diets '{first}' and '{second}' conflict: {reason}"
            ));
        }
    }
}

fn check_none_with_diets(profile: &RestrictionProfile, report: &mut ValidationReport) {
    if profile.has_diet(DietTag::None) && profile.diets.iter().any(DietTag::is_restrictive) {
        report.warnings.push(
            "Diet 'none' is combined with other diets; only the other diets will restrict recipes"
                .to_owned(),
        );
    }
}
