// ABOUTME: Relaxation planner offering ordered loosening steps after a zero-result search
// ABOUTME: Ladder is time, common exclusions, calories, diet; allergies are never relaxed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Relaxation Ladder
//!
//! When a search returns nothing, the caller asks for the applicable steps
//! and picks one explicitly; the planner never iterates on its own. Steps are
//! always offered in this order:
//!
//! 1. `relax_time`: raise `maxReadyTime` by 15 minutes while it is below 60
//! 2. `relax_common_exclusions`: drop onion, garlic, mushrooms and tomato
//! 3. `relax_calories`: raise the calorie ceiling by 20%
//! 4. `relax_diet`: replace all diets with `none`
//!
//! Allergies have no step and no delta field; applying any step returns the
//! allergy list untouched.

use super::normalizer::normalize;
use super::vocabulary::COMMON_OVER_EXCLUSIONS;
use crate::config::{DietaryConfig, RelaxationConfig};
use pierre_core::models::{
    CalorieRange, DietTag, RelaxationStep, RelaxationStepId, RestrictionProfile,
    RestrictionProfileDelta, SearchOptions, SearchOptionsDelta,
};
use std::collections::HashSet;
use tracing::debug;

/// Plan relaxation steps using the global configuration
#[must_use]
pub fn plan_relaxations(profile: &RestrictionProfile, options: &SearchOptions) -> Vec<RelaxationStep> {
    plan_relaxations_with(profile, options, &DietaryConfig::global().relaxation)
}

/// Plan the applicable relaxation steps, in ladder order
#[must_use]
pub fn plan_relaxations_with(
    profile: &RestrictionProfile,
    options: &SearchOptions,
    config: &RelaxationConfig,
) -> Vec<RelaxationStep> {
    let steps: Vec<RelaxationStep> = [
        time_step(options, config),
        common_exclusions_step(profile),
        calories_step(options, config),
        diet_step(profile),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(
        steps = ?steps.iter().map(|step| step.step_id.as_str()).collect::<Vec<_>>(),
        "Planned relaxation steps"
    );

    steps
}

/// Apply a relaxation step using the global configuration
#[must_use]
pub fn apply_relaxation(
    profile: &RestrictionProfile,
    options: &SearchOptions,
    step_id: &str,
) -> (RestrictionProfile, SearchOptions) {
    apply_relaxation_with(profile, options, step_id, &DietaryConfig::global().relaxation)
}

/// Apply the step named `step_id` to fresh copies of the inputs
///
/// The plan is recomputed from the inputs, so a step that is not applicable
/// to them (or an unknown id) leaves both copies unchanged.
#[must_use]
pub fn apply_relaxation_with(
    profile: &RestrictionProfile,
    options: &SearchOptions,
    step_id: &str,
    config: &RelaxationConfig,
) -> (RestrictionProfile, SearchOptions) {
    let mut new_profile = profile.clone();
    let mut new_options = options.clone();

    let Ok(id) = step_id.parse::<RelaxationStepId>() else {
        debug!(step_id, "Ignoring unknown relaxation step");
        return (new_profile, new_options);
    };

    let Some(step) = plan_relaxations_with(profile, options, config)
        .into_iter()
        .find(|step| step.step_id == id)
    else {
        debug!(step_id, "Relaxation step not applicable, inputs unchanged");
        return (new_profile, new_options);
    };

    let RelaxationStep {
        profile_delta,
        options_delta,
        ..
    } = step;

    if let Some(diets) = profile_delta.diets {
        new_profile.diets = diets;
    }
    if let Some(exclusions) = profile_delta.exclusions {
        new_profile.exclusions = exclusions;
    }
    if let Some(minutes) = options_delta.max_ready_time_minutes {
        new_options.max_ready_time_minutes = Some(minutes);
    }
    if let Some(range) = options_delta.calorie_range {
        new_options.calorie_range = Some(range);
    }

    debug!(step_id, "Applied relaxation step");
    (new_profile, new_options)
}

fn time_step(options: &SearchOptions, config: &RelaxationConfig) -> Option<RelaxationStep> {
    let current = options
        .max_ready_time_minutes
        .filter(|&minutes| minutes < config.time_ceiling_minutes)?;
    let relaxed = current.saturating_add(config.time_increment_minutes);

    Some(RelaxationStep {
        step_id: RelaxationStepId::Time,
        description: "Allow more cooking time".to_owned(),
        action_summary: format!("Increase maximum ready time from {current} to {relaxed} minutes"),
        profile_delta: RestrictionProfileDelta::default(),
        options_delta: SearchOptionsDelta {
            max_ready_time_minutes: Some(relaxed),
            ..SearchOptionsDelta::default()
        },
    })
}

fn common_exclusions_step(profile: &RestrictionProfile) -> Option<RelaxationStep> {
    if profile.exclusions.is_empty() {
        return None;
    }

    let common: HashSet<String> = COMMON_OVER_EXCLUSIONS
        .iter()
        .map(|item| normalize(item))
        .collect();
    let (removed, kept): (Vec<String>, Vec<String>) = profile
        .exclusions
        .iter()
        .cloned()
        .partition(|item| common.contains(&normalize(item)));

    let action_summary = if removed.is_empty() {
        format!(
            "Stop excluding commonly over-excluded ingredients ({})",
            COMMON_OVER_EXCLUSIONS.join(", ")
        )
    } else {
        format!("Stop excluding {}", removed.join(", "))
    };

    Some(RelaxationStep {
        step_id: RelaxationStepId::CommonExclusions,
        description: "Allow commonly excluded ingredients".to_owned(),
        action_summary,
        profile_delta: RestrictionProfileDelta {
            exclusions: Some(kept),
            ..RestrictionProfileDelta::default()
        },
        options_delta: SearchOptionsDelta::default(),
    })
}

fn calories_step(options: &SearchOptions, config: &RelaxationConfig) -> Option<RelaxationStep> {
    let range = options.calorie_range?;
    let current = range.max?;
    let widened = widen(current, config.calorie_widen_percent);

    Some(RelaxationStep {
        step_id: RelaxationStepId::Calories,
        description: "Allow higher-calorie recipes".to_owned(),
        action_summary: format!("Raise the calorie limit from {current} to {widened} kcal"),
        profile_delta: RestrictionProfileDelta::default(),
        options_delta: SearchOptionsDelta {
            calorie_range: Some(CalorieRange {
                min: range.min,
                max: Some(widened),
            }),
            ..SearchOptionsDelta::default()
        },
    })
}

fn diet_step(profile: &RestrictionProfile) -> Option<RelaxationStep> {
    if !profile.diets.iter().any(DietTag::is_restrictive) {
        return None;
    }

    let dropped = profile
        .diets
        .iter()
        .filter(|diet| diet.is_restrictive())
        .map(DietTag::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Some(RelaxationStep {
        step_id: RelaxationStepId::Diet,
        description: "Search without diet restrictions (allergies still apply)".to_owned(),
        action_summary: format!("Remove diet filters ({dropped})"),
        profile_delta: RestrictionProfileDelta {
            diets: Some(vec![DietTag::None]),
            ..RestrictionProfileDelta::default()
        },
        options_delta: SearchOptionsDelta::default(),
    })
}

/// `value` plus `percent`% of it, rounded down
fn widen(value: u32, percent: u32) -> u32 {
    let widened = u64::from(value) * (100 + u64::from(percent)) / 100;
    u32::try_from(widened).unwrap_or(u32::MAX)
}
