// ABOUTME: Output models of the dietary engine: translated query, relaxation steps, validation report
// ABOUTME: Shapes consumed by the recipe-search HTTP client, the cache layer and the UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::dietary::{CalorieRange, DietTag};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Query in the shape expected by the external recipe-search API
///
/// Produced fresh on every translation; only its cache key is memoized.
/// Absent bounds are `None` and never serialized as zero or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedQuery {
    /// External diet token derived from the primary diet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    /// Comma-joined intolerance tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intolerances: Option<String>,
    /// Comma-joined excluded ingredient names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_ingredients: Option<String>,
    /// Number of results
    pub number: u32,
    /// Pagination offset
    pub offset: u32,
    /// Include nutrition data in results
    pub add_recipe_nutrition: bool,
    /// Include cooking instructions in results
    pub add_recipe_instructions: bool,
    /// Maximum ready time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ready_time: Option<u32>,
    /// Minimum calories per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_calories: Option<u32>,
    /// Maximum calories per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<u32>,
}

impl TranslatedQuery {
    /// Render the query as ordered URL parameters, omitting absent fields
    #[must_use]
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(10);

        if let Some(diet) = &self.diet {
            params.push(("diet", diet.clone()));
        }
        if let Some(intolerances) = &self.intolerances {
            params.push(("intolerances", intolerances.clone()));
        }
        if let Some(excluded) = &self.exclude_ingredients {
            params.push(("excludeIngredients", excluded.clone()));
        }
        params.push(("number", self.number.to_string()));
        params.push(("offset", self.offset.to_string()));
        params.push(("addRecipeNutrition", self.add_recipe_nutrition.to_string()));
        params.push((
            "addRecipeInstructions",
            self.add_recipe_instructions.to_string(),
        ));
        if let Some(minutes) = self.max_ready_time {
            params.push(("maxReadyTime", minutes.to_string()));
        }
        if let Some(min) = self.min_calories {
            params.push(("minCalories", min.to_string()));
        }
        if let Some(max) = self.max_calories {
            params.push(("maxCalories", max.to_string()));
        }

        params
    }
}

/// Identifier of a relaxation step, in ladder order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelaxationStepId {
    /// Allow more cooking time
    #[serde(rename = "relax_time")]
    Time,
    /// Drop commonly over-excluded ingredients
    #[serde(rename = "relax_common_exclusions")]
    CommonExclusions,
    /// Widen the calorie ceiling
    #[serde(rename = "relax_calories")]
    Calories,
    /// Drop diet constraints (allergies are kept)
    #[serde(rename = "relax_diet")]
    Diet,
}

impl RelaxationStepId {
    /// Stable identifier passed back by callers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "relax_time",
            Self::CommonExclusions => "relax_common_exclusions",
            Self::Calories => "relax_calories",
            Self::Diet => "relax_diet",
        }
    }
}

impl fmt::Display for RelaxationStepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelaxationStepId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relax_time" => Ok(Self::Time),
            "relax_common_exclusions" => Ok(Self::CommonExclusions),
            "relax_calories" => Ok(Self::Calories),
            "relax_diet" => Ok(Self::Diet),
            other => Err(AppError::invalid_input(format!(
                "Unknown relaxation step: {other}"
            ))),
        }
    }
}

/// Partial restriction profile carried by a relaxation step
///
/// There is deliberately no allergy field: allergies cannot be relaxed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionProfileDelta {
    /// Replacement diet list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diets: Option<Vec<DietTag>>,
    /// Replacement exclusion list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
}

/// Partial search options carried by a relaxation step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptionsDelta {
    /// Replacement ready-time bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ready_time_minutes: Option<u32>,
    /// Replacement calorie range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_range: Option<CalorieRange>,
}

/// One candidate loosening of a profile/options pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelaxationStep {
    /// Step identifier
    pub step_id: RelaxationStepId,
    /// User-facing description
    pub description: String,
    /// User-facing summary of the concrete change
    pub action_summary: String,
    /// Profile fields replaced by this step
    pub profile_delta: RestrictionProfileDelta,
    /// Option fields replaced by this step
    pub options_delta: SearchOptionsDelta,
}

/// Advisory findings about a restriction profile
///
/// Errors mean the profile should not be submitted as-is; warnings are
/// informational. Both are ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Blocking problems
    pub errors: Vec<String>,
    /// Advisory problems
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when there are no errors
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when at least one warning was raised
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
