// ABOUTME: Restriction profile and search option models for dietary-aware recipe search
// ABOUTME: DietTag, AllergenTag, RestrictionProfile, SearchOptions and CalorieRange definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named dietary pattern declared by the user
///
/// Each diet implies a list of excluded ingredients and may map to a token in
/// the external recipe-search vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DietTag {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No meat, fish allowed
    Pescatarian,
    /// Very low carbohydrate
    Ketogenic,
    /// No grains, legumes, dairy or refined sugar
    Paleo,
    /// Paleo with some dairy allowed
    Primal,
    /// Low fermentable carbohydrates
    LowFodmap,
    /// 30-day whole food elimination
    Whole30,
    /// Explicitly no diet
    None,
}

impl DietTag {
    /// Every diet tag in declaration order
    pub const ALL: [Self; 9] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::Pescatarian,
        Self::Ketogenic,
        Self::Paleo,
        Self::Primal,
        Self::LowFodmap,
        Self::Whole30,
        Self::None,
    ];

    /// Canonical spelling used in profiles and cache keys
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Pescatarian => "pescatarian",
            Self::Ketogenic => "ketogenic",
            Self::Paleo => "paleo",
            Self::Primal => "primal",
            Self::LowFodmap => "low-fodmap",
            Self::Whole30 => "whole30",
            Self::None => "none",
        }
    }

    /// Whether this tag actually restricts anything
    #[must_use]
    pub const fn is_restrictive(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for DietTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Ok(Self::Vegan),
            "vegetarian" => Ok(Self::Vegetarian),
            "pescatarian" => Ok(Self::Pescatarian),
            "ketogenic" => Ok(Self::Ketogenic),
            "paleo" => Ok(Self::Paleo),
            "primal" => Ok(Self::Primal),
            "low-fodmap" | "low_fodmap" => Ok(Self::LowFodmap),
            "whole30" => Ok(Self::Whole30),
            "none" => Ok(Self::None),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet tag: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for DietTag {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DietTag> for String {
    fn from(tag: DietTag) -> Self {
        tag.as_str().to_owned()
    }
}

/// Allergy category declared by the user
///
/// Unknown categories are kept as `Other` with their lowercase spelling so
/// that newer clients never lose an allergy on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AllergenTag {
    /// Milk and milk products
    Dairy,
    /// Eggs
    Eggs,
    /// Finned fish
    Fish,
    /// Crustaceans and molluscs
    Shellfish,
    /// Tree nuts
    TreeNuts,
    /// Peanuts
    Peanuts,
    /// Wheat
    Wheat,
    /// Soy
    Soy,
    /// Sesame
    Sesame,
    /// Gluten-containing grains
    Gluten,
    /// All grains
    Grain,
    /// Fish and shellfish
    Seafood,
    /// Category not known to this version
    Other(String),
}

impl AllergenTag {
    /// Every known allergen tag in declaration order
    pub const KNOWN: [Self; 12] = [
        Self::Dairy,
        Self::Eggs,
        Self::Fish,
        Self::Shellfish,
        Self::TreeNuts,
        Self::Peanuts,
        Self::Wheat,
        Self::Soy,
        Self::Sesame,
        Self::Gluten,
        Self::Grain,
        Self::Seafood,
    ];

    /// Canonical lowercase spelling
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dairy => "dairy",
            Self::Eggs => "eggs",
            Self::Fish => "fish",
            Self::Shellfish => "shellfish",
            Self::TreeNuts => "tree_nuts",
            Self::Peanuts => "peanuts",
            Self::Wheat => "wheat",
            Self::Soy => "soy",
            Self::Sesame => "sesame",
            Self::Gluten => "gluten",
            Self::Grain => "grain",
            Self::Seafood => "seafood",
            Self::Other(tag) => tag,
        }
    }

    /// Parse an allergen tag; never fails
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "dairy" => Self::Dairy,
            "eggs" | "egg" => Self::Eggs,
            "fish" => Self::Fish,
            "shellfish" => Self::Shellfish,
            "tree_nuts" | "tree-nuts" | "tree nuts" => Self::TreeNuts,
            "peanuts" | "peanut" => Self::Peanuts,
            "wheat" => Self::Wheat,
            "soy" => Self::Soy,
            "sesame" => Self::Sesame,
            "gluten" => Self::Gluten,
            "grain" => Self::Grain,
            "seafood" => Self::Seafood,
            _ => Self::Other(lowered),
        }
    }
}

impl fmt::Display for AllergenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AllergenTag {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for AllergenTag {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<AllergenTag> for String {
    fn from(tag: AllergenTag) -> Self {
        match tag {
            AllergenTag::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

/// A user's declared dietary restrictions
///
/// Every collection is semantically a set: duplicates and ordering never
/// change the exclusion set or the cache key. The one ordering that matters is
/// the first entry of `diets`, which alone maps to the external diet token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestrictionProfile {
    /// Declared diets, first entry is the primary diet
    pub diets: Vec<DietTag>,
    /// Declared allergies
    pub allergies: Vec<AllergenTag>,
    /// Free-form ingredient names the user never wants to see
    pub exclusions: Vec<String>,
    /// Free-form preference tags
    pub preferences: Vec<String>,
    /// Use the stricter low-FODMAP exclusion table
    pub strict_fodmap: bool,
}

impl RestrictionProfile {
    /// Create an empty profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diet
    #[must_use]
    pub fn with_diet(mut self, diet: DietTag) -> Self {
        self.diets.push(diet);
        self
    }

    /// Add an allergy
    #[must_use]
    pub fn with_allergy(mut self, allergy: impl Into<AllergenTag>) -> Self {
        self.allergies.push(allergy.into());
        self
    }

    /// Add a custom exclusion
    #[must_use]
    pub fn with_exclusion(mut self, ingredient: impl Into<String>) -> Self {
        self.exclusions.push(ingredient.into());
        self
    }

    /// Add a preference tag
    #[must_use]
    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preferences.push(preference.into());
        self
    }

    /// Enable or disable strict low-FODMAP mode
    #[must_use]
    pub const fn with_strict_fodmap(mut self, strict: bool) -> Self {
        self.strict_fodmap = strict;
        self
    }

    /// First declared diet, which drives the external diet token
    #[must_use]
    pub fn primary_diet(&self) -> Option<DietTag> {
        self.diets.first().copied()
    }

    /// Whether the profile contains the given diet anywhere
    #[must_use]
    pub fn has_diet(&self, diet: DietTag) -> bool {
        self.diets.contains(&diet)
    }
}

/// Inclusive calorie bounds per serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieRange {
    /// Lower bound (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    /// Upper bound (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl CalorieRange {
    /// Range with only an upper bound
    #[must_use]
    pub const fn at_most(max: u32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Range with both bounds
    #[must_use]
    pub const fn between(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether neither bound is set
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Options controlling a single recipe search
///
/// Every field is optional; absent values fall back to configured defaults
/// (pagination) or are not sent at all (time and calorie bounds).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Number of results to request
    pub result_count: Option<u32>,
    /// Pagination offset
    pub offset: Option<u32>,
    /// Maximum total preparation and cooking time
    pub max_ready_time_minutes: Option<u32>,
    /// Calorie bounds per serving
    pub calorie_range: Option<CalorieRange>,
    /// Ask the API to include nutrition data
    pub include_nutrition: bool,
    /// Ask the API to include cooking instructions
    pub include_instructions: bool,
}

impl SearchOptions {
    /// Create default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of results
    #[must_use]
    pub const fn with_result_count(mut self, count: u32) -> Self {
        self.result_count = Some(count);
        self
    }

    /// Set the pagination offset
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the maximum ready time
    #[must_use]
    pub const fn with_max_ready_time(mut self, minutes: u32) -> Self {
        self.max_ready_time_minutes = Some(minutes);
        self
    }

    /// Set the calorie range
    #[must_use]
    pub const fn with_calorie_range(mut self, range: CalorieRange) -> Self {
        self.calorie_range = Some(range);
        self
    }

    /// Request nutrition data
    #[must_use]
    pub const fn with_nutrition(mut self, include: bool) -> Self {
        self.include_nutrition = include;
        self
    }

    /// Request cooking instructions
    #[must_use]
    pub const fn with_instructions(mut self, include: bool) -> Self {
        self.include_instructions = include;
        self
    }
}
