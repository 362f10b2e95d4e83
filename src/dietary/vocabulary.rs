// ABOUTME: Static vocabulary tables mapping diets and allergens to API tokens and implied exclusions
// ABOUTME: Also holds ingredient synonyms, conflicting diet pairs and relaxation ingredient lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Vocabulary tables for the dietary engine.
//!
//! Token spellings follow the external recipe-search API (which spells the
//! fish-eating diet `pescetarian` and the tree-nut intolerance `tree nut`).
//! Every ingredient listed here is already in normalized form, so table
//! output can be fed straight into the exclusion set.

use pierre_core::models::{AllergenTag, DietTag};
use std::collections::HashMap;
use std::sync::LazyLock;

/// External diet token for a diet, if the API has one
///
/// `low-fodmap` has no external equivalent and is expressed purely through
/// exclusions; `none` never produces a token.
#[must_use]
pub const fn diet_token(diet: DietTag) -> Option<&'static str> {
    match diet {
        DietTag::Vegan => Some("vegan"),
        DietTag::Vegetarian => Some("vegetarian"),
        DietTag::Pescatarian => Some("pescetarian"),
        DietTag::Ketogenic => Some("ketogenic"),
        DietTag::Paleo => Some("paleo"),
        DietTag::Primal => Some("primal"),
        DietTag::Whole30 => Some("whole30"),
        DietTag::LowFodmap | DietTag::None => None,
    }
}

/// External intolerance token for a known allergen
///
/// Returns `None` for `AllergenTag::Other`; callers pass those through verbatim.
#[must_use]
pub const fn intolerance_token(allergen: &AllergenTag) -> Option<&'static str> {
    match allergen {
        AllergenTag::Dairy => Some("dairy"),
        AllergenTag::Eggs => Some("egg"),
        AllergenTag::Fish | AllergenTag::Seafood => Some("seafood"),
        AllergenTag::Shellfish => Some("shellfish"),
        AllergenTag::TreeNuts => Some("tree nut"),
        AllergenTag::Peanuts => Some("peanut"),
        AllergenTag::Wheat => Some("wheat"),
        AllergenTag::Soy => Some("soy"),
        AllergenTag::Sesame => Some("sesame"),
        AllergenTag::Gluten => Some("gluten"),
        AllergenTag::Grain => Some("grain"),
        AllergenTag::Other(_) => None,
    }
}

// === Diet implied exclusions ===

const VEGAN_EXCLUSIONS: &[&str] = &[
    "beef", "butter", "cheese", "chicken", "cream", "egg", "fish", "gelatin", "honey", "lamb",
    "meat", "milk", "pork", "shellfish", "turkey", "yogurt",
];

const VEGETARIAN_EXCLUSIONS: &[&str] = &[
    "anchovy",
    "beef",
    "chicken",
    "fish",
    "gelatin",
    "lamb",
    "meat",
    "pork",
    "shellfish",
    "turkey",
];

const PESCATARIAN_EXCLUSIONS: &[&str] = &["beef", "chicken", "lamb", "meat", "pork", "turkey"];

const KETOGENIC_EXCLUSIONS: &[&str] = &["bread", "flour", "pasta", "potato", "rice", "sugar"];

const PALEO_EXCLUSIONS: &[&str] = &[
    "bean", "bread", "cheese", "flour", "grain", "lentil", "milk", "pasta", "peanut", "rice",
    "soy", "sugar",
];

const PRIMAL_EXCLUSIONS: &[&str] = &[
    "bean", "bread", "flour", "grain", "lentil", "pasta", "peanut", "rice", "soy", "sugar",
];

const LOW_FODMAP_EXCLUSIONS: &[&str] = &["garlic", "honey", "onion", "wheat"];

// Superset of LOW_FODMAP_EXCLUSIONS
const LOW_FODMAP_STRICT_EXCLUSIONS: &[&str] = &[
    "apple",
    "bean",
    "cauliflower",
    "chickpea",
    "garlic",
    "honey",
    "lentil",
    "milk",
    "mushroom",
    "onion",
    "pear",
    "wheat",
];

const WHOLE30_EXCLUSIONS: &[&str] = &[
    "alcohol", "bean", "bread", "cheese", "flour", "grain", "lentil", "milk", "pasta", "peanut",
    "rice", "soy", "sugar", "yogurt",
];

/// Ingredients implied by a diet
///
/// With `strict_fodmap` set, `low-fodmap` uses its stricter table entry.
#[must_use]
pub const fn diet_exclusions(diet: DietTag, strict_fodmap: bool) -> &'static [&'static str] {
    match diet {
        DietTag::Vegan => VEGAN_EXCLUSIONS,
        DietTag::Vegetarian => VEGETARIAN_EXCLUSIONS,
        DietTag::Pescatarian => PESCATARIAN_EXCLUSIONS,
        DietTag::Ketogenic => KETOGENIC_EXCLUSIONS,
        DietTag::Paleo => PALEO_EXCLUSIONS,
        DietTag::Primal => PRIMAL_EXCLUSIONS,
        DietTag::LowFodmap if strict_fodmap => LOW_FODMAP_STRICT_EXCLUSIONS,
        DietTag::LowFodmap => LOW_FODMAP_EXCLUSIONS,
        DietTag::Whole30 => WHOLE30_EXCLUSIONS,
        DietTag::None => &[],
    }
}

// === Allergen implied exclusions ===

const DAIRY_EXCLUSIONS: &[&str] = &["butter", "casein", "cheese", "cream", "milk", "whey", "yogurt"];
const EGG_EXCLUSIONS: &[&str] = &["egg", "mayonnaise"];
const FISH_EXCLUSIONS: &[&str] = &["anchovy", "cod", "fish", "salmon", "tuna"];
const SHELLFISH_EXCLUSIONS: &[&str] = &[
    "clam", "crab", "lobster", "mussel", "oyster", "scallop", "shellfish", "shrimp",
];
const TREE_NUT_EXCLUSIONS: &[&str] = &[
    "almond",
    "cashew",
    "hazelnut",
    "pecan",
    "pistachio",
    "walnut",
];
const PEANUT_EXCLUSIONS: &[&str] = &["peanut", "peanut butter"];
const WHEAT_EXCLUSIONS: &[&str] = &["bread", "flour", "pasta", "wheat"];
const SOY_EXCLUSIONS: &[&str] = &["edamame", "soy", "soy sauce", "tempeh", "tofu"];
const SESAME_EXCLUSIONS: &[&str] = &["sesame", "tahini"];
const GLUTEN_EXCLUSIONS: &[&str] = &["barley", "bread", "flour", "pasta", "rye", "wheat"];
const GRAIN_EXCLUSIONS: &[&str] = &["barley", "corn", "grain", "oat", "rice", "wheat"];
const SEAFOOD_EXCLUSIONS: &[&str] = &[
    "crab", "fish", "lobster", "seafood", "shellfish", "shrimp",
];

/// Ingredients implied by a known allergen
///
/// `AllergenTag::Other` has no table entry; the exclusion builder adds the
/// tag itself instead.
#[must_use]
pub const fn allergen_exclusions(allergen: &AllergenTag) -> &'static [&'static str] {
    match allergen {
        AllergenTag::Dairy => DAIRY_EXCLUSIONS,
        AllergenTag::Eggs => EGG_EXCLUSIONS,
        AllergenTag::Fish => FISH_EXCLUSIONS,
        AllergenTag::Shellfish => SHELLFISH_EXCLUSIONS,
        AllergenTag::TreeNuts => TREE_NUT_EXCLUSIONS,
        AllergenTag::Peanuts => PEANUT_EXCLUSIONS,
        AllergenTag::Wheat => WHEAT_EXCLUSIONS,
        AllergenTag::Soy => SOY_EXCLUSIONS,
        AllergenTag::Sesame => SESAME_EXCLUSIONS,
        AllergenTag::Gluten => GLUTEN_EXCLUSIONS,
        AllergenTag::Grain => GRAIN_EXCLUSIONS,
        AllergenTag::Seafood => SEAFOOD_EXCLUSIONS,
        AllergenTag::Other(_) => &[],
    }
}

/// Equivalent spellings and aliases per ingredient
///
/// Expansion is one level only: an alias that has its own entry (e.g.
/// `steak`) is not expanded again when reached through another entry.
static INGREDIENT_SYNONYMS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();

        // === Dairy & eggs ===
        m.insert("milk", &["skim milk", "whole milk"]);
        m.insert("cheese", &["cheddar", "mozzarella", "parmesan"]);
        m.insert("butter", &["ghee"]);
        m.insert("cream", &["heavy cream", "sour cream"]);
        m.insert("yogurt", &["yoghurt"]);
        m.insert("egg", &["egg white", "egg yolk"]);

        // === Meat & fish ===
        m.insert("beef", &["ground beef", "steak"]);
        m.insert("steak", &["sirloin"]);
        m.insert("pork", &["bacon", "ham"]);
        m.insert("bacon", &["pancetta"]);
        m.insert("chicken", &["chicken breast", "chicken thigh"]);
        m.insert("shrimp", &["prawn"]);
        m.insert("fish", &["fish sauce"]);
        m.insert("gelatin", &["gelatine"]);

        // === Grains & legumes ===
        m.insert("wheat", &["durum", "semolina", "spelt"]);
        m.insert("flour", &["all purpose flour", "wheat flour"]);
        m.insert("pasta", &["noodle", "spaghetti"]);
        m.insert("chickpea", &["garbanzo bean"]);
        m.insert("soy", &["soya", "soybean"]);

        // === Nuts & seeds ===
        m.insert("peanut", &["groundnut"]);
        m.insert("sesame", &["sesame oil"]);

        // === Vegetables & aromatics ===
        m.insert("onion", &["green onion", "shallot"]);
        m.insert("garlic", &["garlic powder"]);
        m.insert("tomato", &["tomato paste", "tomato sauce"]);
        m.insert("mushroom", &["portobello", "shiitake"]);
        m.insert("cilantro", &["coriander"]);

        // === Sweeteners ===
        m.insert("sugar", &["cane sugar", "white sugar"]);

        m
    });

/// Synonyms for a normalized ingredient name (empty when unknown)
#[must_use]
pub fn synonyms(ingredient: &str) -> &'static [&'static str] {
    INGREDIENT_SYNONYMS.get(ingredient).copied().unwrap_or(&[])
}

/// Mutually exclusive diet pairs with the reason shown to users
pub const DIET_CONFLICTS: &[(DietTag, DietTag, &str)] = &[
    (
        DietTag::Vegan,
        DietTag::Pescatarian,
        "pescatarian diets include fish, which vegan diets exclude",
    ),
    (
        DietTag::Vegan,
        DietTag::Ketogenic,
        "ketogenic diets rely on animal fats and proteins that vegan diets exclude",
    ),
    (
        DietTag::Vegan,
        DietTag::Paleo,
        "paleo diets exclude legumes and grains, the main vegan protein sources",
    ),
    (
        DietTag::Vegan,
        DietTag::Primal,
        "primal diets center on animal products that vegan diets exclude",
    ),
    (
        DietTag::Vegan,
        DietTag::Whole30,
        "whole30 excludes legumes and soy, leaving almost no vegan protein",
    ),
    (
        DietTag::Vegetarian,
        DietTag::Pescatarian,
        "pescatarian diets include fish, which vegetarian diets exclude",
    ),
];

/// Animal-product terms inspected by the vegan exclusion check
pub const ANIMAL_PRODUCT_TERMS: &[&str] = &[
    "beef", "butter", "cheese", "chicken", "cream", "egg", "fish", "gelatin", "honey", "lamb",
    "meat", "milk", "pork", "seafood", "shellfish", "turkey", "yogurt",
];

/// Ingredients users commonly over-exclude, dropped by the common-exclusions relaxation
pub const COMMON_OVER_EXCLUSIONS: &[&str] = &["onion", "garlic", "mushrooms", "tomato"];
