// ABOUTME: Ingredient name normalization (case, whitespace, common plurals)
// ABOUTME: Canonicalizes free-form names before they enter any exclusion set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

/// Plural → singular forms for ingredient words
///
/// A fixed table rather than general morphology. No singular form is itself a
/// key, which keeps `normalize` idempotent.
static PLURAL_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // === Vegetables & fruit ===
        ("tomatoes", "tomato"),
        ("potatoes", "potato"),
        ("onions", "onion"),
        ("shallots", "shallot"),
        ("scallions", "scallion"),
        ("leeks", "leek"),
        ("mushrooms", "mushroom"),
        ("carrots", "carrot"),
        ("peppers", "pepper"),
        ("olives", "olive"),
        ("apples", "apple"),
        ("pears", "pear"),
        ("berries", "berry"),
        ("cherries", "cherry"),
        ("cloves", "clove"),
        // === Animal products ===
        ("eggs", "egg"),
        ("anchovies", "anchovy"),
        ("sardines", "sardine"),
        ("shrimps", "shrimp"),
        ("prawns", "prawn"),
        ("clams", "clam"),
        ("mussels", "mussel"),
        ("oysters", "oyster"),
        ("scallops", "scallop"),
        ("crabs", "crab"),
        ("lobsters", "lobster"),
        // === Nuts, seeds & legumes ===
        ("peanuts", "peanut"),
        ("almonds", "almond"),
        ("walnuts", "walnut"),
        ("cashews", "cashew"),
        ("pecans", "pecan"),
        ("pistachios", "pistachio"),
        ("hazelnuts", "hazelnut"),
        ("nuts", "nut"),
        ("seeds", "seed"),
        ("beans", "bean"),
        ("lentils", "lentil"),
        ("chickpeas", "chickpea"),
        // === Grains ===
        ("grains", "grain"),
        ("oats", "oat"),
        ("noodles", "noodle"),
        ("tortillas", "tortilla"),
    ])
});

/// Canonicalize a free-form ingredient name
///
/// Lower-cases, trims, collapses internal whitespace and singularizes each
/// word found in the plural table. Empty input yields an empty string.
///
/// ```
/// use pierre_dietary_engine::dietary::normalize;
///
/// assert_eq!(normalize("  Cherry   TOMATOES "), "cherry tomato");
/// assert_eq!(normalize(&normalize("Eggs")), normalize("Eggs"));
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|word| PLURAL_FORMS.get(word).copied().unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}
