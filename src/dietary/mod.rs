// ABOUTME: Dietary restriction resolution engine for recipe search
// ABOUTME: Exclusion sets, query translation, cache keys, validation and relaxation planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dietary Restriction Engine
//!
//! Pure functions over an immutable [`RestrictionProfile`] and
//! [`SearchOptions`]: nothing here performs I/O or keeps state, so every
//! function is safe to call concurrently.
//!
//! ## Flow
//!
//! ```text
//! profile + options ──► translate ──► build_exclusions ──► normalize / vocabulary
//!                  └──► cache_key (checked by the caller before searching)
//! zero results ──► plan_relaxations ──► apply_relaxation ──► retry
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use pierre_dietary_engine::models::{AllergenTag, DietTag, RestrictionProfile, SearchOptions};
//! use pierre_dietary_engine::dietary::{cache_key, translate, validate};
//!
//! let profile = RestrictionProfile::new()
//!     .with_diet(DietTag::Vegan)
//!     .with_allergy(AllergenTag::Dairy);
//! let options = SearchOptions::new().with_max_ready_time(30);
//!
//! let report = validate(&profile);
//! assert!(report.is_valid());
//!
//! let key = cache_key(&profile, &options);
//! let query = translate(&profile, &options);
//! assert_eq!(query.diet.as_deref(), Some("vegan"));
//! assert!(key.contains("diets=vegan"));
//! ```
//!
//! [`RestrictionProfile`]: pierre_core::models::RestrictionProfile
//! [`SearchOptions`]: pierre_core::models::SearchOptions

/// Cache key generation
pub mod cache_key;
/// Exclusion set construction
pub mod exclusions;
/// Ingredient name normalization
pub mod normalizer;
/// Profile and option file loading
pub mod profile_io;
/// Query translation
pub mod query;
/// Relaxation ladder planning
pub mod relaxation;
/// Conflict and over-restriction validation
pub mod validation;
/// Static vocabulary tables
pub mod vocabulary;

pub use cache_key::{cache_key, cache_key_with};
pub use exclusions::build_exclusions;
pub use normalizer::normalize;
pub use profile_io::{load_profile, load_search_options, parse_profile_json};
pub use query::{translate, translate_with};
pub use relaxation::{
    apply_relaxation, apply_relaxation_with, plan_relaxations, plan_relaxations_with,
};
pub use validation::{validate, validate_with};
