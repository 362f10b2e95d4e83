// ABOUTME: Library entry point for the Pierre dietary restriction engine
// ABOUTME: Resolves restriction profiles into recipe queries, cache keys, validation reports and relaxation plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Dietary Engine
//!
//! Pure, synchronous resolution of a user's dietary restrictions into the
//! pieces a recipe search needs:
//!
//! - **Exclusions**: the normalized, synonym-expanded ingredient list implied
//!   by diets, allergies and explicit exclusions
//! - **Query translation**: the external recipe API's parameter shape
//! - **Cache keys**: order-insensitive fingerprints of equivalent searches
//! - **Validation**: display-ready errors and warnings for contradictory or
//!   over-restrictive profiles
//! - **Relaxation**: ordered loosening steps after a zero-result search,
//!   never touching allergies
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_dietary_engine::dietary::{plan_relaxations, translate, validate};
//! use pierre_dietary_engine::models::{DietTag, RestrictionProfile, SearchOptions};
//!
//! let profile = RestrictionProfile::new()
//!     .with_diet(DietTag::Ketogenic)
//!     .with_allergy("peanuts");
//! let options = SearchOptions::new().with_max_ready_time(30);
//!
//! assert!(validate(&profile).is_valid());
//! assert_eq!(translate(&profile, &options).intolerances.as_deref(), Some("peanut"));
//! assert_eq!(plan_relaxations(&profile, &options).len(), 2);
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Dietary restriction resolution engine
pub mod dietary;

/// Structured logging setup for binaries
pub mod logging;

pub use pierre_core::{constants, errors, models};
