// ABOUTME: Core data models for dietary-aware recipe search
// ABOUTME: Re-exports restriction profile inputs and engine output shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Immutable values**: profiles and options are never mutated in place;
//!   every transformation returns a new value
//! - **Serializable**: all models round-trip through JSON for storage and the CLI
//! - **Type Safe**: diet tags are closed, allergen tags are open for forward compatibility

mod dietary;
mod recipe_search;

// Inputs
pub use dietary::{AllergenTag, CalorieRange, DietTag, RestrictionProfile, SearchOptions};

// Outputs
pub use recipe_search::{
    RelaxationStep, RelaxationStepId, RestrictionProfileDelta, SearchOptionsDelta,
    TranslatedQuery, ValidationReport,
};
