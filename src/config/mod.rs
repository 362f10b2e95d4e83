// ABOUTME: Configuration module for the dietary restriction engine
// ABOUTME: Re-exports engine configuration types and the configuration error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Dietary engine configuration (pagination defaults, validation thresholds, relaxation policy)
pub mod dietary;
/// Configuration error types
pub mod error;

pub use dietary::{DietaryConfig, RelaxationConfig, SearchDefaultsConfig, ValidationConfig};
pub use error::ConfigError;
