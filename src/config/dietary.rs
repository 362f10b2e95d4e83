// ABOUTME: Dietary engine configuration with environment overrides and a validated global instance
// ABOUTME: Pagination defaults, over-restriction thresholds and relaxation ladder policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dietary Engine Configuration
//!
//! Defaults mirror the product policy in `pierre_core::constants::dietary`.
//! Deployments can tune them through `DIETARY_*` environment variables; the
//! loaded configuration is validated once and cached for the process lifetime.

use super::error::ConfigError;
use pierre_core::constants::dietary::{
    CALORIE_RELAXATION_PERCENT, DEFAULT_OFFSET, DEFAULT_RESULT_COUNT, MAX_DISTINCT_ALLERGIES,
    MAX_DISTINCT_EXCLUSIONS, TIME_RELAXATION_CEILING_MINUTES, TIME_RELAXATION_INCREMENT_MINUTES,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static DIETARY_CONFIG: OnceLock<DietaryConfig> = OnceLock::new();

/// Dietary engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryConfig {
    /// Pagination defaults applied by the query translator and cache key
    pub search: SearchDefaultsConfig,
    /// Over-restriction thresholds used by the conflict validator
    pub validation: ValidationConfig,
    /// Relaxation ladder policy
    pub relaxation: RelaxationConfig,
}

/// Pagination defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDefaultsConfig {
    /// Results requested when the caller does not specify a count (30)
    pub default_result_count: u32,
    /// Offset used when the caller does not specify one (0)
    pub default_offset: u32,
}

impl Default for SearchDefaultsConfig {
    fn default() -> Self {
        Self {
            default_result_count: DEFAULT_RESULT_COUNT,
            default_offset: DEFAULT_OFFSET,
        }
    }
}

/// Over-restriction thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Distinct allergies tolerated before warning (6)
    pub max_distinct_allergies: usize,
    /// Distinct custom exclusions tolerated before warning (20)
    pub max_distinct_exclusions: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_distinct_allergies: MAX_DISTINCT_ALLERGIES,
            max_distinct_exclusions: MAX_DISTINCT_EXCLUSIONS,
        }
    }
}

/// Relaxation ladder policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaxationConfig {
    /// Minutes added by the time step (15)
    pub time_increment_minutes: u32,
    /// Ready-time bounds below this value are relaxed (60)
    pub time_ceiling_minutes: u32,
    /// Percentage added to the calorie ceiling (20)
    pub calorie_widen_percent: u32,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            time_increment_minutes: TIME_RELAXATION_INCREMENT_MINUTES,
            time_ceiling_minutes: TIME_RELAXATION_CEILING_MINUTES,
            calorie_widen_percent: CALORIE_RELAXATION_PERCENT,
        }
    }
}

impl DietaryConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        DIETARY_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load dietary config, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.default_result_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_result_count must be greater than 0",
            ));
        }

        if self.relaxation.time_increment_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "time_increment_minutes must be greater than 0",
            ));
        }

        if self.relaxation.time_ceiling_minutes <= self.relaxation.time_increment_minutes {
            return Err(ConfigError::InvalidRange(
                "time_ceiling_minutes must be > time_increment_minutes",
            ));
        }

        if !(1..=100).contains(&self.relaxation.calorie_widen_percent) {
            return Err(ConfigError::InvalidRange(
                "calorie_widen_percent must be between 1 and 100",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("DIETARY_DEFAULT_RESULT_COUNT")? {
            self.search.default_result_count = val;
        }
        if let Some(val) = env_override("DIETARY_DEFAULT_OFFSET")? {
            self.search.default_offset = val;
        }

        if let Some(val) = env_override("DIETARY_MAX_ALLERGIES")? {
            self.validation.max_distinct_allergies = val;
        }
        if let Some(val) = env_override("DIETARY_MAX_EXCLUSIONS")? {
            self.validation.max_distinct_exclusions = val;
        }

        if let Some(val) = env_override("DIETARY_TIME_INCREMENT_MINUTES")? {
            self.relaxation.time_increment_minutes = val;
        }
        if let Some(val) = env_override("DIETARY_TIME_CEILING_MINUTES")? {
            self.relaxation.time_ceiling_minutes = val;
        }
        if let Some(val) = env_override("DIETARY_CALORIE_WIDEN_PERCENT")? {
            self.relaxation.calorie_widen_percent = val;
        }

        Ok(self)
    }
}

/// Parse an optional environment override
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
