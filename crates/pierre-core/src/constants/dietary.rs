// ABOUTME: Dietary engine policy constants for pagination, validation and relaxation
// ABOUTME: Defaults for DietaryConfig; every value can be overridden from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default number of recipes requested per search
pub const DEFAULT_RESULT_COUNT: u32 = 30;

/// Default pagination offset
pub const DEFAULT_OFFSET: u32 = 0;

/// Distinct allergies above which a profile is flagged as over-restricted
pub const MAX_DISTINCT_ALLERGIES: usize = 6;

/// Distinct custom exclusions above which a profile is flagged as over-restricted
pub const MAX_DISTINCT_EXCLUSIONS: usize = 20;

/// Minutes added to `maxReadyTime` by the time relaxation step
pub const TIME_RELAXATION_INCREMENT_MINUTES: u32 = 15;

/// Ready-time bounds at or above this value are not worth relaxing
pub const TIME_RELAXATION_CEILING_MINUTES: u32 = 60;

/// Percentage added to the calorie upper bound by the calorie relaxation step
pub const CALORIE_RELAXATION_PERCENT: u32 = 20;
