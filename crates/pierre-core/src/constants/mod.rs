// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the dietary restriction resolution engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Cache key layout constants
pub mod cache;
/// Dietary policy defaults (pagination, thresholds, relaxation increments)
pub mod dietary;
