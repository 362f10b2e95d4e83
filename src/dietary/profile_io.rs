// ABOUTME: Loading restriction profiles and search options from JSON files
// ABOUTME: Maps I/O failures to storage errors and decode failures to serialization errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{RestrictionProfile, SearchOptions};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a restriction profile from JSON text
///
/// # Errors
///
/// Returns a serialization error if the JSON is malformed or names an unknown diet
pub fn parse_profile_json(json: &str) -> AppResult<RestrictionProfile> {
    Ok(serde_json::from_str(json)?)
}

/// Load a restriction profile from a JSON file
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or a serialization
/// error if its contents are not a valid profile
pub fn load_profile(path: &Path) -> AppResult<RestrictionProfile> {
    load_json(path)
}

/// Load search options from a JSON file
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or a serialization
/// error if its contents are not valid options
pub fn load_search_options(path: &Path) -> AppResult<SearchOptions> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}", path.display())).with_source(e)
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Loaded JSON file");

    serde_json::from_str(&contents).map_err(|e| {
        AppError::serialization(format!("Failed to parse {}: {e}", path.display())).with_source(e)
    })
}
