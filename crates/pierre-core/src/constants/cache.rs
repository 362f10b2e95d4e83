// ABOUTME: Cache key constants for memoizing translated recipe searches
// ABOUTME: Namespace, delimiter and segment labels used by the cache key generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Leading namespace segment of every recipe search cache key
pub const CACHE_KEY_NAMESPACE: &str = "recipe_search";

/// Separator between cache key segments
pub const CACHE_KEY_DELIMITER: &str = "|";

/// Separator between values inside a single segment
pub const CACHE_KEY_LIST_SEPARATOR: &str = ",";

/// Segment emitted when strict low-FODMAP mode is enabled
pub const CACHE_KEY_STRICT_FODMAP: &str = "fodmap=strict";
