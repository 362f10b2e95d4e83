// ABOUTME: Core types and constants for the Pierre dietary restriction engine
// ABOUTME: Foundation crate with error handling, constants and restriction profile models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the dietary
//! restriction resolution engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Policy defaults and cache key layout
//! - **models**: Restriction profiles, search options and engine outputs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Restriction profile, search option and engine output models
pub mod models;
