// ABOUTME: Pierre dietary CLI - runs engine operations against profile and option files
// ABOUTME: Prints exclusions, translated queries, cache keys, validation reports and relaxation plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the expanded exclusion list for a profile
//! pierre-dietary --profile profile.json exclusions
//!
//! # Translate a profile and options into recipe API parameters
//! pierre-dietary --profile profile.json --options options.json translate
//!
//! # Print the cache key for a search
//! pierre-dietary --profile profile.json cache-key
//!
//! # Validate a profile
//! pierre-dietary --profile profile.json validate
//!
//! # List relaxation steps, then apply one
//! pierre-dietary --profile profile.json --options options.json plan
//! pierre-dietary --profile profile.json --options options.json relax relax_time
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pierre_dietary_engine::dietary::{
    apply_relaxation, build_exclusions, cache_key, load_profile, load_search_options,
    plan_relaxations, translate, validate,
};
use pierre_dietary_engine::logging::LoggingConfig;
use pierre_dietary_engine::models::{RestrictionProfile, SearchOptions};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pierre-dietary",
    about = "Pierre dietary restriction engine CLI",
    long_about = "Resolve a dietary restriction profile into exclusions, recipe queries, cache keys, validation reports and relaxation steps."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Restriction profile JSON file
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Search options JSON file (defaults when absent)
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the normalized, synonym-expanded exclusion list
    Exclusions,

    /// Print the translated recipe search query and its query parameters
    Translate,

    /// Print the cache key for the profile and options
    CacheKey,

    /// Print the validation report
    Validate,

    /// Print the applicable relaxation steps, in order
    Plan,

    /// Apply a relaxation step and print the resulting profile and options
    Relax {
        /// Step identifier (e.g. `relax_time`)
        step_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    logging.init()?;

    let profile = read_profile(cli.profile.as_deref())?;
    let options = read_options(cli.options.as_deref())?;

    match cli.command {
        Command::Exclusions => print_json(&build_exclusions(&profile)),
        Command::Translate => {
            let query = translate(&profile, &options);
            let params = query.to_query_params();
            print_json(&json!({ "query": query, "params": params }))
        }
        Command::CacheKey => {
            println!("{}", cache_key(&profile, &options));
            Ok(())
        }
        Command::Validate => print_json(&validate(&profile)),
        Command::Plan => print_json(&plan_relaxations(&profile, &options)),
        Command::Relax { step_id } => {
            info!(step_id = %step_id, "Applying relaxation step");
            let (profile, options) = apply_relaxation(&profile, &options, &step_id);
            print_json(&json!({ "profile": profile, "options": options }))
        }
    }
}

fn read_profile(path: Option<&Path>) -> Result<RestrictionProfile> {
    let path = path.ok_or_else(|| anyhow!("--profile <file> is required"))?;
    Ok(load_profile(path)?)
}

fn read_options(path: Option<&Path>) -> Result<SearchOptions> {
    path.map_or_else(|| Ok(SearchOptions::default()), |path| Ok(load_search_options(path)?))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
