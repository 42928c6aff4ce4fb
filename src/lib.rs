// ABOUTME: Main library entry point for the Mesoplan periodization toolkit
// ABOUTME: Re-exports the progression engine and adds environment configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mesoplan
//!
//! Training-load progression engine for mesocycle planning. Given a
//! periodization model, a block length, and base intensity/volume on a 1-10
//! scale, it prescribes intensity and volume for every week of the block,
//! honouring deload weeks and taper phases.
//!
//! ## Architecture
//!
//! - **`mesoplan-core`**: error types and constants
//! - **`mesoplan-progression`**: the pure computation engine
//! - **config**: environment-driven defaults for hosts and the CLI
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use mesoplan::{generate_progression_template, ProgressionOptions};
//!
//! let options = ProgressionOptions {
//!     target_volume: 3.0,
//!     ..ProgressionOptions::default()
//! };
//! let template = generate_progression_template("realization", 6, 5.0, 7.0, &options);
//!
//! let last = template.get(6).unwrap();
//! assert_eq!((last.intensity, last.volume), (10, 3));
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use mesoplan_core::{constants, errors};
pub use mesoplan_progression as progression;
pub use mesoplan_progression::{
    compare_models, generate_progression_template, DeloadSchedule, ProgressionModel,
    ProgressionOptions, ProgressionRequest, ProgressionTemplate, TemplateGenerator,
    WeekPrescription,
};
