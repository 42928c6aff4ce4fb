// ABOUTME: Training-load progression engine for periodized mesocycle planning
// ABOUTME: Computes weekly intensity/volume prescriptions for five periodization models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mesoplan Progression
//!
//! Stateless computation of weekly training prescriptions for a multi-week block.
//! For every week `1..=duration` the engine:
//!
//! 1. maps the week onto its effective week (deload weeks compressed out)
//! 2. evaluates the selected periodization curve
//! 3. scales deload weeks by the deload factor
//! 4. clamps to the 1-10 scale and rounds
//!
//! All functions are pure and total over their numeric inputs. Every type is a
//! plain value, so calls may run concurrently without coordination.
//!
//! ## Modules
//!
//! - **algorithms**: the five models and the [`ProgressionStrategy`] trait
//! - **week_mapper**: effective-week computation
//! - **deload**: deload cadence and reduction
//! - **scale**: clamping and the [`TrainingLoad`] pair
//! - **options** / **request**: inputs with defaults and opt-in validation
//! - **template**: template generation and model comparison

/// Periodization models and strategy dispatch
pub mod algorithms;
/// Deload cadence and reduction
pub mod deload;
/// Configuration and validation errors
pub mod error;
/// Option bag with defaults and environment overrides
pub mod options;
/// Host-facing template request
pub mod request;
/// Scale bounds and clamping
pub mod scale;
/// Template generation
pub mod template;
/// Effective-week mapping
pub mod week_mapper;

pub use algorithms::{ProgressionAlgorithm, ProgressionModel, ProgressionStrategy, WeekContext};
pub use deload::DeloadSchedule;
pub use error::ConfigError;
pub use options::ProgressionOptions;
pub use request::ProgressionRequest;
pub use scale::{clamp, clamp_scale, TrainingLoad};
pub use template::{
    compare_models, generate_progression_template, ProgressionTemplate, TemplateGenerator,
    WeekPrescription,
};
pub use week_mapper::{effective_week, EffectiveWeek};
