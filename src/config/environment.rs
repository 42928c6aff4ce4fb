// ABOUTME: Environment-based configuration for option defaults and model-name strictness
// ABOUTME: Reads MESOPLAN_* variables once at startup into a plain value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use mesoplan_core::constants::env_config;
use mesoplan_progression::ProgressionOptions;
use serde::Serialize;
use tracing::debug;

/// Runtime configuration loaded from the environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlannerConfig {
    /// Option defaults applied before per-request overrides
    pub default_options: ProgressionOptions,
    /// Reject unknown model names instead of falling back to linear
    pub strict_models: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_options: ProgressionOptions::default(),
            strict_models: false,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            default_options: ProgressionOptions::from_env(),
            strict_models: env::var(env_config::STRICT_MODELS)
                .is_ok_and(|v| v == "true" || v == "1"),
        };
        debug!(
            strict_models = config.strict_models,
            deload_factor = config.default_options.deload_factor,
            progression_rate = config.default_options.progression_rate,
            "Planner configuration loaded"
        );
        config
    }
}
