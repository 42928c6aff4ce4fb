// ABOUTME: Progression option bag with documented defaults and environment overrides
// ABOUTME: Shared by every periodization model; unused fields are ignored per model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression options.
//!
//! One flat option bag covers all five models, matching the JSON the host web
//! layer sends (`{"deloadFrequency": 4, "targetVolume": 3}`). Fields a model does
//! not use are ignored; missing fields take the defaults in
//! [`mesoplan_core::constants::defaults`].

use std::env;
use std::str::FromStr;

use mesoplan_core::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};

use crate::deload::DeloadSchedule;
use crate::error::ConfigError;

/// Options for template generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionOptions {
    /// Deload every N weeks (`None` or 0 disables deloads)
    pub deload_frequency: Option<u32>,
    /// Multiplier applied on deload weeks
    pub deload_factor: f64,
    /// Undulating: oscillation amplitude
    pub amplitude: f64,
    /// Undulating: oscillation period in weeks
    pub period: f64,
    /// Accumulation: intensity gain over the block
    pub intensity_delta: f64,
    /// Transmutation: volume change over the block
    pub volume_delta: f64,
    /// Realization: volume on the final week
    pub target_volume: f64,
    /// Linear: compound weekly growth rate
    pub progression_rate: f64,
    /// Realization: first taper week (`None` or 0 means two thirds into the block)
    pub taper_start: Option<u32>,
}

impl Default for ProgressionOptions {
    fn default() -> Self {
        Self {
            deload_frequency: None,
            deload_factor: defaults::DELOAD_FACTOR,
            amplitude: defaults::AMPLITUDE,
            period: defaults::PERIOD,
            intensity_delta: defaults::INTENSITY_DELTA,
            volume_delta: defaults::VOLUME_DELTA,
            target_volume: defaults::TARGET_VOLUME,
            progression_rate: defaults::PROGRESSION_RATE,
            taper_start: None,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

impl ProgressionOptions {
    /// Load option defaults from environment
    ///
    /// Unset or unparseable variables keep the built-in default. Deload
    /// frequency and taper start are per-block choices and are never read
    /// from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            deload_frequency: None,
            deload_factor: env_or(env_config::DELOAD_FACTOR, defaults::DELOAD_FACTOR),
            amplitude: env_or(env_config::AMPLITUDE, defaults::AMPLITUDE),
            period: env_or(env_config::PERIOD, defaults::PERIOD),
            intensity_delta: env_or(env_config::INTENSITY_DELTA, defaults::INTENSITY_DELTA),
            volume_delta: env_or(env_config::VOLUME_DELTA, defaults::VOLUME_DELTA),
            target_volume: env_or(env_config::TARGET_VOLUME, defaults::TARGET_VOLUME),
            progression_rate: env_or(env_config::PROGRESSION_RATE, defaults::PROGRESSION_RATE),
            taper_start: None,
        }
    }

    /// Set the deload cadence
    #[must_use]
    pub fn with_deload(mut self, frequency: u32, factor: f64) -> Self {
        self.deload_frequency = Some(frequency);
        self.deload_factor = factor;
        self
    }

    /// Deload schedule described by these options
    #[must_use]
    pub const fn deload_schedule(&self) -> DeloadSchedule {
        DeloadSchedule {
            frequency: self.deload_frequency,
            factor: self.deload_factor,
        }
    }

    /// Taper start if explicitly set (zero counts as unset)
    #[must_use]
    pub fn explicit_taper_start(&self) -> Option<u32> {
        self.taper_start.filter(|&week| week > 0)
    }

    /// Check option values for hosts that want strict input handling
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a parameter is not finite,
    /// the deload factor is outside `(0, 1]`, or the period is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("deloadFactor", self.deload_factor),
            ("amplitude", self.amplitude),
            ("period", self.period),
            ("intensityDelta", self.intensity_delta),
            ("volumeDelta", self.volume_delta),
            ("targetVolume", self.target_volume),
            ("progressionRate", self.progression_rate),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::out_of_range(field, "must be a finite number"));
        }

        if self.deload_factor <= 0.0 || self.deload_factor > 1.0 {
            return Err(ConfigError::out_of_range(
                "deloadFactor",
                format!("must be in (0, 1], got {}", self.deload_factor),
            ));
        }

        if self.period == 0.0 {
            return Err(ConfigError::out_of_range("period", "must be non-zero"));
        }

        Ok(())
    }

    /// [`validate`](Self::validate) plus checks that depend on block length
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if [`validate`](Self::validate)
    /// fails or the taper starts after the last week of the block.
    pub fn validate_for_duration(&self, duration: u32) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(taper_start) = self.explicit_taper_start() {
            if taper_start > duration {
                return Err(ConfigError::out_of_range(
                    "taperStart",
                    format!("week {taper_start} is beyond the {duration}-week block"),
                ));
            }
        }

        Ok(())
    }
}
