// ABOUTME: Periodization model selection with enum-based dispatch to the five progression curves
// ABOUTME: Defines ProgressionModel (the tag), ProgressionAlgorithm (tag + parameters), and the strategy trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Algorithm Module
//!
//! Each periodization model maps `(base load, week, block length, parameters)` to a
//! raw `(intensity, volume)` pair. The pipeline for one week is always:
//!
//! 1. raw curve ([`ProgressionStrategy::raw_load`])
//! 2. deload reduction ([`DeloadSchedule::apply`])
//! 3. clamp to the 1-10 scale
//!
//! # Design Philosophy
//!
//! - **Type Safety**: Models are enums, not strings; names are parsed once at the edge
//! - **Single dispatch point**: the only `match` over models lives in
//!   [`ProgressionAlgorithm::raw_load`]
//! - **Extensibility**: [`ProgressionStrategy`] lets hosts drive the template
//!   generator with their own curves
//!
//! # Example
//!
//! ```rust
//! use mesoplan_progression::algorithms::{ProgressionModel, ProgressionStrategy, WeekContext};
//! use mesoplan_progression::{DeloadSchedule, ProgressionOptions, TrainingLoad};
//!
//! let algorithm = ProgressionModel::Accumulation.algorithm(&ProgressionOptions::default());
//! let context = WeekContext::new(3, 8, DeloadSchedule::disabled());
//! let load = algorithm.prescribe(TrainingLoad::new(5.0, 5.0), &context);
//! assert!(load.volume > 5.0);
//! ```

pub mod accumulation;
pub mod linear;
pub mod realization;
pub mod transmutation;
pub mod undulating;

use std::fmt;
use std::str::FromStr;

use mesoplan_core::constants::scale;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deload::DeloadSchedule;
use crate::error::ConfigError;
use crate::options::ProgressionOptions;
use crate::scale::TrainingLoad;
use crate::week_mapper::{effective_week, EffectiveWeek};

/// Linear trend from `base` (fraction 0) to the scale ceiling (fraction 1)
pub(crate) fn toward_ceiling(base: f64, fraction: f64) -> f64 {
    base + (scale::MAX - base) * fraction
}

/// Position of one week inside a training block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekContext {
    /// Nominal 1-based week
    pub week: u32,
    /// Block (macrocycle) length in weeks
    pub block_length: u32,
    /// Deload cadence of the block
    pub deload: DeloadSchedule,
}

impl WeekContext {
    /// Create a context for `week` of a `block_length`-week block
    #[must_use]
    pub const fn new(week: u32, block_length: u32, deload: DeloadSchedule) -> Self {
        Self {
            week,
            block_length,
            deload,
        }
    }

    /// Week position with deload weeks compressed out
    #[must_use]
    pub fn effective(&self) -> EffectiveWeek {
        effective_week(self.week, self.block_length, self.deload.active_frequency())
    }

    /// Deload-aware 0..=1 progress through the block
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.effective().progress_fraction()
    }
}

/// A curve that prescribes weekly training load
pub trait ProgressionStrategy {
    /// Load before deload reduction and clamping
    fn raw_load(&self, base: TrainingLoad, context: &WeekContext) -> TrainingLoad;

    /// Final load for the week: raw curve, then deload reduction, then clamp
    fn prescribe(&self, base: TrainingLoad, context: &WeekContext) -> TrainingLoad {
        let raw = self.raw_load(base, context);
        context.deload.apply(raw, context.week).clamped()
    }
}

/// Periodization model names accepted at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionModel {
    /// Compound week-over-week growth
    #[default]
    Linear,
    /// Linear trend with sine/cosine oscillation
    Undulating,
    /// Volume-focused block
    Accumulation,
    /// Intensity-focused block
    Transmutation,
    /// Peaking block with taper
    Realization,
}

impl ProgressionModel {
    /// Every model, in catalogue order
    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::Undulating,
        Self::Accumulation,
        Self::Transmutation,
        Self::Realization,
    ];

    /// Canonical (wire) name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Undulating => "undulating",
            Self::Accumulation => "accumulation",
            Self::Transmutation => "transmutation",
            Self::Realization => "realization",
        }
    }

    /// One-line description of the model
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Linear => {
                "Intensity and volume compound upward each effective week at a fixed rate"
            }
            Self::Undulating => {
                "Linear climb to the ceiling with weekly waves: intensity on a sine, volume on a cosine"
            }
            Self::Accumulation => {
                "Volume ramps to the ceiling while intensity gains a small square-root increase"
            }
            Self::Transmutation => {
                "Intensity climbs steeply late in the block while volume shifts only slightly"
            }
            Self::Realization => {
                "Build, then taper volume to a target while intensity peaks on the final week"
            }
        }
    }

    /// Resolve a model name, falling back to [`ProgressionModel::Linear`]
    ///
    /// Matching is exact and case-sensitive. Hosts needing strict handling use
    /// [`FromStr`] instead.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!(model = name, "Unknown progression model, using linear");
            Self::Linear
        })
    }

    /// Bind this model to its parameters from `options`
    #[must_use]
    pub fn algorithm(self, options: &ProgressionOptions) -> ProgressionAlgorithm {
        match self {
            Self::Linear => ProgressionAlgorithm::Linear {
                progression_rate: options.progression_rate,
            },
            Self::Undulating => ProgressionAlgorithm::Undulating {
                amplitude: options.amplitude,
                period: options.period,
            },
            Self::Accumulation => ProgressionAlgorithm::Accumulation {
                intensity_delta: options.intensity_delta,
            },
            Self::Transmutation => ProgressionAlgorithm::Transmutation {
                volume_delta: options.volume_delta,
            },
            Self::Realization => ProgressionAlgorithm::Realization {
                target_volume: options.target_volume,
                taper_start: options.explicit_taper_start(),
            },
        }
    }
}

impl fmt::Display for ProgressionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProgressionModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or_else(|| ConfigError::UnknownModel(s.to_owned()))
    }
}

/// A periodization model together with its curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ProgressionAlgorithm {
    /// `base * (1 + rate)^(effective_week - 1)`
    Linear {
        /// Compound weekly growth rate
        progression_rate: f64,
    },
    /// `base + (10 - base) * fraction + amplitude * sin|cos(2pi (week - 1) / period)`
    Undulating {
        /// Oscillation amplitude
        amplitude: f64,
        /// Oscillation period in weeks
        period: f64,
    },
    /// Intensity `base + delta * sqrt(fraction)`, volume linear to the ceiling
    Accumulation {
        /// Intensity gain over the block
        intensity_delta: f64,
    },
    /// Intensity `base + (10 - base) * fraction^1.5`, volume `base + delta * fraction^1.5`
    Transmutation {
        /// Volume change over the block (may be negative)
        volume_delta: f64,
    },
    /// Build then taper; the final week is exactly `(10, target_volume)`
    Realization {
        /// Volume on the final week
        target_volume: f64,
        /// First taper week (`None`: two thirds into the block)
        taper_start: Option<u32>,
    },
}

impl Default for ProgressionAlgorithm {
    fn default() -> Self {
        ProgressionModel::default().algorithm(&ProgressionOptions::default())
    }
}

impl ProgressionAlgorithm {
    /// Model tag of this algorithm
    #[must_use]
    pub const fn model(&self) -> ProgressionModel {
        match self {
            Self::Linear { .. } => ProgressionModel::Linear,
            Self::Undulating { .. } => ProgressionModel::Undulating,
            Self::Accumulation { .. } => ProgressionModel::Accumulation,
            Self::Transmutation { .. } => ProgressionModel::Transmutation,
            Self::Realization { .. } => ProgressionModel::Realization,
        }
    }
}

impl ProgressionStrategy for ProgressionAlgorithm {
    fn raw_load(&self, base: TrainingLoad, context: &WeekContext) -> TrainingLoad {
        match *self {
            Self::Linear { progression_rate } => linear::compute(base, context, progression_rate),
            Self::Undulating { amplitude, period } => {
                undulating::compute(base, context, amplitude, period)
            }
            Self::Accumulation { intensity_delta } => {
                accumulation::compute(base, context, intensity_delta)
            }
            Self::Transmutation { volume_delta } => {
                transmutation::compute(base, context, volume_delta)
            }
            Self::Realization {
                target_volume,
                taper_start,
            } => realization::compute(base, context, target_volume, taper_start),
        }
    }
}
