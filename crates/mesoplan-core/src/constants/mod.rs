// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Training scale bounds, periodization defaults, and configuration keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Every default used by the progression engine lives here so the
//! CLI, the environment loader, and the engine agree on one value.

/// Bounds of the 1-10 intensity/volume display scale
pub mod scale {
    /// Lowest prescribable value
    pub const MIN: f64 = 1.0;
    /// Highest prescribable value (also the progression ceiling)
    pub const MAX: f64 = 10.0;
}

/// Default values for optional progression parameters
pub mod defaults {
    /// Multiplier applied to both values on a deload week
    pub const DELOAD_FACTOR: f64 = 0.8;
    /// Undulating oscillation amplitude (scale points)
    pub const AMPLITUDE: f64 = 1.0;
    /// Undulating oscillation period (weeks)
    pub const PERIOD: f64 = 3.0;
    /// Accumulation intensity gain over the block
    pub const INTENSITY_DELTA: f64 = 2.0;
    /// Transmutation volume change over the block (may be negative)
    pub const VOLUME_DELTA: f64 = 2.0;
    /// Realization volume on the final (peaking) week
    pub const TARGET_VOLUME: f64 = 3.0;
    /// Linear week-over-week compound growth rate
    pub const PROGRESSION_RATE: f64 = 0.05;
}

/// Curve shape constants for the periodization models
pub mod curves {
    /// Exponent of the transmutation intensity/volume ramp
    pub const TRANSMUTATION_EXPONENT: f64 = 1.5;
    /// Share of the block spent before the taper when no taper start is given
    pub const DEFAULT_TAPER_SHARE: f64 = 2.0 / 3.0;
    /// Intensity gain (fraction of base) reached at the end of the pre-taper phase
    pub const PRE_TAPER_INTENSITY_GAIN: f64 = 0.7;
    /// Volume gain (fraction of base) reached at the end of the pre-taper phase
    pub const PRE_TAPER_VOLUME_GAIN: f64 = 0.5;
    /// Exponent of the taper-phase intensity curve
    pub const TAPER_INTENSITY_EXPONENT: f64 = 0.7;
}

/// Environment variable names read by `from_env()` constructors
pub mod env_config {
    /// Overrides `defaults::DELOAD_FACTOR`
    pub const DELOAD_FACTOR: &str = "MESOPLAN_DELOAD_FACTOR";
    /// Overrides `defaults::PROGRESSION_RATE`
    pub const PROGRESSION_RATE: &str = "MESOPLAN_PROGRESSION_RATE";
    /// Overrides `defaults::AMPLITUDE`
    pub const AMPLITUDE: &str = "MESOPLAN_AMPLITUDE";
    /// Overrides `defaults::PERIOD`
    pub const PERIOD: &str = "MESOPLAN_PERIOD";
    /// Overrides `defaults::INTENSITY_DELTA`
    pub const INTENSITY_DELTA: &str = "MESOPLAN_INTENSITY_DELTA";
    /// Overrides `defaults::VOLUME_DELTA`
    pub const VOLUME_DELTA: &str = "MESOPLAN_VOLUME_DELTA";
    /// Overrides `defaults::TARGET_VOLUME`
    pub const TARGET_VOLUME: &str = "MESOPLAN_TARGET_VOLUME";
    /// Reject unknown model names instead of falling back to linear
    pub const STRICT_MODELS: &str = "MESOPLAN_STRICT_MODELS";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line front end
    pub const MESOPLAN_CLI: &str = "mesoplan-cli";
}
