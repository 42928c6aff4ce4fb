// ABOUTME: Shared argument groups and subcommand implementations for mesoplan-cli
// ABOUTME: Maps command-line flags onto progression requests and options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod compare;
pub mod generate;

use clap::{Args, ValueEnum};
use mesoplan::ProgressionOptions;

/// Output format for generated templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// JSON on stdout
    Json,
}

/// Block length and starting load
#[derive(Debug, Args)]
pub struct BlockArgs {
    /// Block length in weeks
    #[arg(long, short = 'w')]
    pub weeks: u32,

    /// Base intensity on the 1-10 scale
    #[arg(long, short = 'i')]
    pub intensity: f64,

    /// Base volume on the 1-10 scale
    #[arg(long)]
    pub volume: f64,
}

/// Per-run overrides of the option defaults
#[derive(Debug, Args)]
pub struct OptionArgs {
    /// Deload every N weeks
    #[arg(long)]
    pub deload_frequency: Option<u32>,

    /// Deload multiplier, in (0, 1]
    #[arg(long)]
    pub deload_factor: Option<f64>,

    /// Undulating wave amplitude
    #[arg(long, allow_negative_numbers = true)]
    pub amplitude: Option<f64>,

    /// Undulating wave period in weeks
    #[arg(long)]
    pub period: Option<f64>,

    /// Accumulation intensity gain
    #[arg(long, allow_negative_numbers = true)]
    pub intensity_delta: Option<f64>,

    /// Transmutation volume change (negative reduces volume)
    #[arg(long, allow_negative_numbers = true)]
    pub volume_delta: Option<f64>,

    /// Realization final-week volume
    #[arg(long)]
    pub target_volume: Option<f64>,

    /// Linear weekly growth rate
    #[arg(long, allow_negative_numbers = true)]
    pub progression_rate: Option<f64>,

    /// Realization first taper week
    #[arg(long)]
    pub taper_start: Option<u32>,
}

impl OptionArgs {
    /// Overlay the flags that were given onto `defaults`
    pub fn resolve(&self, defaults: ProgressionOptions) -> ProgressionOptions {
        ProgressionOptions {
            deload_frequency: self.deload_frequency.or(defaults.deload_frequency),
            deload_factor: self.deload_factor.unwrap_or(defaults.deload_factor),
            amplitude: self.amplitude.unwrap_or(defaults.amplitude),
            period: self.period.unwrap_or(defaults.period),
            intensity_delta: self.intensity_delta.unwrap_or(defaults.intensity_delta),
            volume_delta: self.volume_delta.unwrap_or(defaults.volume_delta),
            target_volume: self.target_volume.unwrap_or(defaults.target_volume),
            progression_rate: self.progression_rate.unwrap_or(defaults.progression_rate),
            taper_start: self.taper_start.or(defaults.taper_start),
        }
    }
}
