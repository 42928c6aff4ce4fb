// ABOUTME: Benchmark fixtures describing training blocks of different lengths
// ABOUTME: Provides deterministic block inputs for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for progression generation.

use mesoplan::ProgressionOptions;

/// Predefined block lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BlockLength {
    /// Four-week microcycle block
    Short,
    /// Typical twelve-week mesocycle
    Typical,
    /// Year-long macrocycle, for stress testing
    Season,
}

impl BlockLength {
    pub const ALL: [Self; 3] = [Self::Short, Self::Typical, Self::Season];

    #[must_use]
    pub const fn weeks(self) -> u32 {
        match self {
            Self::Short => 4,
            Self::Typical => 12,
            Self::Season => 52,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Typical => "typical",
            Self::Season => "season",
        }
    }
}

/// Options with a deload every fourth week and an explicit taper
#[must_use]
pub fn deload_options(weeks: u32) -> ProgressionOptions {
    ProgressionOptions {
        taper_start: Some(weeks.saturating_sub(2).max(1)),
        ..ProgressionOptions::default().with_deload(4, 0.7)
    }
}
