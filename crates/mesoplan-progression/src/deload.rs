// ABOUTME: Deload cadence and the reduction applied to scheduled recovery weeks
// ABOUTME: Scales raw intensity/volume before clamping on every Nth week of a block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mesoplan_core::constants::defaults;
use serde::{Deserialize, Serialize};

use crate::scale::TrainingLoad;

/// Deload cadence for a training block
///
/// Every week where `week % frequency == 0` is a deload week. A missing or
/// zero frequency disables deloads entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeloadSchedule {
    /// Deload every N weeks
    pub frequency: Option<u32>,
    /// Multiplier applied to intensity and volume on deload weeks
    pub factor: f64,
}

impl Default for DeloadSchedule {
    fn default() -> Self {
        Self::disabled()
    }
}

impl DeloadSchedule {
    /// Schedule with a deload every `frequency` weeks
    #[must_use]
    pub const fn every(frequency: u32, factor: f64) -> Self {
        Self {
            frequency: Some(frequency),
            factor,
        }
    }

    /// Schedule without deload weeks
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            frequency: None,
            factor: defaults::DELOAD_FACTOR,
        }
    }

    /// Frequency if deloads are enabled (zero counts as disabled)
    #[must_use]
    pub fn active_frequency(&self) -> Option<u32> {
        self.frequency.filter(|&frequency| frequency > 0)
    }

    /// Whether `week` falls on the deload cadence
    #[must_use]
    pub fn is_deload_week(&self, week: u32) -> bool {
        self.active_frequency()
            .is_some_and(|frequency| week % frequency == 0)
    }

    /// Scale `load` down if `week` is a deload week, otherwise return it unchanged
    #[must_use]
    pub fn apply(&self, load: TrainingLoad, week: u32) -> TrainingLoad {
        if self.is_deload_week(week) {
            load.scaled(self.factor)
        } else {
            load
        }
    }

    /// All deload weeks of a `duration`-week block, in order
    #[must_use]
    pub fn deload_weeks(&self, duration: u32) -> Vec<u32> {
        (1..=duration)
            .filter(|&week| self.is_deload_week(week))
            .collect()
    }
}
