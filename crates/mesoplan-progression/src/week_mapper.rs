// ABOUTME: Maps nominal block weeks onto effective weeks with deload weeks compressed out
// ABOUTME: Keeps progression curves continuous across scheduled recovery weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Effective-week mapping.
//!
//! Deload weeks do not count toward progression momentum: the curve continues
//! as if those weeks were skipped, while the deload week's own output is scaled
//! down separately by [`DeloadSchedule`](crate::deload::DeloadSchedule).
//!
//! With a deload every 3 weeks in a 7-week block:
//!
//! | week | 1 | 2 | 3 | 4 | 5 | 6 | 7 |
//! |------|---|---|---|---|---|---|---|
//! | eff  | 1 | 2 | 3 | 3 | 4 | 5 | 5 |
//!
//! and `max_effective_weeks = 7 - 2 = 5`.

use serde::{Deserialize, Serialize};

/// Week position with deload weeks compressed out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveWeek {
    /// Week number counting only progression weeks
    pub effective_week: u32,
    /// Effective length of the whole block (never exceeds the nominal length)
    pub max_effective_weeks: u32,
}

impl EffectiveWeek {
    /// Normalized 0..=1 position of this week within the effective block.
    ///
    /// Blocks with a single effective week have no progression and report 0.
    #[must_use]
    pub fn progress_fraction(self) -> f64 {
        if self.max_effective_weeks > 1 {
            (f64::from(self.effective_week) - 1.0) / (f64::from(self.max_effective_weeks) - 1.0)
        } else {
            0.0
        }
    }
}

/// Compute the effective week for `week` of a `total_weeks` block.
///
/// A `deload_frequency` of `None` or `Some(0)` disables compression.
#[must_use]
pub fn effective_week(week: u32, total_weeks: u32, deload_frequency: Option<u32>) -> EffectiveWeek {
    match deload_frequency.filter(|&frequency| frequency > 0) {
        None => EffectiveWeek {
            effective_week: week,
            max_effective_weeks: total_weeks,
        },
        Some(frequency) => {
            let deloads_so_far = week.saturating_sub(1) / frequency;
            let total_deloads = total_weeks.saturating_sub(1) / frequency;
            EffectiveWeek {
                effective_week: week - deloads_so_far,
                max_effective_weeks: total_weeks - total_deloads,
            }
        }
    }
}
