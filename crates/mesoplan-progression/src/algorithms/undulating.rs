// ABOUTME: Undulating periodization: linear trend toward the ceiling plus a weekly oscillation
// ABOUTME: Intensity follows a sine wave and volume a cosine wave around the trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::f64::consts::TAU;

use crate::algorithms::{toward_ceiling, WeekContext};
use crate::scale::TrainingLoad;

/// Raw undulating load
///
/// The trend uses the deload-aware progress fraction while the oscillation
/// phase uses the nominal week, so deload weeks still advance the wave.
#[must_use]
pub fn compute(
    base: TrainingLoad,
    context: &WeekContext,
    amplitude: f64,
    period: f64,
) -> TrainingLoad {
    let fraction = context.progress_fraction();
    let phase = TAU * (f64::from(context.week) - 1.0) / period;

    TrainingLoad::new(
        toward_ceiling(base.intensity, fraction) + amplitude * phase.sin(),
        toward_ceiling(base.volume, fraction) + amplitude * phase.cos(),
    )
}
