// ABOUTME: Accumulation block: high volume ramp with a modest, front-loaded intensity gain
// ABOUTME: Intensity rises with the square root of progress; volume ramps linearly to the ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::{toward_ceiling, WeekContext};
use crate::scale::TrainingLoad;

/// Raw accumulation load
#[must_use]
pub fn compute(base: TrainingLoad, context: &WeekContext, intensity_delta: f64) -> TrainingLoad {
    let fraction = context.progress_fraction();

    TrainingLoad::new(
        base.intensity + intensity_delta * fraction.sqrt(),
        toward_ceiling(base.volume, fraction),
    )
}
