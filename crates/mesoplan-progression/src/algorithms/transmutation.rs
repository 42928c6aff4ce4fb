// ABOUTME: Transmutation block: intensity climbs steeply late in the block, volume shifts slightly
// ABOUTME: Both values follow a progress^1.5 ramp; volume delta may be negative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mesoplan_core::constants::curves;

use crate::algorithms::{toward_ceiling, WeekContext};
use crate::scale::TrainingLoad;

/// Raw transmutation load
#[must_use]
pub fn compute(base: TrainingLoad, context: &WeekContext, volume_delta: f64) -> TrainingLoad {
    let ramp = context
        .progress_fraction()
        .powf(curves::TRANSMUTATION_EXPONENT);

    TrainingLoad::new(
        toward_ceiling(base.intensity, ramp),
        base.volume + volume_delta * ramp,
    )
}
