// ABOUTME: Realization (peaking) block: build, then taper volume while driving intensity to the ceiling
// ABOUTME: Guarantees the final week lands exactly on maximum intensity and the target volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Realization (peaking / taper) phase.
//!
//! The block splits at the taper week:
//!
//! - **Pre-taper** (`week < taper_week`): intensity climbs linearly to 1.7x base
//!   and volume to 1.5x base.
//! - **Taper** (`week >= taper_week`): intensity rises from 1.7x base toward the
//!   ceiling along `fraction^0.7`; volume falls from 1.5x base toward the target
//!   along a smoothstep curve (linearly when the taper spans a single step).
//! - **Final week**: exactly `(10, target_volume)`, independent of the curves.
//!
//! Unlike the other models, fractions here are measured in nominal weeks: the
//! taper is anchored to calendar weeks, so deload compression is not applied.
//! Deload weeks are still scaled by the deload schedule afterwards.

use mesoplan_core::constants::{curves, scale};

use crate::algorithms::WeekContext;
use crate::scale::TrainingLoad;

/// First week of the taper for a `block_length`-week block
///
/// An explicit, non-zero `taper_start` wins; otherwise the taper begins two
/// thirds of the way into the block (rounded).
#[must_use]
pub fn taper_week(block_length: u32, taper_start: Option<u32>) -> u32 {
    taper_start.filter(|&week| week > 0).unwrap_or_else(|| {
        (f64::from(block_length) * curves::DEFAULT_TAPER_SHARE).round() as u32
    })
}

/// Raw realization load
#[must_use]
pub fn compute(
    base: TrainingLoad,
    context: &WeekContext,
    target_volume: f64,
    taper_start: Option<u32>,
) -> TrainingLoad {
    let week = context.week;
    let block_length = context.block_length;
    let taper_week = taper_week(block_length, taper_start);

    if week < taper_week {
        return pre_taper(base, week, taper_week);
    }
    if week == block_length {
        return TrainingLoad::new(scale::MAX, target_volume);
    }
    taper(base, week, block_length, taper_week, target_volume)
}

fn pre_taper(base: TrainingLoad, week: u32, taper_week: u32) -> TrainingLoad {
    let fraction = (f64::from(week) - 1.0) / f64::from(taper_week.saturating_sub(1).max(1));

    TrainingLoad::new(
        base.intensity + base.intensity * curves::PRE_TAPER_INTENSITY_GAIN * fraction,
        base.volume + base.volume * curves::PRE_TAPER_VOLUME_GAIN * fraction,
    )
}

fn taper(
    base: TrainingLoad,
    week: u32,
    block_length: u32,
    taper_week: u32,
    target_volume: f64,
) -> TrainingLoad {
    let taper_span = f64::from(block_length) - f64::from(taper_week);
    let offset = f64::from(week) - f64::from(taper_week);
    let taper_fraction = if taper_span > 0.0 {
        offset / taper_span
    } else {
        1.0
    };

    let peak_intensity = base.intensity + base.intensity * curves::PRE_TAPER_INTENSITY_GAIN;
    let intensity = peak_intensity
        + (scale::MAX - peak_intensity) * taper_fraction.powf(curves::TAPER_INTENSITY_EXPONENT);

    let peak_volume = base.volume + base.volume * curves::PRE_TAPER_VOLUME_GAIN;
    let volume_drop = peak_volume - target_volume;
    let volume = if taper_span > 1.0 {
        let position = offset / taper_span;
        peak_volume - volume_drop * smoothstep(position)
    } else {
        peak_volume - volume_drop * taper_fraction
    };

    TrainingLoad::new(intensity, volume)
}

/// Cubic ease `3t^2 - 2t^3`
fn smoothstep(t: f64) -> f64 {
    3.0 * t.powi(2) - 2.0 * t.powi(3)
}
