// ABOUTME: The 1-10 intensity/volume scale and the clamping applied to every output
// ABOUTME: Defines TrainingLoad, the (intensity, volume) pair flowing through the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mesoplan_core::constants::scale;
use serde::{Deserialize, Serialize};

/// Bound `value` into `[min, max]`.
///
/// NaN collapses to `min`; `f64::max` discards a NaN operand. This keeps the
/// output inside the scale even for degenerate parameters such as `period = 0`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Bound `value` into the display scale `[1, 10]`
#[must_use]
pub fn clamp_scale(value: f64) -> f64 {
    clamp(value, scale::MIN, scale::MAX)
}

/// Prescribed intensity and volume for one week, on the 1-10 scale once clamped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoad {
    /// Relative intensity (load, effort)
    pub intensity: f64,
    /// Relative volume (sets, reps, time)
    pub volume: f64,
}

impl TrainingLoad {
    /// Create a load from raw values
    #[must_use]
    pub const fn new(intensity: f64, volume: f64) -> Self {
        Self { intensity, volume }
    }

    /// Multiply both values by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.intensity * factor, self.volume * factor)
    }

    /// Bound both values into the display scale
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(clamp_scale(self.intensity), clamp_scale(self.volume))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert!((clamp_scale(11.3) - 10.0).abs() < f64::EPSILON);
        assert!((clamp_scale(-2.0) - 1.0).abs() < f64::EPSILON);
        assert!((clamp_scale(4.25) - 4.25).abs() < f64::EPSILON);
        assert!((clamp(7.0, 2.0, 5.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_nan_falls_to_min() {
        assert!((clamp_scale(f64::NAN) - 1.0).abs() < f64::EPSILON);
        assert!((clamp_scale(f64::INFINITY) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaled_then_clamped() {
        let load = TrainingLoad::new(12.0, 2.0).scaled(0.5).clamped();
        assert_eq!(load, TrainingLoad::new(6.0, 1.0));
    }
}
