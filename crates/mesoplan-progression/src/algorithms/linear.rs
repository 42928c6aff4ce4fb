// ABOUTME: Linear periodization as compound week-over-week growth of intensity and volume
// ABOUTME: Grows from the base values at a fixed rate per effective (non-deload) week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::WeekContext;
use crate::scale::TrainingLoad;

/// Raw linear load: `base * (1 + rate)^(effective_week - 1)` on both values
///
/// Growth is counted in effective weeks, so a deload week repeats the previous
/// week's exponent instead of advancing it.
#[must_use]
pub fn compute(base: TrainingLoad, context: &WeekContext, progression_rate: f64) -> TrainingLoad {
    let effective = context.effective();
    let growth = (1.0 + progression_rate).powf(f64::from(effective.effective_week) - 1.0);
    TrainingLoad::new(base.intensity * growth, base.volume * growth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deload::DeloadSchedule;

    #[test]
    fn test_first_week_is_base() {
        let context = WeekContext::new(1, 6, DeloadSchedule::disabled());
        let load = compute(TrainingLoad::new(5.0, 6.0), &context, 0.05);
        assert!((load.intensity - 5.0).abs() < 1e-12);
        assert!((load.volume - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_compound_growth() {
        let context = WeekContext::new(3, 6, DeloadSchedule::disabled());
        let load = compute(TrainingLoad::new(5.0, 5.0), &context, 0.05);
        assert!((load.intensity - 5.5125).abs() < 1e-9);
    }

    #[test]
    fn test_deload_week_does_not_advance_growth() {
        let schedule = DeloadSchedule::every(2, 0.5);
        let base = TrainingLoad::new(5.0, 5.0);
        let week_two = compute(base, &WeekContext::new(2, 4, schedule), 0.05);
        let week_three = compute(base, &WeekContext::new(3, 4, schedule), 0.05);
        assert_eq!(week_two, week_three);
    }
}
