// ABOUTME: Weekly progression template generation across a whole training block
// ABOUTME: Runs the selected model for every week, rounds to whole scale points, and compares models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Template generation.
//!
//! A [`ProgressionTemplate`] holds one [`WeekPrescription`] per week of the block,
//! ordered by week. Values are rounded with [`f64::round`] (half away from
//! zero). Rounding happens after clamping, so every prescription lies in 1..=10.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::algorithms::{ProgressionModel, ProgressionStrategy, WeekContext};
use crate::options::ProgressionOptions;
use crate::scale::TrainingLoad;

/// Rounded prescription for a single week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekPrescription {
    /// 1-based week within the block
    pub week: u32,
    /// Intensity, 1..=10
    pub intensity: u8,
    /// Volume, 1..=10
    pub volume: u8,
}

impl WeekPrescription {
    /// Round a clamped load to whole scale points
    #[must_use]
    pub fn from_load(week: u32, load: TrainingLoad) -> Self {
        let load = load.clamped();
        Self {
            week,
            intensity: load.intensity.round() as u8,
            volume: load.volume.round() as u8,
        }
    }
}

/// Ordered weekly prescriptions for a training block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressionTemplate {
    weeks: Vec<WeekPrescription>,
}

impl ProgressionTemplate {
    /// Number of weeks
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Whether the template has no weeks (zero-length block)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Prescriptions in week order
    #[must_use]
    pub fn weeks(&self) -> &[WeekPrescription] {
        &self.weeks
    }

    /// Prescription for a 1-based `week`
    #[must_use]
    pub fn get(&self, week: u32) -> Option<&WeekPrescription> {
        let index = usize::try_from(week.checked_sub(1)?).ok()?;
        self.weeks.get(index)
    }

    /// Highest prescribed intensity
    #[must_use]
    pub fn peak_intensity(&self) -> Option<u8> {
        self.weeks.iter().map(|week| week.intensity).max()
    }

    /// Mean intensity over the block
    #[must_use]
    pub fn average_intensity(&self) -> Option<f64> {
        self.average(|week| week.intensity)
    }

    /// Mean volume over the block
    #[must_use]
    pub fn average_volume(&self) -> Option<f64> {
        self.average(|week| week.volume)
    }

    fn average(&self, value: impl Fn(&WeekPrescription) -> u8) -> Option<f64> {
        if self.weeks.is_empty() {
            return None;
        }
        let total: u32 = self.weeks.iter().map(|week| u32::from(value(week))).sum();
        Some(f64::from(total) / self.weeks.len() as f64)
    }

    /// Consume the template, returning the prescriptions
    #[must_use]
    pub fn into_weeks(self) -> Vec<WeekPrescription> {
        self.weeks
    }
}

impl IntoIterator for ProgressionTemplate {
    type Item = WeekPrescription;
    type IntoIter = std::vec::IntoIter<WeekPrescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProgressionTemplate {
    type Item = &'a WeekPrescription;
    type IntoIter = std::slice::Iter<'a, WeekPrescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}

/// Generates templates for one block (length, base load, options)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateGenerator {
    duration: u32,
    base: TrainingLoad,
    options: ProgressionOptions,
}

impl TemplateGenerator {
    /// Create a generator for a `duration`-week block
    #[must_use]
    pub const fn new(
        duration: u32,
        base_intensity: f64,
        base_volume: f64,
        options: ProgressionOptions,
    ) -> Self {
        Self {
            duration,
            base: TrainingLoad::new(base_intensity, base_volume),
            options,
        }
    }

    /// Block length in weeks
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Options the generator was built with
    #[must_use]
    pub const fn options(&self) -> &ProgressionOptions {
        &self.options
    }

    /// Template for one of the built-in models
    #[must_use]
    pub fn generate(&self, model: ProgressionModel) -> ProgressionTemplate {
        let template = self.generate_with(&model.algorithm(&self.options));
        debug!(
            model = %model,
            weeks = template.len(),
            peak_intensity = ?template.peak_intensity(),
            "Generated progression template"
        );
        template
    }

    /// Template for any strategy, including caller-defined ones
    pub fn generate_with<S>(&self, strategy: &S) -> ProgressionTemplate
    where
        S: ProgressionStrategy + ?Sized,
    {
        let deload = self.options.deload_schedule();
        let weeks = (1..=self.duration)
            .map(|week| {
                let context = WeekContext::new(week, self.duration, deload);
                let load = strategy.prescribe(self.base, &context);
                trace!(
                    week,
                    intensity = load.intensity,
                    volume = load.volume,
                    deload = deload.is_deload_week(week),
                    "Week prescribed"
                );
                WeekPrescription::from_load(week, load)
            })
            .collect();

        ProgressionTemplate { weeks }
    }

    /// Templates for every model, in [`ProgressionModel::ALL`] order
    #[must_use]
    pub fn compare_models(&self) -> Vec<(ProgressionModel, ProgressionTemplate)> {
        ProgressionModel::ALL
            .par_iter()
            .map(|&model| (model, self.generate(model)))
            .collect()
    }
}

/// Generate the weekly template for the model named `model_type`
///
/// Unknown names silently use the linear model. This function never fails:
/// degenerate inputs are absorbed by denominator guards and clamping, and a
/// `duration` of 0 yields an empty template.
///
/// ```rust
/// use mesoplan_progression::{generate_progression_template, ProgressionOptions};
///
/// let template = generate_progression_template("linear", 4, 5.0, 5.0, &ProgressionOptions::default());
/// let intensities: Vec<u8> = template.weeks().iter().map(|w| w.intensity).collect();
/// assert_eq!(intensities, vec![5, 5, 6, 6]);
/// ```
#[must_use]
pub fn generate_progression_template(
    model_type: &str,
    duration: u32,
    base_intensity: f64,
    base_volume: f64,
    options: &ProgressionOptions,
) -> ProgressionTemplate {
    TemplateGenerator::new(duration, base_intensity, base_volume, *options)
        .generate(ProgressionModel::from_name_or_default(model_type))
}

/// Generate templates for all five models with identical inputs
#[must_use]
pub fn compare_models(
    duration: u32,
    base_intensity: f64,
    base_volume: f64,
    options: &ProgressionOptions,
) -> Vec<(ProgressionModel, ProgressionTemplate)> {
    TemplateGenerator::new(duration, base_intensity, base_volume, *options).compare_models()
}
