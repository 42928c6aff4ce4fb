// ABOUTME: Self-contained template request as sent by the host application
// ABOUTME: Bundles model name, block length, base load, and options with strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mesoplan_core::constants::scale;
use serde::{Deserialize, Serialize};

use crate::algorithms::ProgressionModel;
use crate::error::ConfigError;
use crate::options::ProgressionOptions;
use crate::template::{ProgressionTemplate, TemplateGenerator};

/// Everything needed to generate one template
///
/// Field names follow the host's JSON (`modelType`, `baseIntensity`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionRequest {
    /// Model name; unknown names fall back to linear unless validated
    pub model_type: String,
    /// Block length in weeks
    pub duration: u32,
    /// Starting intensity on the 1-10 scale
    pub base_intensity: f64,
    /// Starting volume on the 1-10 scale
    pub base_volume: f64,
    /// Model parameters and deload cadence
    #[serde(default)]
    pub options: ProgressionOptions,
}

impl ProgressionRequest {
    /// Parse a request from JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed or misses a
    /// required field.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Model to run, with the lenient linear fallback
    #[must_use]
    pub fn model(&self) -> ProgressionModel {
        ProgressionModel::from_name_or_default(&self.model_type)
    }

    /// Check the request for hosts that reject questionable input
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownModel` for an unrecognised model name and
    /// `ConfigError::ValueOutOfRange` for a zero duration, base values outside
    /// the 1-10 scale, or invalid options.
    pub fn validate(&self) -> Result<ProgressionModel, ConfigError> {
        let model = self.model_type.parse::<ProgressionModel>()?;

        if self.duration == 0 {
            return Err(ConfigError::out_of_range("duration", "must be at least 1 week"));
        }
        for (field, value) in [
            ("baseIntensity", self.base_intensity),
            ("baseVolume", self.base_volume),
        ] {
            if !(scale::MIN..=scale::MAX).contains(&value) {
                return Err(ConfigError::out_of_range(
                    field,
                    format!("must be between {} and {}, got {value}", scale::MIN, scale::MAX),
                ));
            }
        }
        self.options.validate_for_duration(self.duration)?;

        Ok(model)
    }

    /// Generate the template with the lenient model fallback
    #[must_use]
    pub fn generate(&self) -> ProgressionTemplate {
        TemplateGenerator::new(
            self.duration,
            self.base_intensity,
            self.base_volume,
            self.options,
        )
        .generate(self.model())
    }
}
