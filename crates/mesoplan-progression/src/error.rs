// ABOUTME: Configuration error types for progression options and requests
// ABOUTME: Defines variants for out-of-range values, unknown models, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for strict validation of progression inputs.
//!
//! Generation itself never fails; these errors only come from the opt-in
//! validation and parsing paths.

use mesoplan_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {field} {reason}")]
    ValueOutOfRange {
        /// Offending parameter
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Model name is not one of the five periodization models
    #[error(
        "Unknown progression model '{0}'. Valid options: linear, undulating, accumulation, transmutation, realization"
    )]
    UnknownModel(String),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ConfigError {
    pub(crate) fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValueOutOfRange {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::ValueOutOfRange { .. } => ErrorCode::ValueOutOfRange,
            ConfigError::UnknownModel(_) => ErrorCode::InvalidInput,
            ConfigError::Parse(_) => ErrorCode::InvalidFormat,
        };
        let details = match &error {
            ConfigError::ValueOutOfRange { field, .. } => serde_json::json!({ "field": field }),
            _ => serde_json::Value::Null,
        };
        Self::new(code, error.to_string()).with_details(details)
    }
}
