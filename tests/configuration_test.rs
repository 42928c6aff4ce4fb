// ABOUTME: Integration tests for environment configuration, request validation, and error mapping
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use mesoplan::config::PlannerConfig;
use mesoplan::constants::env_config;
use mesoplan::errors::{AppError, ErrorCode, ErrorResponse};
use mesoplan::logging::{LogFormat, LoggingConfig};
use mesoplan::progression::ConfigError;
use mesoplan::{ProgressionModel, ProgressionOptions, ProgressionRequest};
use serial_test::serial;

const OPTION_VARS: [&str; 8] = [
    env_config::DELOAD_FACTOR,
    env_config::PROGRESSION_RATE,
    env_config::AMPLITUDE,
    env_config::PERIOD,
    env_config::INTENSITY_DELTA,
    env_config::VOLUME_DELTA,
    env_config::TARGET_VOLUME,
    env_config::STRICT_MODELS,
];

fn clear_option_vars() {
    for key in OPTION_VARS {
        env::remove_var(key);
    }
}

fn request(model_type: &str, duration: u32) -> ProgressionRequest {
    ProgressionRequest {
        model_type: model_type.to_owned(),
        duration,
        base_intensity: 5.0,
        base_volume: 6.0,
        options: ProgressionOptions::default(),
    }
}

// ============================================================================
// Environment configuration
// ============================================================================

#[test]
#[serial]
fn test_planner_config_defaults_without_environment() {
    clear_option_vars();

    let config = PlannerConfig::from_env();

    assert_eq!(config, PlannerConfig::default());
    assert!(!config.strict_models);
}

#[test]
#[serial]
fn test_planner_config_reads_overrides() {
    clear_option_vars();
    env::set_var(env_config::PROGRESSION_RATE, "0.1");
    env::set_var(env_config::TARGET_VOLUME, " 2.5 ");
    env::set_var(env_config::STRICT_MODELS, "true");

    let config = PlannerConfig::from_env();

    assert!((config.default_options.progression_rate - 0.1).abs() < f64::EPSILON);
    assert!((config.default_options.target_volume - 2.5).abs() < f64::EPSILON);
    assert!(config.strict_models);
    assert_eq!(config.default_options.deload_frequency, None);

    clear_option_vars();
}

#[test]
#[serial]
fn test_unparseable_environment_values_keep_defaults() {
    clear_option_vars();
    env::set_var(env_config::DELOAD_FACTOR, "eighty percent");
    env::set_var(env_config::STRICT_MODELS, "yes please");

    let config = PlannerConfig::from_env();

    assert!((config.default_options.deload_factor - 0.8).abs() < f64::EPSILON);
    assert!(!config.strict_models);

    clear_option_vars();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "mesoplan=trace");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "mesoplan=trace");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.verbose().level, "debug");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
}

// ============================================================================
// Request parsing and validation
// ============================================================================

#[test]
fn test_request_from_host_json() {
    let request = ProgressionRequest::from_json(
        r#"{
            "modelType": "realization",
            "duration": 6,
            "baseIntensity": 5,
            "baseVolume": 7,
            "options": { "targetVolume": 3, "deloadFrequency": 4 }
        }"#,
    )
    .unwrap();

    assert_eq!(request.validate().unwrap(), ProgressionModel::Realization);
    assert_eq!(request.options.deload_frequency, Some(4));

    let template = request.generate();
    assert_eq!(template.len(), 6);
}

#[test]
fn test_request_options_are_optional() {
    let request = ProgressionRequest::from_json(
        r#"{"modelType": "linear", "duration": 4, "baseIntensity": 5, "baseVolume": 5}"#,
    )
    .unwrap();

    assert_eq!(request.options, ProgressionOptions::default());
}

#[test]
fn test_request_from_malformed_json() {
    let error = ProgressionRequest::from_json(r#"{"modelType": "linear"}"#).unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
fn test_lenient_request_falls_back_to_linear() {
    let request = request("peaking", 4);

    assert_eq!(request.model(), ProgressionModel::Linear);
    assert!(matches!(
        request.validate(),
        Err(ConfigError::UnknownModel(_))
    ));
}

#[test]
fn test_validate_rejects_out_of_range_inputs() {
    assert!(matches!(
        request("linear", 0).validate(),
        Err(ConfigError::ValueOutOfRange {
            field: "duration",
            ..
        })
    ));

    let mut too_heavy = request("linear", 4);
    too_heavy.base_intensity = 11.0;
    assert!(matches!(
        too_heavy.validate(),
        Err(ConfigError::ValueOutOfRange {
            field: "baseIntensity",
            ..
        })
    ));

    let mut late_taper = request("realization", 6);
    late_taper.options.taper_start = Some(7);
    assert!(matches!(
        late_taper.validate(),
        Err(ConfigError::ValueOutOfRange {
            field: "taperStart",
            ..
        })
    ));
}

// ============================================================================
// Error mapping
// ============================================================================

#[test]
fn test_config_errors_map_to_app_errors() {
    let unknown = AppError::from(request("wave", 4).validate().unwrap_err());
    assert_eq!(unknown.code, ErrorCode::InvalidInput);
    assert_eq!(unknown.http_status(), 400);

    let out_of_range = AppError::from(request("linear", 0).validate().unwrap_err());
    assert_eq!(out_of_range.code, ErrorCode::ValueOutOfRange);
    assert_eq!(out_of_range.details["field"], "duration");

    let parse = AppError::from(ProgressionRequest::from_json("[").unwrap_err());
    assert_eq!(parse.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_error_response_envelope() {
    let error = AppError::from(request("linear", 0).validate().unwrap_err());
    let json = serde_json::to_value(ErrorResponse::from(error)).unwrap();

    assert_eq!(json["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(json["error"]["details"]["field"], "duration");
}
