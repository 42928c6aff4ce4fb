// ABOUTME: Configuration management module for engine defaults and runtime switches
// ABOUTME: Environment-only configuration: no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Mesoplan
//!
//! - **Environment**: option defaults and strictness from environment variables

/// Environment configuration
pub mod environment;

pub use environment::PlannerConfig;
