// ABOUTME: Core types and constants for the Mesoplan periodization engine
// ABOUTME: Foundation crate with error handling and training-scale constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mesoplan Core
//!
//! Foundation crate providing shared types and constants for the Mesoplan
//! progression engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scale bounds, model defaults, and environment variable names

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
