// ABOUTME: Configuration error types for the recommendation engine
// ABOUTME: Covers invalid ranges, unparsable environment values, and out-of-range settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ecoplate_core::AppError;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related settings are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights do not form a valid blend
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single setting is outside its allowed range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
