// ABOUTME: Application configuration for the harness: corpus origin, data dir, HTTP timeout, seeding
// ABOUTME: Loaded from environment variables with defaults and validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application configuration
//!
//! Engine tunables live in `ecoplate_intelligence::EngineConfig`; this module
//! covers only the caller side.

use ecoplate_core::constants::service_names;
use ecoplate_core::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Default HTTP timeout for the corpus fetch
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Caller-side configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote corpus URL (HTTP GET, JSON body)
    pub corpus_url: Option<String>,
    /// Local corpus file, used when no URL is configured
    pub corpus_path: Option<PathBuf>,
    /// Directory holding persisted user and choice data
    pub data_dir: PathBuf,
    /// Timeout for the corpus fetch
    pub http_timeout: Duration,
    /// Seed for the control arm's shuffle, random when unset
    pub shuffle_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_url: None,
            corpus_path: None,
            data_dir: default_data_dir(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            shuffle_seed: None,
        }
    }
}

/// Platform data directory for the harness, or `./.ecoplate` when unknown
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{}", service_names::ECOPLATE)),
        |dir| dir.join(service_names::ECOPLATE),
    )
}

/// Non-empty value of an environment variable
fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_env<T: FromStr>(key: &str) -> AppResult<Option<T>> {
    env_value(key)
        .map(|value| {
            value
                .parse()
                .map_err(|_| AppError::config_invalid(format!("Invalid {key} value: {value}")))
        })
        .transpose()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable cannot be parsed or validation fails
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            corpus_url: env_value("ECOPLATE_CORPUS_URL"),
            corpus_path: env_value("ECOPLATE_CORPUS_PATH").map(PathBuf::from),
            data_dir: env_value("ECOPLATE_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            http_timeout: parse_env("ECOPLATE_HTTP_TIMEOUT_SECS")?
                .map_or(defaults.http_timeout, Duration::from_secs),
            shuffle_seed: parse_env("ECOPLATE_SHUFFLE_SEED")?,
        };
        config.validate()?;
        info!("{}", config.summary());
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first invalid setting
    pub fn validate(&self) -> AppResult<()> {
        if self.http_timeout.is_zero() {
            return Err(AppError::config_invalid(
                "ECOPLATE_HTTP_TIMEOUT_SECS must be at least 1",
            ));
        }
        if let Some(url) = &self.corpus_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::config_invalid(format!(
                    "ECOPLATE_CORPUS_URL must be an http(s) URL: {url}"
                )));
            }
        }
        Ok(())
    }

    /// One-line configuration summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Ecoplate configuration: corpus_url={}, corpus_path={}, data_dir={}, http_timeout={}s, shuffle_seed={}",
            self.corpus_url.as_deref().unwrap_or("-"),
            self.corpus_path
                .as_ref()
                .map_or_else(|| "-".to_owned(), |path| path.display().to_string()),
            self.data_dir.display(),
            self.http_timeout.as_secs(),
            self.shuffle_seed
                .map_or_else(|| "-".to_owned(), |seed| seed.to_string()),
        )
    }
}
