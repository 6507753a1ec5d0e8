// ABOUTME: Main library entry point for the Ecoplate recipe experiment harness
// ABOUTME: Caller side of the engine: config, logging, corpus loading, persistence, and view models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ecoplate
//!
//! An A/B/C experiment harness that recommends recipes for an ingredient
//! query, varies the presentation by the participant's experiment arm, and
//! logs the participant's final choice.
//!
//! The recommendation engine itself lives in `ecoplate-intelligence` and is
//! pure. This crate supplies what the engine treats as external:
//!
//! - **Config**: environment-driven application settings
//! - **Logging**: structured `tracing` output on stderr
//! - **Corpus**: HTTP/file/built-in sources with fail-open fallback
//! - **Storage**: key-value persistence of the participant, choice log, and pending search
//! - **Registration**: participant ids and arm assignment
//! - **View model**: per-arm recipe cards
//! - **Context**: the explicit corpus/user/engine bundle threaded through each action
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ecoplate::corpus::{load_corpus, source_from_config};
//! use ecoplate::config::AppConfig;
//! use ecoplate_intelligence::RecommendationEngine;
//!
//! #[tokio::main]
//! async fn main() -> ecoplate_core::AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let engine = RecommendationEngine::from_env();
//!     let source = source_from_config(&config)?;
//!     let corpus = load_corpus(source.as_ref(), &engine).await;
//!     println!("{} recipes loaded", corpus.recipes.len());
//!     Ok(())
//! }
//! ```

/// Application configuration from environment
pub mod config;

/// Explicit experiment context and search outcomes
pub mod context;

/// Recipe corpus sources and fail-open loading
pub mod corpus;

/// Structured logging setup and experiment event logging
pub mod logging;

/// Participant registration
pub mod registration;

/// Key-value persistence of experiment state
pub mod storage;

/// Per-arm presentation cards
pub mod view_model;

pub use ecoplate_core::{AppError, AppResult, ErrorCode};
