// ABOUTME: Recipe recommendation engine for the Ecoplate A/B/C experiment
// ABOUTME: Group assignment, curation, tiered matching, ranking, explanations, and choice records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ecoplate Intelligence
//!
//! The recommendation engine behind the Ecoplate recipe experiment. Every
//! operation is synchronous and free of I/O; the only randomness (the control
//! arm's shuffle) comes from an injected `RngCore`.
//!
//! Data flow per search:
//!
//! ```text
//! raw corpus -> curator -> curated corpus
//! query -> matcher(curated corpus) -> ranking(group) -> <= max_results recipes
//! selection -> choice_recorder -> ChoiceRecord
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Deterministic experiment arm assignment
pub mod group_assigner;

/// Raw corpus validation, category derivation, and sustainability scoring
pub mod curator;

/// Exact, partial, and backfill ingredient matching
pub mod matcher;

/// Per-group ordering strategies
pub mod ranking;

/// Score rationale text for the explanation arm
pub mod explanation;

/// Choice record construction
pub mod choice_recorder;

/// Engine facade
pub mod engine;

pub use choice_recorder::{record, record_at, Selection};
pub use config::{ConfigError, EngineConfig, RankingPolicy};
pub use curator::{curate, curate_with_report, CurationReport};
pub use engine::RecommendationEngine;
pub use explanation::{explain, explain_detailed, Explanation};
pub use group_assigner::assign_group;
pub use matcher::{match_candidates, match_recipes};
pub use ranking::{rank, RankingStrategy};
