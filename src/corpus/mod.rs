// ABOUTME: Corpus loading with curation and fail-open fallback to the built-in recipes
// ABOUTME: Chooses the configured source, curates the records, and reports which origin was used
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Corpus Loading
//!
//! Loading never fails. A fetch error, an unparsable body, or a corpus that
//! curates down to nothing is logged and replaced by the built-in corpus.

mod fallback;
mod source;

pub use fallback::fallback_recipes;
pub use source::{
    parse_corpus, CorpusSource, FileCorpusSource, HttpCorpusSource, RawCorpus,
    StaticCorpusSource,
};

use crate::config::AppConfig;
use ecoplate_core::models::Recipe;
use ecoplate_core::AppResult;
use ecoplate_intelligence::RecommendationEngine;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where the working corpus came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "origin")]
pub enum CorpusOrigin {
    /// Remote corpus over HTTP
    Http {
        /// Requested URL
        url: String,
    },
    /// Local JSON file
    File {
        /// File path
        path: PathBuf,
    },
    /// Built-in corpus, no source configured
    Builtin,
    /// Built-in corpus substituted after a failed load
    Fallback {
        /// Why the configured source was not used
        reason: String,
    },
}

/// Curated corpus ready for searching
#[derive(Debug, Clone, Serialize)]
pub struct LoadedCorpus {
    /// Where the recipes came from
    pub origin: CorpusOrigin,
    /// Curated recipes
    pub recipes: Vec<Recipe>,
    /// Number of raw records that were malformed or dropped by curation
    pub rejected: usize,
}

/// Source selected by configuration: URL, then file, then built-in records
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed
pub fn source_from_config(config: &AppConfig) -> AppResult<Box<dyn CorpusSource>> {
    if let Some(url) = &config.corpus_url {
        return Ok(Box::new(HttpCorpusSource::new(
            url.clone(),
            config.http_timeout,
        )?));
    }
    if let Some(path) = &config.corpus_path {
        return Ok(Box::new(FileCorpusSource::new(path.clone())));
    }
    Ok(Box::new(StaticCorpusSource::new(fallback_recipes())))
}

fn fallback_corpus(engine: &RecommendationEngine, reason: String) -> LoadedCorpus {
    warn!(reason = %reason, "Using built-in fallback corpus");
    let report = engine.curate(&fallback_recipes());
    LoadedCorpus {
        origin: CorpusOrigin::Fallback { reason },
        recipes: report.recipes,
        rejected: report.rejected.len(),
    }
}

/// Load and curate the corpus from `source`, falling back to the built-in corpus
pub async fn load_corpus(source: &dyn CorpusSource, engine: &RecommendationEngine) -> LoadedCorpus {
    let origin = source.origin();
    let raw = match source.fetch().await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, origin = ?origin, "Corpus load failed");
            return fallback_corpus(engine, e.to_string());
        }
    };

    let report = engine.curate(&raw.records);
    if report.recipes.is_empty() {
        return fallback_corpus(
            engine,
            format!(
                "no valid recipes among {} records",
                raw.records.len() + raw.malformed
            ),
        );
    }

    let rejected = report.rejected.len() + raw.malformed;
    info!(
        origin = ?origin,
        recipes = report.recipes.len(),
        rejected,
        "Recipe corpus loaded"
    );
    LoadedCorpus {
        origin,
        recipes: report.recipes,
        rejected,
    }
}
