// ABOUTME: Corpus sources: HTTP GET, local JSON file, and in-memory records
// ABOUTME: Parses either a bare JSON array of recipes or an object with a "recipes" array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CorpusOrigin;
use async_trait::async_trait;
use ecoplate_core::models::RawRecipe;
use ecoplate_core::{AppError, AppResult};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::{debug, warn};

/// Service name used in external-service errors
const CORPUS_SERVICE: &str = "Recipe corpus";

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusDocument {
    Bare(Vec<Value>),
    Wrapped { recipes: Vec<Value> },
}

/// Records read from one corpus document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCorpus {
    /// Elements that read as recipe records
    pub records: Vec<RawRecipe>,
    /// Elements that could not be read as a recipe record
    pub malformed: usize,
}

impl From<Vec<RawRecipe>> for RawCorpus {
    fn from(records: Vec<RawRecipe>) -> Self {
        Self {
            records,
            malformed: 0,
        }
    }
}

/// Parse a corpus JSON document
///
/// Each array element is read on its own; an element that is not a usable
/// recipe record is counted in `malformed` and skipped.
///
/// # Errors
///
/// Returns `SerializationError` when the body is neither an array nor an
/// object with a `recipes` array
pub fn parse_corpus(body: &str) -> AppResult<RawCorpus> {
    let document: CorpusDocument = serde_json::from_str(body).map_err(|e| {
        AppError::serialization(format!("Invalid corpus document: {e}")).with_source(e)
    })?;
    let (CorpusDocument::Bare(elements) | CorpusDocument::Wrapped { recipes: elements }) = document;

    let mut corpus = RawCorpus::default();
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<RawRecipe>(element) {
            Ok(record) => corpus.records.push(record),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed corpus record");
                corpus.malformed += 1;
            }
        }
    }
    Ok(corpus)
}

/// Where raw recipe records come from
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Origin reported when this source loads successfully
    fn origin(&self) -> CorpusOrigin;

    /// Fetch the raw records
    ///
    /// Malformed elements of an otherwise valid document are counted, not
    /// fatal.
    ///
    /// # Errors
    ///
    /// Returns an error when the records cannot be fetched or parsed
    async fn fetch(&self) -> AppResult<RawCorpus>;
}

/// Corpus fetched with a single HTTP GET
pub struct HttpCorpusSource {
    url: String,
    http_client: reqwest::Client,
}

impl HttpCorpusSource {
    /// Create a source for `url` with a request timeout
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the HTTP client cannot be constructed
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            url: url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl CorpusSource for HttpCorpusSource {
    fn origin(&self) -> CorpusOrigin {
        CorpusOrigin::Http {
            url: self.url.clone(),
        }
    }

    async fn fetch(&self) -> AppResult<RawCorpus> {
        debug!(url = %self.url, "Fetching recipe corpus");
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(CORPUS_SERVICE, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                AppError::external_service(CORPUS_SERVICE, format!("HTTP {status}"))
                    .with_details(json!({ "url": self.url, "status": status.as_u16() })),
            );
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::external_service(CORPUS_SERVICE, e.to_string()))?;
        parse_corpus(&body)
    }
}

/// Corpus read from a local JSON file
pub struct FileCorpusSource {
    path: PathBuf,
}

impl FileCorpusSource {
    /// Create a source reading `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for FileCorpusSource {
    fn origin(&self) -> CorpusOrigin {
        CorpusOrigin::File {
            path: self.path.clone(),
        }
    }

    async fn fetch(&self) -> AppResult<RawCorpus> {
        debug!(path = %self.path.display(), "Reading recipe corpus");
        let body = fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to read corpus {}: {e}",
                self.path.display()
            ))
            .with_source(e)
        })?;
        parse_corpus(&body)
    }
}

/// Corpus held in memory
pub struct StaticCorpusSource {
    recipes: Vec<RawRecipe>,
}

impl StaticCorpusSource {
    /// Create a source serving `recipes`
    #[must_use]
    pub const fn new(recipes: Vec<RawRecipe>) -> Self {
        Self { recipes }
    }
}

#[async_trait]
impl CorpusSource for StaticCorpusSource {
    fn origin(&self) -> CorpusOrigin {
        CorpusOrigin::Builtin
    }

    async fn fetch(&self) -> AppResult<RawCorpus> {
        Ok(RawCorpus::from(self.recipes.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let corpus =
            parse_corpus(r#"[{"recipeid": 1, "name": "Leves"}, {"recipeid": 2}]"#).unwrap();
        assert_eq!(corpus.records.len(), 2);
        assert_eq!(corpus.malformed, 0);
        assert_eq!(corpus.records[0].name.as_deref(), Some("Leves"));
    }

    #[test]
    fn test_parse_wrapped_object() {
        let corpus = parse_corpus(r#"{"recipes": [{"recipeid": 5}]}"#).unwrap();
        assert_eq!(corpus.records.len(), 1);
        assert_eq!(corpus.records[0].recipeid, Some(5));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_corpus(r#"{"items": []}"#).is_err());
        assert!(parse_corpus("not json").is_err());
    }

    #[test]
    fn test_bad_record_does_not_sink_the_document() {
        let corpus = parse_corpus(
            r#"[
                {"recipeid": 1, "name": "Leves", "ingredients": "víz", "env_score": 10, "nutri_score": 40},
                {"recipeid": 2, "name": "Saláta", "ingredients": "uborka", "env_score": "12.1", "nutri_score": "30"},
                {"recipeid": 3, "name": ["not", "a", "string"]},
                42
            ]"#,
        )
        .unwrap();
        let ids: Vec<Option<i64>> = corpus.records.iter().map(|r| r.recipeid).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
        assert_eq!(corpus.records[1].env_score, Some(12.1));
        assert_eq!(corpus.malformed, 2);
    }
}
