// ABOUTME: Command implementations for the Ecoplate CLI
// ABOUTME: Each command reads and writes experiment state and returns a JSON document to print
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use ecoplate::config::AppConfig;
use ecoplate::context::ExperimentContext;
use ecoplate::corpus::{load_corpus, source_from_config, LoadedCorpus};
use ecoplate::registration::register_user;
use ecoplate::storage::{ExperimentStore, JsonFileStore};
use ecoplate_core::models::User;
use ecoplate_core::{AppError, AppResult};
use ecoplate_intelligence::RecommendationEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};
use tracing::info;

/// State shared by all commands
pub struct Session {
    config: AppConfig,
    engine: RecommendationEngine,
    store: ExperimentStore<JsonFileStore>,
}

impl Session {
    pub fn new(config: AppConfig, engine: RecommendationEngine) -> Self {
        let store = ExperimentStore::new(JsonFileStore::new(config.data_dir.clone()));
        Self {
            config,
            engine,
            store,
        }
    }

    fn rng(&self) -> ChaCha8Rng {
        self.config
            .shuffle_seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }

    fn registered_user(&mut self) -> AppResult<User> {
        self.store.load_user()?.ok_or_else(|| {
            AppError::invalid_input("No participant registered; run `ecoplate-cli register` first")
        })
    }

    async fn load_corpus(&self) -> AppResult<LoadedCorpus> {
        let source = source_from_config(&self.config)?;
        Ok(load_corpus(source.as_ref(), &self.engine).await)
    }

    async fn context(&mut self) -> AppResult<ExperimentContext> {
        let user = self.registered_user()?;
        let corpus = self.load_corpus().await?;
        Ok(ExperimentContext::new(
            corpus.recipes,
            user,
            self.engine.clone(),
        ))
    }

    pub fn register(&mut self, email: &str, force: bool) -> AppResult<Value> {
        if let Some(existing) = self.store.load_user()? {
            if !force {
                return Err(AppError::invalid_input(format!(
                    "Participant {} is already registered; pass --force to replace",
                    existing.id
                )));
            }
            info!(user_id = %existing.id, "Replacing registered participant");
        }

        let user = register_user(email, &mut self.rng(), Utc::now())?;
        self.store.save_user(&user)?;
        self.store.clear_pending_search()?;
        Ok(json!({
            "user": user,
            "groupDescription": user.test_group.description(),
        }))
    }

    pub fn status(&mut self) -> AppResult<Value> {
        let user = self.store.load_user()?;
        let choices = self.store.load_choices()?;
        let pending = self.store.load_pending_search()?;
        Ok(json!({
            "groupDescription": user.as_ref().map(|u| u.test_group.description()),
            "user": user,
            "choices": choices.len(),
            "pendingSearch": pending.map(|outcome| outcome.query.raw),
        }))
    }

    pub async fn search(&mut self, raw_query: &str) -> AppResult<Value> {
        let context = self.context().await?;
        let outcome = context.search(raw_query, &mut self.rng(), Utc::now())?;
        self.store.save_pending_search(&outcome)?;
        Ok(json!({
            "query": outcome.query.terms,
            "group": context.user().test_group,
            "results": outcome.cards,
        }))
    }

    pub async fn choose(&mut self, rank: usize) -> AppResult<Value> {
        let outcome = self
            .store
            .load_pending_search()?
            .ok_or_else(|| AppError::not_found("Pending search; run `ecoplate-cli search` first"))?;
        let context = self.context().await?;
        let choice = context.select_rank(&outcome, rank, Utc::now())?;
        self.store.append_choice(&choice)?;
        self.store.clear_pending_search()?;
        Ok(json!({ "choice": choice }))
    }

    pub fn choices(&mut self) -> AppResult<Value> {
        let choices = self.store.load_choices()?;
        Ok(json!({ "count": choices.len(), "choices": choices }))
    }

    pub async fn corpus(&self) -> AppResult<Value> {
        let corpus = self.load_corpus().await?;
        Ok(serde_json::to_value(&corpus)?)
    }

    pub fn reset(&mut self) -> AppResult<Value> {
        self.store.clear_user()?;
        self.store.clear_choices()?;
        self.store.clear_pending_search()?;
        Ok(json!({ "reset": true }))
    }
}
