// ABOUTME: Explicit per-participant experiment context: corpus, current user, and engine
// ABOUTME: Runs searches into presentable outcomes and turns selections into choice records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::ExperimentLogger;
use crate::view_model::{build_cards, RecipeCard};
use chrono::{DateTime, Utc};
use ecoplate_core::models::{ChoiceRecord, Recipe, RecipeId, SearchQuery, User};
use ecoplate_core::{AppError, AppResult};
use ecoplate_intelligence::{record_at, RecommendationEngine, Selection};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Results shown for one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Parsed query
    pub query: SearchQuery,
    /// Ranked recipes in display order
    pub recipes: Vec<Recipe>,
    /// Cards for the participant's arm, parallel to `recipes`
    pub cards: Vec<RecipeCard>,
    /// When the results were shown
    pub started_at: DateTime<Utc>,
}

impl SearchOutcome {
    /// 1-based rank of a recipe in this outcome
    #[must_use]
    pub fn rank_of(&self, recipe_id: RecipeId) -> Option<usize> {
        self.recipes
            .iter()
            .position(|recipe| recipe.recipe_id == recipe_id)
            .map(|index| index + 1)
    }

    /// Recipe shown at a 1-based rank
    #[must_use]
    pub fn recipe_at(&self, rank: usize) -> Option<&Recipe> {
        rank.checked_sub(1).and_then(|index| self.recipes.get(index))
    }
}

/// Corpus, participant, and engine for one process
#[derive(Debug, Clone)]
pub struct ExperimentContext {
    corpus: Vec<Recipe>,
    user: User,
    engine: RecommendationEngine,
}

impl ExperimentContext {
    /// Create a context
    #[must_use]
    pub const fn new(corpus: Vec<Recipe>, user: User, engine: RecommendationEngine) -> Self {
        Self {
            corpus,
            user,
            engine,
        }
    }

    /// Curated corpus
    #[must_use]
    pub fn corpus(&self) -> &[Recipe] {
        &self.corpus
    }

    /// Current participant
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Recommendation engine
    #[must_use]
    pub const fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Run a search for the current participant
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the query has no terms
    pub fn search(
        &self,
        raw_query: &str,
        rng: &mut dyn RngCore,
        now: DateTime<Utc>,
    ) -> AppResult<SearchOutcome> {
        let query = SearchQuery::parse(raw_query);
        if query.is_empty() {
            return Err(AppError::invalid_input("Enter at least one ingredient"));
        }

        let group = self.user.test_group;
        let recipes = self.engine.recommend(&self.corpus, &query, group, rng);
        let cards = build_cards(&recipes, group);
        ExperimentLogger::log_search(&self.user.id, group, query.terms.len(), recipes.len());

        Ok(SearchOutcome {
            query,
            recipes,
            cards,
            started_at: now,
        })
    }

    /// Record the selection of `recipe_id` from `outcome`
    ///
    /// An id that was not shown gets rank 0; one that is not in the corpus
    /// either gets zeroed score fields.
    #[must_use]
    pub fn select(
        &self,
        outcome: &SearchOutcome,
        recipe_id: RecipeId,
        now: DateTime<Utc>,
    ) -> ChoiceRecord {
        let rank = outcome.rank_of(recipe_id).unwrap_or(0);
        let chosen = outcome
            .recipes
            .iter()
            .chain(&self.corpus)
            .find(|recipe| recipe.recipe_id == recipe_id);
        let selection = Selection {
            recipe_id,
            rank,
            search_ingredients: &outcome.query.raw,
            shown_at: Some(outcome.started_at),
        };
        let choice = record_at(&self.user, chosen, &selection, now);
        ExperimentLogger::log_choice(
            &choice.user_id,
            choice.recipe_id,
            choice.rank,
            choice.decision_time_seconds,
        );
        choice
    }

    /// Record the selection of the recipe shown at a 1-based rank
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing was shown at `rank`
    pub fn select_rank(
        &self,
        outcome: &SearchOutcome,
        rank: usize,
        now: DateTime<Utc>,
    ) -> AppResult<ChoiceRecord> {
        let recipe_id = outcome
            .recipe_at(rank)
            .map(|recipe| recipe.recipe_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Recipe at rank {rank}"))
                    .with_resource_id(rank.to_string())
            })?;
        Ok(self.select(outcome, recipe_id, now))
    }
}
