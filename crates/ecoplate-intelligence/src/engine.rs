// ABOUTME: Recommendation engine facade tying curation, matching, and ranking together
// ABOUTME: Holds the engine configuration and runs match -> rank -> cap per search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EngineConfig;
use crate::curator::{curate_with_report, CurationReport};
use crate::matcher::match_candidates;
use crate::ranking::rank;
use ecoplate_core::models::{RawRecipe, Recipe, SearchQuery, TestGroup};
use rand::RngCore;
use tracing::debug;

/// Recommendation engine with its configuration
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine from environment configuration, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(EngineConfig::load_or_default())
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Curate a raw corpus with this engine's scoring configuration
    #[must_use]
    pub fn curate(&self, raw_recipes: &[RawRecipe]) -> CurationReport {
        curate_with_report(raw_recipes, &self.config.scoring)
    }

    /// Recommend recipes for a query, ordered for the participant's arm
    ///
    /// Every tier candidate is ranked, then the ranked list is capped at
    /// `max_results`.
    #[must_use]
    pub fn recommend(
        &self,
        corpus: &[Recipe],
        query: &SearchQuery,
        group: TestGroup,
        rng: &mut dyn RngCore,
    ) -> Vec<Recipe> {
        let candidates = match_candidates(corpus, query, &self.config.matching)
            .into_iter()
            .map(|candidate| candidate.recipe)
            .collect();
        let mut ranked = rank(candidates, group, &self.config.ranking, rng);
        ranked.truncate(self.config.matching.max_results);
        debug!(
            group = %group,
            results = ranked.len(),
            "Recommendations ranked"
        );
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoplate_core::models::Category;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn recipe(id: i64, ingredients: &str, index: f64) -> Recipe {
        Recipe {
            recipe_id: id,
            name: format!("Recipe {id}"),
            ingredients: ingredients.to_owned(),
            env_score: 20.0,
            nutri_score: 40.0,
            sustainability_index: index,
            category: Category::Other,
            category_icon: Category::Other.icon().to_owned(),
        }
    }

    #[test]
    fn test_recommend_ranks_by_sustainability_for_group_b() {
        let engine = RecommendationEngine::default();
        let corpus = vec![
            recipe(1, "hagyma", 40.0),
            recipe(2, "hagyma, répa", 80.0),
            recipe(3, "hagyma, só", 60.0),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ranked = engine.recommend(&corpus, &SearchQuery::parse("hagyma"), TestGroup::B, &mut rng);
        let ids: Vec<i64> = ranked.iter().map(|r| r.recipe_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_recommend_never_exceeds_cap() {
        let engine = RecommendationEngine::default();
        let corpus: Vec<Recipe> = (1..=30).map(|id| recipe(id, "tojás", 50.0)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for group in TestGroup::ALL {
            let ranked = engine.recommend(&corpus, &SearchQuery::parse("tojás"), group, &mut rng);
            assert_eq!(ranked.len(), 10);
        }
    }

    #[test]
    fn test_cap_applies_after_ranking() {
        let engine = RecommendationEngine::default();
        let corpus: Vec<Recipe> = (1..=15)
            .map(|id| recipe(id, "hagyma, só", id as f64 * 5.0))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for group in [TestGroup::B, TestGroup::C] {
            let ranked = engine.recommend(&corpus, &SearchQuery::parse("hagyma"), group, &mut rng);
            let ids: Vec<i64> = ranked.iter().map(|r| r.recipe_id).collect();
            assert_eq!(ids, (6..=15).rev().collect::<Vec<i64>>());
        }
    }

    #[test]
    fn test_curate_uses_engine_scoring() {
        let engine = RecommendationEngine::default();
        let raw = vec![RawRecipe {
            recipeid: Some(1),
            name: Some("Joghurtos desszert".to_owned()),
            ingredients: Some("joghurt, méz".to_owned()),
            env_score: Some(12.1),
            nutri_score: Some(18.9),
            category: Some("dessert".to_owned()),
            ..RawRecipe::default()
        }];
        let report = engine.curate(&raw);
        assert_eq!(report.recipes.len(), 1);
        assert!((report.recipes[0].sustainability_index - 57.3).abs() < 1e-9);
    }
}
