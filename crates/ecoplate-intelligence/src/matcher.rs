// ABOUTME: Tiered ingredient matching over the curated corpus
// ABOUTME: Exact substring tier, prefix-based partial tier, and top-sustainability backfill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Matching
//!
//! Tiers run in order and later tiers only run when earlier ones came up short:
//!
//! - **Exact**: the lower-cased ingredient text contains a query term.
//! - **Partial**: fewer than `partial_trigger_below` exact hits. Each term of
//!   at least `partial_min_term_chars` characters is cut to its first
//!   `partial_prefix_chars` characters and searched in ingredients and name.
//! - **Backfill**: fewer than `backfill_target` hits so far. The best
//!   remaining recipes by sustainability index top the list up.
//!
//! Candidates keep first-seen order (exact before partial before backfill)
//! and are unique by id. [`match_candidates`] returns them all so the engine
//! can rank before capping; [`match_with_tiers`] and [`match_recipes`] cap
//! at `max_results` after all tiers ran.

use crate::config::MatchingConfig;
use ecoplate_core::models::{Recipe, RecipeId, SearchQuery};
use std::collections::HashSet;
use tracing::debug;

/// Tier that contributed a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// Query term found verbatim in the ingredients
    Exact,
    /// Query term prefix found in ingredients or name
    Partial,
    /// Added for sustainability to fill the list
    Backfill,
}

/// A candidate recipe with the tier that found it
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Matched recipe
    pub recipe: Recipe,
    /// Tier that matched it
    pub tier: MatchTier,
}

struct CandidateList<'a> {
    seen: HashSet<RecipeId>,
    items: Vec<(&'a Recipe, MatchTier)>,
}

impl<'a> CandidateList<'a> {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
        }
    }

    fn push(&mut self, recipe: &'a Recipe, tier: MatchTier) {
        if self.seen.insert(recipe.recipe_id) {
            self.items.push((recipe, tier));
        }
    }

    fn contains(&self, recipe: &Recipe) -> bool {
        self.seen.contains(&recipe.recipe_id)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Leading characters of each sufficiently long term
fn partial_prefixes(query: &SearchQuery, config: &MatchingConfig) -> Vec<String> {
    query
        .terms
        .iter()
        .filter(|term| term.chars().count() >= config.partial_min_term_chars)
        .map(|term| term.chars().take(config.partial_prefix_chars).collect())
        .collect()
}

/// All tier candidates for a query, uncapped
///
/// Ranking needs the whole candidate set; the result cap is applied to the
/// ranked list, not here.
#[must_use]
pub fn match_candidates(
    corpus: &[Recipe],
    query: &SearchQuery,
    config: &MatchingConfig,
) -> Vec<Candidate> {
    let mut candidates = CandidateList::new();

    for recipe in corpus {
        let ingredients = recipe.ingredients.to_lowercase();
        if query.terms.iter().any(|term| ingredients.contains(term.as_str())) {
            candidates.push(recipe, MatchTier::Exact);
        }
    }
    let exact_count = candidates.len();

    if exact_count < config.partial_trigger_below {
        let prefixes = partial_prefixes(query, config);
        if !prefixes.is_empty() {
            for recipe in corpus {
                if candidates.contains(recipe) {
                    continue;
                }
                let haystack = format!("{} {}", recipe.ingredients, recipe.name).to_lowercase();
                if prefixes.iter().any(|prefix| haystack.contains(prefix.as_str())) {
                    candidates.push(recipe, MatchTier::Partial);
                }
            }
        }
    }
    let matched_count = candidates.len();

    if matched_count < config.backfill_target {
        let mut remaining: Vec<&Recipe> = corpus
            .iter()
            .filter(|recipe| !candidates.contains(recipe))
            .collect();
        remaining.sort_by(|a, b| b.sustainability_index.total_cmp(&a.sustainability_index));
        for recipe in remaining
            .into_iter()
            .take(config.backfill_target - matched_count)
        {
            candidates.push(recipe, MatchTier::Backfill);
        }
    }

    debug!(
        terms = ?query.terms,
        exact = exact_count,
        partial = matched_count - exact_count,
        backfill = candidates.len() - matched_count,
        "Ingredient match complete"
    );

    candidates
        .items
        .into_iter()
        .map(|(recipe, tier)| Candidate {
            recipe: recipe.clone(),
            tier,
        })
        .collect()
}

/// Match a query against the corpus, keeping the contributing tier
///
/// Same as [`match_candidates`] truncated to `max_results`.
#[must_use]
pub fn match_with_tiers(
    corpus: &[Recipe],
    query: &SearchQuery,
    config: &MatchingConfig,
) -> Vec<Candidate> {
    let mut candidates = match_candidates(corpus, query, config);
    candidates.truncate(config.max_results);
    candidates
}

/// Match a query against the corpus
#[must_use]
pub fn match_recipes(corpus: &[Recipe], query: &SearchQuery, config: &MatchingConfig) -> Vec<Recipe> {
    match_with_tiers(corpus, query, config)
        .into_iter()
        .map(|candidate| candidate.recipe)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoplate_core::models::Category;

    fn recipe(id: i64, name: &str, ingredients: &str, index: f64) -> Recipe {
        Recipe {
            recipe_id: id,
            name: name.to_owned(),
            ingredients: ingredients.to_owned(),
            env_score: 20.0,
            nutri_score: 40.0,
            sustainability_index: index,
            category: Category::Other,
            category_icon: Category::Other.icon().to_owned(),
        }
    }

    fn ids(candidates: &[Candidate]) -> Vec<i64> {
        candidates.iter().map(|c| c.recipe.recipe_id).collect()
    }

    #[test]
    fn test_empty_corpus_yields_nothing() {
        let query = SearchQuery::parse("csirke");
        assert!(match_recipes(&[], &query, &MatchingConfig::default()).is_empty());
    }

    #[test]
    fn test_exact_matches_come_first() {
        let corpus = vec![
            recipe(1, "Leves", "répa, víz", 90.0),
            recipe(2, "Csirke", "csirke, hagyma", 10.0),
        ];
        let found = match_with_tiers(&corpus, &SearchQuery::parse("hagyma"), &MatchingConfig::default());
        assert_eq!(ids(&found), vec![2, 1]);
        assert_eq!(found[0].tier, MatchTier::Exact);
        assert_eq!(found[1].tier, MatchTier::Backfill);
    }

    #[test]
    fn test_exact_match_is_raw_substring() {
        let corpus = vec![recipe(1, "Paradicsomleves", "paradicsomlé, só", 50.0)];
        let config = MatchingConfig {
            backfill_target: 0,
            partial_trigger_below: 0,
            ..MatchingConfig::default()
        };
        let found = match_recipes(&corpus, &SearchQuery::parse("DICSOM"), &config);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_partial_tier_uses_prefix_against_name() {
        let corpus = vec![
            recipe(1, "Paradicsomos tészta", "tészta, só", 10.0),
            recipe(2, "Répa", "répa", 99.0),
        ];
        let config = MatchingConfig {
            backfill_target: 0,
            ..MatchingConfig::default()
        };
        // "parazsas" is not in any recipe, its prefix "para" is in recipe 1's name
        let found = match_with_tiers(&corpus, &SearchQuery::parse("parazsas"), &config);
        assert_eq!(ids(&found), vec![1]);
        assert_eq!(found[0].tier, MatchTier::Partial);
    }

    #[test]
    fn test_partial_tier_skips_short_terms() {
        let corpus = vec![recipe(1, "Só", "sót", 10.0)];
        let config = MatchingConfig {
            backfill_target: 0,
            ..MatchingConfig::default()
        };
        assert!(match_recipes(&corpus, &SearchQuery::parse("sx"), &config).is_empty());
    }

    #[test]
    fn test_partial_tier_not_run_with_enough_exact_hits() {
        let mut corpus: Vec<Recipe> = (1..=5)
            .map(|id| recipe(id, "Csirke", "csirke", 50.0))
            .collect();
        corpus.push(recipe(6, "Csirág", "csipet", 50.0));
        let config = MatchingConfig {
            backfill_target: 5,
            ..MatchingConfig::default()
        };
        let found = match_recipes(&corpus, &SearchQuery::parse("csirke"), &config);
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|r| r.recipe_id <= 5));
    }

    #[test]
    fn test_backfill_takes_best_sustainability() {
        let corpus = vec![
            recipe(1, "A", "alma", 10.0),
            recipe(2, "B", "körte", 80.0),
            recipe(3, "C", "szilva", 60.0),
            recipe(4, "D", "barack", 95.0),
        ];
        let config = MatchingConfig {
            backfill_target: 3,
            partial_trigger_below: 3,
            ..MatchingConfig::default()
        };
        let found = match_with_tiers(&corpus, &SearchQuery::parse("alma"), &config);
        assert_eq!(ids(&found), vec![1, 4, 2]);
    }

    #[test]
    fn test_blank_query_falls_through_to_backfill() {
        let corpus: Vec<Recipe> = (1..=12)
            .map(|id| recipe(id, "R", "x", id as f64))
            .collect();
        let found = match_with_tiers(&corpus, &SearchQuery::parse(""), &MatchingConfig::default());
        assert_eq!(found.len(), 8);
        assert!(found.iter().all(|c| c.tier == MatchTier::Backfill));
        assert_eq!(found[0].recipe.recipe_id, 12);
    }

    #[test]
    fn test_result_is_capped_after_tiers() {
        let corpus: Vec<Recipe> = (1..=15)
            .map(|id| recipe(id, "Hagymás", "hagyma", 50.0))
            .collect();
        let found = match_with_tiers(&corpus, &SearchQuery::parse("hagyma"), &MatchingConfig::default());
        assert_eq!(found.len(), 10);
        assert_eq!(found[0].recipe.recipe_id, 1);

        let all = match_candidates(&corpus, &SearchQuery::parse("hagyma"), &MatchingConfig::default());
        assert_eq!(all.len(), 15);
        assert!(all.iter().all(|c| c.tier == MatchTier::Exact));
    }

    #[test]
    fn test_candidates_are_unique() {
        let corpus = vec![recipe(1, "Hagymás csirke", "csirke, hagyma", 50.0)];
        let found = match_recipes(&corpus, &SearchQuery::parse("csirke, hagyma"), &MatchingConfig::default());
        assert_eq!(found.len(), 1);
    }
}
