// ABOUTME: Recommendation engine configuration with defaults, env overrides, and validation
// ABOUTME: Tunes dead bands, ranking policy, matching tiers, and sustainability scoring weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! All tunables of the recommendation engine live in [`EngineConfig`]. The
//! configuration is passed explicitly to every engine component; there is no
//! global instance.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export ECOPLATE_SUSTAINABILITY_DEAD_BAND=2.5
//!    export ECOPLATE_RANKING_POLICY=balanced_mix
//!    export ECOPLATE_MODIFIER_MAIN_COURSE=-4
//!    ```
//!
//! 2. Default values (if env vars not set)

mod error;

pub use error::ConfigError;

use ecoplate_core::models::Category;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Largest absolute category modifier accepted by validation
const MAX_ABS_MODIFIER: f64 = 20.0;

/// Tolerance when checking that scoring weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Ordering policy applied to sustainability-ranked groups (B and C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Multi-key sort with dead bands on sustainability and environment
    #[default]
    DeadBand,
    /// Alternate between ingredient-relevance order and dead-band order
    BalancedMix,
}

impl FromStr for RankingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "dead_band" | "deadband" => Ok(Self::DeadBand),
            "balanced_mix" | "balanced" => Ok(Self::BalancedMix),
            other => Err(ConfigError::Parse(format!("unknown ranking policy '{other}'"))),
        }
    }
}

/// Ranking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Minimum sustainability difference that decides an ordering
    pub sustainability_dead_band: f64,
    /// Minimum environmental score difference that decides an ordering
    pub environment_dead_band: f64,
    /// Policy for groups B and C
    pub policy: RankingPolicy,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            sustainability_dead_band: 3.0,
            environment_dead_band: 5.0,
            policy: RankingPolicy::default(),
        }
    }
}

/// Ingredient matching tier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// The partial tier runs when the exact tier found fewer than this many recipes
    pub partial_trigger_below: usize,
    /// Backfill tops the candidate list up to this many recipes
    pub backfill_target: usize,
    /// Cap on the ranked result list
    pub max_results: usize,
    /// Number of leading characters of a term used for partial matching
    pub partial_prefix_chars: usize,
    /// Terms shorter than this many characters are skipped by the partial tier
    pub partial_min_term_chars: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            partial_trigger_below: 5,
            backfill_target: 8,
            max_results: 10,
            partial_prefix_chars: 4,
            partial_min_term_chars: 3,
        }
    }
}

/// Additive sustainability modifier per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryModifiers {
    /// Soup modifier
    pub soup: f64,
    /// Salad modifier
    pub salad: f64,
    /// Main course modifier
    pub main_course: f64,
    /// Dessert modifier
    pub dessert: f64,
    /// Beverage modifier
    pub beverage: f64,
    /// Breakfast modifier
    pub breakfast: f64,
    /// Side dish modifier
    pub side_dish: f64,
    /// Uncategorized modifier
    pub other: f64,
}

impl CategoryModifiers {
    /// Modifier for a category
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Soup => self.soup,
            Category::Salad => self.salad,
            Category::MainCourse => self.main_course,
            Category::Dessert => self.dessert,
            Category::Beverage => self.beverage,
            Category::Breakfast => self.breakfast,
            Category::SideDish => self.side_dish,
            Category::Other => self.other,
        }
    }

    /// Replace the modifier for a category
    pub fn set(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::Soup => &mut self.soup,
            Category::Salad => &mut self.salad,
            Category::MainCourse => &mut self.main_course,
            Category::Dessert => &mut self.dessert,
            Category::Beverage => &mut self.beverage,
            Category::Breakfast => &mut self.breakfast,
            Category::SideDish => &mut self.side_dish,
            Category::Other => &mut self.other,
        };
        *slot = value;
    }
}

impl Default for CategoryModifiers {
    fn default() -> Self {
        Self {
            soup: Category::Soup.default_modifier(),
            salad: Category::Salad.default_modifier(),
            main_course: Category::MainCourse.default_modifier(),
            dessert: Category::Dessert.default_modifier(),
            beverage: Category::Beverage.default_modifier(),
            breakfast: Category::Breakfast.default_modifier(),
            side_dish: Category::SideDish.default_modifier(),
            other: Category::Other.default_modifier(),
        }
    }
}

/// Sustainability index scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the environmental component
    pub environmental_weight: f64,
    /// Weight of the nutritional component
    pub nutritional_weight: f64,
    /// Per-category adjustments applied after blending
    pub category_modifiers: CategoryModifiers,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            environmental_weight: 0.6,
            nutritional_weight: 0.4,
            category_modifiers: CategoryModifiers::default(),
        }
    }
}

/// Complete recommendation engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ranking dead bands and policy
    pub ranking: RankingConfig,
    /// Matching tier thresholds
    pub matching: MatchingConfig,
    /// Sustainability scoring
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when it is invalid
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load engine config: {}, using defaults", e);
            Self::default()
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranking = &self.ranking;
        if !ranking.sustainability_dead_band.is_finite() || ranking.sustainability_dead_band < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "sustainability_dead_band must be a non-negative number",
            ));
        }
        if !ranking.environment_dead_band.is_finite() || ranking.environment_dead_band < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "environment_dead_band must be a non-negative number",
            ));
        }

        let matching = &self.matching;
        if matching.max_results == 0 {
            return Err(ConfigError::ValueOutOfRange("max_results must be at least 1"));
        }
        if matching.partial_prefix_chars == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "partial_prefix_chars must be at least 1",
            ));
        }
        if matching.partial_trigger_below > matching.backfill_target {
            return Err(ConfigError::InvalidRange(
                "partial_trigger_below must be <= backfill_target",
            ));
        }
        if matching.backfill_target > matching.max_results {
            return Err(ConfigError::InvalidRange(
                "backfill_target must be <= max_results",
            ));
        }

        let scoring = &self.scoring;
        if scoring.environmental_weight < 0.0 || scoring.nutritional_weight < 0.0 {
            return Err(ConfigError::InvalidWeights(
                "Scoring weights must be non-negative",
            ));
        }
        let weight_sum = scoring.environmental_weight + scoring.nutritional_weight;
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Scoring weights should sum to 1.0",
            ));
        }
        if Category::ALL
            .into_iter()
            .map(|category| scoring.category_modifiers.get(category))
            .any(|modifier| !modifier.is_finite() || modifier.abs() > MAX_ABS_MODIFIER)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Category modifiers must be within -20 and +20",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("ECOPLATE_SUSTAINABILITY_DEAD_BAND")? {
            self.ranking.sustainability_dead_band = val;
        }
        if let Some(val) = env_override("ECOPLATE_ENVIRONMENT_DEAD_BAND")? {
            self.ranking.environment_dead_band = val;
        }
        if let Some(val) = env_override("ECOPLATE_RANKING_POLICY")? {
            self.ranking.policy = val;
        }

        if let Some(val) = env_override("ECOPLATE_MAX_RESULTS")? {
            self.matching.max_results = val;
        }
        if let Some(val) = env_override("ECOPLATE_BACKFILL_TARGET")? {
            self.matching.backfill_target = val;
        }
        if let Some(val) = env_override("ECOPLATE_PARTIAL_TRIGGER_BELOW")? {
            self.matching.partial_trigger_below = val;
        }

        for category in Category::ALL {
            let name = format!(
                "ECOPLATE_MODIFIER_{}",
                category.as_str().replace('-', "_").to_uppercase()
            );
            if let Some(val) = env_override(&name)? {
                self.scoring.category_modifiers.set(category, val);
            }
        }

        Ok(self)
    }
}

/// Read and parse an environment variable, `None` when unset
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_validate() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.ranking.sustainability_dead_band - 3.0).abs() < f64::EPSILON);
        assert!((config.ranking.environment_dead_band - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.matching.max_results, 10);
        assert_eq!(config.ranking.policy, RankingPolicy::DeadBand);
    }

    #[test]
    fn test_default_modifiers_match_table() {
        let modifiers = CategoryModifiers::default();
        assert!((modifiers.get(Category::Salad) - 5.0).abs() < f64::EPSILON);
        assert!((modifiers.get(Category::Dessert) + 3.0).abs() < f64::EPSILON);
        assert!((modifiers.get(Category::MainCourse) + 2.0).abs() < f64::EPSILON);
        assert!(modifiers.get(Category::Other).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_backfill_above_cap() {
        let mut config = EngineConfig::default();
        config.matching.backfill_target = 12;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unbalanced_weights() {
        let mut config = EngineConfig::default();
        config.scoring.environmental_weight = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_validate_rejects_large_modifier() {
        let mut config = EngineConfig::default();
        config.scoring.category_modifiers.set(Category::Soup, 25.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_ranking_policy_parse() {
        assert_eq!(
            "balanced-mix".parse::<RankingPolicy>().unwrap(),
            RankingPolicy::BalancedMix
        );
        assert_eq!(
            "DEAD_BAND".parse::<RankingPolicy>().unwrap(),
            RankingPolicy::DeadBand
        );
        assert!("random".parse::<RankingPolicy>().is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        env::set_var("ECOPLATE_SUSTAINABILITY_DEAD_BAND", "1.5");
        env::set_var("ECOPLATE_RANKING_POLICY", "balanced_mix");
        env::set_var("ECOPLATE_MODIFIER_MAIN_COURSE", "-4");

        let config = EngineConfig::load().unwrap();

        env::remove_var("ECOPLATE_SUSTAINABILITY_DEAD_BAND");
        env::remove_var("ECOPLATE_RANKING_POLICY");
        env::remove_var("ECOPLATE_MODIFIER_MAIN_COURSE");

        assert!((config.ranking.sustainability_dead_band - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.ranking.policy, RankingPolicy::BalancedMix);
        assert!((config.scoring.category_modifiers.main_course + 4.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_invalid_env_value_falls_back_to_defaults() {
        env::set_var("ECOPLATE_MAX_RESULTS", "many");
        assert!(matches!(EngineConfig::load(), Err(ConfigError::Parse(_))));
        let config = EngineConfig::load_or_default();
        env::remove_var("ECOPLATE_MAX_RESULTS");

        assert_eq!(config, EngineConfig::default());
    }
}
