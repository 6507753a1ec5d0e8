// ABOUTME: Per-group ranking strategies for matched recipe candidates
// ABOUTME: Random shuffle for the control arm, dead-banded multi-key sort, and balanced mix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ranking Strategies
//!
//! - `RandomShuffle`: Fisher-Yates shuffle for the control arm (group A). No
//!   score is consulted. Randomness is injected so tests can seed it.
//! - `DeadBand`: sustainability descending, then environmental score
//!   ascending, then nutritional score descending. The first two keys only
//!   decide when the difference exceeds their dead band, so score noise does
//!   not flip near-tied recipes.
//! - `BalancedMix`: alternates between the matcher's relevance order and the
//!   dead-band order, starting with relevance.
//!
//! Dead bands make the comparator intransitive (a ≈ b and b ≈ c does not
//! imply a ≈ c), which `slice::sort_by` does not allow. The dead-band order is
//! therefore produced by a stable insertion sort: every adjacent pair in the
//! output satisfies `compare(prev, next) != Greater`.

use crate::config::{RankingConfig, RankingPolicy};
use ecoplate_core::models::{Recipe, TestGroup};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Dead-band thresholds used by the multi-key comparator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadBands {
    /// Sustainability differences at or below this value are ties
    pub sustainability: f64,
    /// Environmental differences at or below this value are ties
    pub environment: f64,
}

impl From<&RankingConfig> for DeadBands {
    fn from(config: &RankingConfig) -> Self {
        Self {
            sustainability: config.sustainability_dead_band,
            environment: config.environment_dead_band,
        }
    }
}

/// Compare two recipes by the dead-banded multi-key order
///
/// `Less` means `a` ranks before `b`.
#[must_use]
pub fn compare_dead_band(a: &Recipe, b: &Recipe, bands: DeadBands) -> Ordering {
    if (a.sustainability_index - b.sustainability_index).abs() > bands.sustainability {
        return b.sustainability_index.total_cmp(&a.sustainability_index);
    }
    if (a.env_score - b.env_score).abs() > bands.environment {
        return a.env_score.total_cmp(&b.env_score);
    }
    b.nutri_score.total_cmp(&a.nutri_score)
}

/// Positions of `recipes` in dead-band order, via a stable insertion sort
fn dead_band_order(recipes: &[Recipe], bands: DeadBands) -> Vec<usize> {
    let mut order: Vec<usize> = Vec::with_capacity(recipes.len());
    for (index, recipe) in recipes.iter().enumerate() {
        let mut position = order.len();
        while position > 0
            && compare_dead_band(recipe, &recipes[order[position - 1]], bands) == Ordering::Less
        {
            position -= 1;
        }
        order.insert(position, index);
    }
    order
}

/// Order recipes with the dead-band comparator
#[must_use]
pub fn sort_dead_band(candidates: Vec<Recipe>, bands: DeadBands) -> Vec<Recipe> {
    let order = dead_band_order(&candidates, bands);
    let mut slots: Vec<Option<Recipe>> = candidates.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}

/// Shuffle recipes uniformly (Fisher-Yates)
#[must_use]
pub fn shuffle(mut candidates: Vec<Recipe>, rng: &mut dyn RngCore) -> Vec<Recipe> {
    candidates.shuffle(rng);
    candidates
}

/// Interleave relevance order with dead-band order, relevance first
#[must_use]
pub fn balanced_mix(candidates: Vec<Recipe>, bands: DeadBands) -> Vec<Recipe> {
    let total = candidates.len();
    let mut by_sustainability = dead_band_order(&candidates, bands).into_iter();
    let mut by_relevance = (0..total).collect::<Vec<_>>().into_iter();
    let mut slots: Vec<Option<Recipe>> = candidates.into_iter().map(Some).collect();

    let mut mixed = Vec::with_capacity(total);
    let mut relevance_turn = true;
    while mixed.len() < total {
        let source = if relevance_turn {
            &mut by_relevance
        } else {
            &mut by_sustainability
        };
        // Every untaken position is still ahead in both orders
        if let Some(recipe) = source.find_map(|index| slots[index].take()) {
            mixed.push(recipe);
        }
        relevance_turn = !relevance_turn;
    }
    mixed
}

/// Ordering policy for one experiment arm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum RankingStrategy {
    /// Uniform random order
    RandomShuffle,
    /// Dead-banded multi-key sort
    DeadBand {
        /// Comparator thresholds
        bands: DeadBands,
    },
    /// Relevance and sustainability interleaved
    BalancedMix {
        /// Comparator thresholds for the sustainability half
        bands: DeadBands,
    },
}

impl RankingStrategy {
    /// Strategy for an experiment arm under the configured policy
    #[must_use]
    pub fn for_group(group: TestGroup, config: &RankingConfig) -> Self {
        if !group.is_sustainability_ranked() {
            return Self::RandomShuffle;
        }
        let bands = DeadBands::from(config);
        match config.policy {
            RankingPolicy::DeadBand => Self::DeadBand { bands },
            RankingPolicy::BalancedMix => Self::BalancedMix { bands },
        }
    }

    /// Order the candidates
    #[must_use]
    pub fn apply(&self, candidates: Vec<Recipe>, rng: &mut dyn RngCore) -> Vec<Recipe> {
        match self {
            Self::RandomShuffle => shuffle(candidates, rng),
            Self::DeadBand { bands } => sort_dead_band(candidates, *bands),
            Self::BalancedMix { bands } => balanced_mix(candidates, *bands),
        }
    }
}

/// Rank candidates for an experiment arm
#[must_use]
pub fn rank(
    candidates: Vec<Recipe>,
    group: TestGroup,
    config: &RankingConfig,
    rng: &mut dyn RngCore,
) -> Vec<Recipe> {
    RankingStrategy::for_group(group, config).apply(candidates, rng)
}
