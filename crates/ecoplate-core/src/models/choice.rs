// ABOUTME: Choice record model capturing a participant's final recipe selection
// ABOUTME: Immutable append-only log entry with timing, rank, and score context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::category::Category;
use super::experiment::TestGroup;
use super::recipe::RecipeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One selection event
///
/// Score fields default to zero when the chosen recipe could not be resolved,
/// and when older log entries predate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceRecord {
    /// Id of the participant who chose
    pub user_id: String,
    /// Participant's experiment arm
    pub test_group: TestGroup,
    /// Chosen recipe id
    pub recipe_id: RecipeId,
    /// Chosen recipe name
    pub recipe_name: String,
    /// Chosen recipe category
    #[serde(default)]
    pub recipe_category: Category,
    /// 1-based position in the list shown to the participant
    pub rank: usize,
    /// Search text that produced the list
    pub search_ingredients: String,
    /// Seconds between showing results and the selection
    #[serde(alias = "decisionTime")]
    pub decision_time_seconds: f64,
    /// Sustainability index of the chosen recipe
    #[serde(default)]
    pub sustainability_index: f64,
    /// Environmental score of the chosen recipe
    #[serde(default)]
    pub env_score: f64,
    /// Nutritional score of the chosen recipe
    #[serde(default)]
    pub nutri_score: f64,
    /// Time of the selection
    pub timestamp: DateTime<Utc>,
}
