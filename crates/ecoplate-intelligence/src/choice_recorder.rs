// ABOUTME: Builds the immutable choice record for a participant's final selection
// ABOUTME: Computes decision time and copies score context, degrading gracefully on unknown ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use ecoplate_core::models::{Category, ChoiceRecord, Recipe, RecipeId, User};
use tracing::warn;

/// What the participant picked and under which circumstances
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// Id of the chosen recipe
    pub recipe_id: RecipeId,
    /// 1-based position of the recipe in the shown list
    pub rank: usize,
    /// Raw search text that produced the list
    pub search_ingredients: &'a str,
    /// When the results were shown, if known
    pub shown_at: Option<DateTime<Utc>>,
}

/// Seconds between `shown_at` and `now`, never negative, zero when unknown
#[must_use]
pub fn decision_time_seconds(shown_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    shown_at.map_or(0.0, |start| {
        let elapsed_ms = (now - start).num_milliseconds();
        (elapsed_ms as f64 / 1000.0).max(0.0)
    })
}

/// Build the choice record with an explicit clock
///
/// `chosen` is the resolved recipe, if any. An unresolved id still yields a
/// record, with a placeholder name and zeroed score fields.
#[must_use]
pub fn record_at(
    user: &User,
    chosen: Option<&Recipe>,
    selection: &Selection<'_>,
    now: DateTime<Utc>,
) -> ChoiceRecord {
    let (recipe_name, recipe_category, sustainability_index, env_score, nutri_score) =
        if let Some(recipe) = chosen {
            (
                recipe.name.clone(),
                recipe.category,
                recipe.sustainability_index,
                recipe.env_score,
                recipe.nutri_score,
            )
        } else {
            warn!(
                recipe_id = selection.recipe_id,
                user_id = %user.id,
                "Selected recipe not found, recording with default scores"
            );
            (
                format!("Recipe #{}", selection.recipe_id),
                Category::Other,
                0.0,
                0.0,
                0.0,
            )
        };

    ChoiceRecord {
        user_id: user.id.clone(),
        test_group: user.test_group,
        recipe_id: selection.recipe_id,
        recipe_name,
        recipe_category,
        rank: selection.rank,
        search_ingredients: selection.search_ingredients.to_owned(),
        decision_time_seconds: decision_time_seconds(selection.shown_at, now),
        sustainability_index,
        env_score,
        nutri_score,
        timestamp: now,
    }
}

/// Build the choice record at the current time
#[must_use]
pub fn record(user: &User, chosen: Option<&Recipe>, selection: &Selection<'_>) -> ChoiceRecord {
    record_at(user, chosen, selection, Utc::now())
}
