// ABOUTME: Recipe data models for raw corpus records and curated engine recipes
// ABOUTME: Defines RawRecipe (tolerant parsing), Recipe (validated), and SearchQuery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::category::Category;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stable integer identity of a recipe
pub type RecipeId = i64;

/// Recipe record as it arrives from the corpus
///
/// Every field is optional: curation decides what is usable. Field names
/// follow the corpus JSON format (`recipeid`, `env_score`, ...), with aliases
/// for the camel-case spellings some exports use. Numeric fields also accept
/// numeric strings; a value of any other type is read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecipe {
    /// Recipe identifier
    #[serde(
        default,
        alias = "recipe_id",
        alias = "recipeId",
        alias = "id",
        deserialize_with = "lenient_id"
    )]
    pub recipeid: Option<RecipeId>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text, comma-separated ingredient list
    #[serde(default)]
    pub ingredients: Option<String>,
    /// Environmental impact score (lower is better)
    #[serde(default, alias = "envScore", deserialize_with = "lenient_number")]
    pub env_score: Option<f64>,
    /// Nutritional score (higher is better)
    #[serde(default, alias = "nutriScore", deserialize_with = "lenient_number")]
    pub nutri_score: Option<f64>,
    /// Externally computed sustainability index; always recomputed on curation
    #[serde(
        default,
        alias = "sustainabilityIndex",
        deserialize_with = "lenient_number"
    )]
    pub sustainability_index: Option<f64>,
    /// Category identifier, derived when absent or unrecognized
    #[serde(default)]
    pub category: Option<String>,
    /// Display icon token, derived from the category when absent
    #[serde(default, alias = "categoryIcon")]
    pub category_icon: Option<String>,
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from))
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<RecipeId>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|value| {
        value.as_i64().or_else(|| {
            number_from(value)
                .filter(|id| id.fract().abs() < f64::EPSILON && id.abs() < 9.0e15)
                .map(|id| id as RecipeId)
        })
    }))
}

/// Curated recipe as used by the engine
///
/// Invariants: `env_score > 0`, `nutri_score > 0`,
/// `0 <= sustainability_index <= 100`, `name` and `ingredients` non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier
    #[serde(rename = "recipeid")]
    pub recipe_id: RecipeId,
    /// Display name
    pub name: String,
    /// Free-text, comma-separated ingredient list
    pub ingredients: String,
    /// Environmental impact score (lower is better)
    pub env_score: f64,
    /// Nutritional score (higher is better)
    pub nutri_score: f64,
    /// Derived sustainability index in `[0, 100]`
    pub sustainability_index: f64,
    /// Dish category
    pub category: Category,
    /// Display icon token
    pub category_icon: String,
}

impl From<&Recipe> for RawRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            recipeid: Some(recipe.recipe_id),
            name: Some(recipe.name.clone()),
            ingredients: Some(recipe.ingredients.clone()),
            env_score: Some(recipe.env_score),
            nutri_score: Some(recipe.nutri_score),
            sustainability_index: Some(recipe.sustainability_index),
            category: Some(recipe.category.as_str().to_owned()),
            category_icon: Some(recipe.category_icon.clone()),
        }
    }
}

/// A parsed ingredient search
///
/// The raw text is split on commas; each term is trimmed and lower-cased.
/// Empty terms are dropped, so a blank query has no terms at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text as typed by the user
    pub raw: String,
    /// Normalized search terms
    pub terms: Vec<String>,
}

impl SearchQuery {
    /// Parse a comma-separated ingredient list
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let terms = raw
            .split(',')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self {
            raw: raw.to_owned(),
            terms,
        }
    }

    /// Whether the query carries no usable terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
