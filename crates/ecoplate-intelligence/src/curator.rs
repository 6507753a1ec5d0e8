// ABOUTME: Recipe curation: validation, normalization, category derivation, and scoring
// ABOUTME: Turns raw corpus records into the engine's working corpus exactly once per load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Curation
//!
//! Every raw record goes through the same steps:
//!
//! 1. Records without an id, and repeats of an id already seen, are dropped.
//! 2. Records whose environmental or nutritional score is missing or not
//!    positive are dropped.
//! 3. The category is parsed or, when absent or unrecognized, derived from
//!    the name and ingredient text by keyword.
//! 4. The sustainability index is recomputed from the two scores and the
//!    category modifier. Any index carried by the raw record is ignored.
//! 5. Missing icon, name, and ingredients get defaults.
//!
//! Recomputation depends only on the scores and the category, so curating an
//! already curated corpus yields the same indices.

use crate::config::ScoringConfig;
use ecoplate_core::constants::{placeholders, sustainability};
use ecoplate_core::models::{Category, RawRecipe, Recipe, RecipeId};
use std::collections::HashSet;
use tracing::{debug, info};

/// Keywords that select one category
struct CategoryKeywords {
    category: Category,
    /// Matched anywhere in the text, so compounds and suffixed forms
    /// ("gyümölcsleves", "csirkés") hit
    stems: &'static [&'static str],
    /// Matched only as a whole word
    words: &'static [&'static str],
}

impl CategoryKeywords {
    fn matches(&self, text: &str, words: &[&str]) -> bool {
        self.stems.iter().any(|stem| text.contains(stem))
            || self.words.iter().any(|keyword| words.contains(keyword))
    }
}

/// Keyword lists per category, in evaluation order; first match wins
///
/// Short keywords that occur inside unrelated words ("tea" in "teaspoon",
/// "rice" in "licorice") are whole-word only.
const CATEGORY_KEYWORDS: [CategoryKeywords; 7] = [
    CategoryKeywords {
        category: Category::Soup,
        stems: &["leves", "soup", "gulyás", "goulash", "broth"],
        words: &[],
    },
    CategoryKeywords {
        category: Category::Salad,
        stems: &["saláta", "salad", "coleslaw"],
        words: &[],
    },
    CategoryKeywords {
        category: Category::MainCourse,
        stems: &[
            "csirke", "chicken", "marha", "beef", "sertés", "pork", "pörkölt", "tokány",
            "lazac", "salmon", "ponty", "rakott", "fasírt", "steak", "hús", "meat",
        ],
        words: &[],
    },
    CategoryKeywords {
        category: Category::Dessert,
        stems: &[
            "torta", "cake", "süti", "sütemény", "palacsinta", "pancake", "rétes",
            "joghurt", "yogurt", "csokoládé", "chocolate", "desszert", "dessert",
            "fagylalt", "ice cream", "puding", "pudding",
        ],
        words: &[],
    },
    CategoryKeywords {
        category: Category::Beverage,
        stems: &[
            "üdítő", "drink", "smoothie", "limonádé", "lemonade", "juice", "turmix", "kávé",
            "coffee",
        ],
        words: &["ital", "italok", "tea"],
    },
    CategoryKeywords {
        category: Category::Breakfast,
        stems: &[
            "reggeli", "breakfast", "zabkása", "oatmeal", "porridge", "müzli", "muesli",
            "granola", "omlett", "omelette", "rántotta", "pirítós", "toast",
        ],
        words: &[],
    },
    CategoryKeywords {
        category: Category::SideDish,
        stems: &[
            "köret", "rizs", "burgonya", "krumpli", "potato", "püré", "kuszkusz", "couscous",
        ],
        words: &["side", "rice"],
    },
];

/// Why a raw record was left out of the curated corpus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    /// The record carries no id
    MissingId,
    /// Another record with the same id was curated earlier
    DuplicateId,
    /// Environmental or nutritional score is missing, zero, or negative
    NonPositiveScores {
        /// Environmental score as read (missing reads as 0)
        env_score: f64,
        /// Nutritional score as read (missing reads as 0)
        nutri_score: f64,
    },
}

/// A dropped record
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Id of the dropped record, if it had one
    pub recipe_id: Option<RecipeId>,
    /// Reason it was dropped
    pub reason: RejectReason,
}

/// Result of curating a corpus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurationReport {
    /// Curated recipes in corpus order
    pub recipes: Vec<Recipe>,
    /// Records that were dropped
    pub rejected: Vec<Rejection>,
}

/// Derive a category from a recipe's name and ingredient text
#[must_use]
pub fn derive_category(name: &str, ingredients: &str) -> Category {
    let text = format!("{name} {ingredients}").to_lowercase();
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();
    CATEGORY_KEYWORDS
        .iter()
        .find(|entry| entry.matches(&text, &words))
        .map_or(Category::Other, |entry| entry.category)
}

/// Compute the sustainability index for the given scores and category
///
/// `environmental = max(0, 100 - env)`, `nutritional = min(100, nutri)`,
/// blended by the configured weights, shifted by the category modifier, and
/// clamped to `[0, 100]`.
#[must_use]
pub fn sustainability_index(
    env_score: f64,
    nutri_score: f64,
    category: Category,
    scoring: &ScoringConfig,
) -> f64 {
    let environmental = (sustainability::MAX_INDEX - env_score).max(0.0);
    let nutritional = nutri_score.min(sustainability::MAX_INDEX);
    let base =
        environmental * scoring.environmental_weight + nutritional * scoring.nutritional_weight;
    let modifier = scoring.category_modifiers.get(category);
    (base + modifier).clamp(sustainability::MIN_INDEX, sustainability::MAX_INDEX)
}

fn is_positive_score(score: f64) -> bool {
    score.is_finite() && score > 0.0
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Curate a single record, ignoring id uniqueness
///
/// # Errors
///
/// Returns the reject reason when the record cannot be part of the corpus
pub fn curate_recipe(raw: &RawRecipe, scoring: &ScoringConfig) -> Result<Recipe, RejectReason> {
    let recipe_id = raw.recipeid.ok_or(RejectReason::MissingId)?;

    let env_score = raw.env_score.unwrap_or(0.0);
    let nutri_score = raw.nutri_score.unwrap_or(0.0);
    if !is_positive_score(env_score) || !is_positive_score(nutri_score) {
        return Err(RejectReason::NonPositiveScores {
            env_score,
            nutri_score,
        });
    }

    let name = non_empty(raw.name.as_ref());
    let ingredients = non_empty(raw.ingredients.as_ref());

    let category = non_empty(raw.category.as_ref())
        .and_then(Category::parse)
        .unwrap_or_else(|| derive_category(name.unwrap_or(""), ingredients.unwrap_or("")));

    let category_icon = non_empty(raw.category_icon.as_ref())
        .map_or_else(|| category.icon().to_owned(), ToOwned::to_owned);

    Ok(Recipe {
        recipe_id,
        name: name.map_or_else(|| format!("Recipe #{recipe_id}"), ToOwned::to_owned),
        ingredients: ingredients
            .unwrap_or(placeholders::MISSING_INGREDIENTS)
            .to_owned(),
        env_score,
        nutri_score,
        sustainability_index: sustainability_index(env_score, nutri_score, category, scoring),
        category,
        category_icon,
    })
}

/// Curate a raw corpus, reporting dropped records
#[must_use]
pub fn curate_with_report(raw_recipes: &[RawRecipe], scoring: &ScoringConfig) -> CurationReport {
    let mut report = CurationReport::default();
    let mut seen: HashSet<RecipeId> = HashSet::with_capacity(raw_recipes.len());

    for raw in raw_recipes {
        let outcome = curate_recipe(raw, scoring).and_then(|recipe| {
            if seen.insert(recipe.recipe_id) {
                Ok(recipe)
            } else {
                Err(RejectReason::DuplicateId)
            }
        });
        match outcome {
            Ok(recipe) => report.recipes.push(recipe),
            Err(reason) => {
                debug!(recipe_id = ?raw.recipeid, ?reason, "Dropping recipe during curation");
                report.rejected.push(Rejection {
                    recipe_id: raw.recipeid,
                    reason,
                });
            }
        }
    }

    info!(
        curated = report.recipes.len(),
        rejected = report.rejected.len(),
        "Recipe corpus curated"
    );
    report
}

/// Curate a raw corpus into the engine's working corpus
#[must_use]
pub fn curate(raw_recipes: &[RawRecipe], scoring: &ScoringConfig) -> Vec<Recipe> {
    curate_with_report(raw_recipes, scoring).recipes
}
