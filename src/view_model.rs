// ABOUTME: Maps ranked recipes to presentation cards according to the participant's arm
// ABOUTME: Scores with their bands for groups B and C, generated explanations for group C only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ecoplate_core::bands::{EnvironmentBand, NutritionBand, SustainabilityBand};
use ecoplate_core::models::{Category, Recipe, RecipeId, TestGroup};
use ecoplate_intelligence::explain;
use serde::{Deserialize, Serialize};

/// A score value formatted for display with its band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView<B> {
    /// Value formatted to one decimal
    pub value: String,
    /// Band the value falls into
    pub band: B,
    /// Band label
    pub label: String,
    /// Thermometer fill level
    pub level: u8,
}

/// Score block shown to the sustainability arms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Sustainability index
    pub sustainability: ScoreView<SustainabilityBand>,
    /// Environmental score (lower is better)
    pub environment: ScoreView<EnvironmentBand>,
    /// Nutritional score (higher is better)
    pub nutrition: ScoreView<NutritionBand>,
}

impl ScoreSummary {
    /// Summarize a recipe's scores
    #[must_use]
    pub fn of(recipe: &Recipe) -> Self {
        let sustainability = SustainabilityBand::classify(recipe.sustainability_index);
        let environment = EnvironmentBand::classify(recipe.env_score);
        let nutrition = NutritionBand::classify(recipe.nutri_score);
        Self {
            sustainability: ScoreView {
                value: format!("{:.1}", recipe.sustainability_index),
                band: sustainability,
                label: sustainability.label().to_owned(),
                level: sustainability.level(),
            },
            environment: ScoreView {
                value: format!("{:.1}", recipe.env_score),
                band: environment,
                label: environment.label().to_owned(),
                level: environment.level(),
            },
            nutrition: ScoreView {
                value: format!("{:.1}", recipe.nutri_score),
                band: nutrition,
                label: nutrition.label().to_owned(),
                level: nutrition.level(),
            },
        }
    }
}

/// One recipe as presented to a participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    /// 1-based position in the list
    pub rank: usize,
    /// Recipe id
    pub recipe_id: RecipeId,
    /// Recipe name
    pub name: String,
    /// Ingredient text
    pub ingredients: String,
    /// Dish category
    pub category: Category,
    /// Category icon
    pub category_icon: String,
    /// Scores, for arms that show them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreSummary>,
    /// Explanation, for the explanation arm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl RecipeCard {
    /// Card for `recipe` shown at `rank` to a participant in `group`
    #[must_use]
    pub fn new(recipe: &Recipe, rank: usize, group: TestGroup) -> Self {
        Self {
            rank,
            recipe_id: recipe.recipe_id,
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            category: recipe.category,
            category_icon: recipe.category_icon.clone(),
            scores: group.shows_scores().then(|| ScoreSummary::of(recipe)),
            explanation: group.shows_explanation().then(|| explain(recipe)),
        }
    }
}

/// Cards for a ranked list, ranks starting at 1
#[must_use]
pub fn build_cards(ranked: &[Recipe], group: TestGroup) -> Vec<RecipeCard> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, recipe)| RecipeCard::new(recipe, index + 1, group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dessert() -> Recipe {
        Recipe {
            recipe_id: 1,
            name: "Áfonyás Joghurt".to_owned(),
            ingredients: "áfonya, cukor, joghurt, citromlé".to_owned(),
            env_score: 12.1,
            nutri_score: 18.9,
            sustainability_index: 57.3,
            category: Category::Dessert,
            category_icon: Category::Dessert.icon().to_owned(),
        }
    }

    #[test]
    fn test_control_arm_sees_no_scores() {
        let card = RecipeCard::new(&dessert(), 1, TestGroup::A);
        assert!(card.scores.is_none());
        assert!(card.explanation.is_none());
    }

    #[test]
    fn test_score_arm_sees_scores_only() {
        let card = RecipeCard::new(&dessert(), 1, TestGroup::B);
        let scores = card.scores.unwrap();
        assert_eq!(scores.sustainability.value, "57.3");
        assert_eq!(scores.sustainability.band, SustainabilityBand::Moderate);
        assert_eq!(scores.environment.band, EnvironmentBand::Excellent);
        assert!(card.explanation.is_none());
    }

    #[test]
    fn test_explanation_arm_sees_everything() {
        let card = RecipeCard::new(&dessert(), 3, TestGroup::C);
        assert_eq!(card.rank, 3);
        assert!(card.scores.is_some());
        assert!(card.explanation.unwrap().contains("57.3"));
    }

    #[test]
    fn test_build_cards_ranks_from_one() {
        let cards = build_cards(&[dessert(), dessert()], TestGroup::A);
        let ranks: Vec<usize> = cards.iter().map(|card| card.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }
}
