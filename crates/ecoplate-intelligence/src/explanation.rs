// ABOUTME: Human-readable rationale for a recommended recipe, shown to group C
// ABOUTME: Built from the shared score bands so text and color-coding never disagree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ecoplate_core::bands::{EnvironmentBand, NutritionBand, SustainabilityBand};
use ecoplate_core::models::{Category, Recipe};
use serde::{Deserialize, Serialize};

/// Structured explanation of a recipe's scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Sustainability index band
    pub sustainability: SustainabilityBand,
    /// Environmental score band
    pub environment: EnvironmentBand,
    /// Nutritional score band
    pub nutrition: NutritionBand,
    /// Category the closing remark is keyed on
    pub category: Category,
    /// Full explanation text
    pub text: String,
}

fn sustainability_sentence(band: SustainabilityBand, index: f64) -> String {
    match band {
        SustainabilityBand::Excellent => {
            format!("An excellent sustainable choice (sustainability {index:.1}/100).")
        }
        SustainabilityBand::Good => {
            format!("A good sustainable choice (sustainability {index:.1}/100).")
        }
        SustainabilityBand::Moderate => {
            format!("A moderately sustainable choice (sustainability {index:.1}/100).")
        }
        SustainabilityBand::NeedsImprovement => {
            format!("Its sustainability needs improvement ({index:.1}/100).")
        }
        SustainabilityBand::Poor => {
            format!("A poor choice for sustainability ({index:.1}/100).")
        }
    }
}

fn environment_sentence(band: EnvironmentBand, env_score: f64) -> String {
    match band {
        EnvironmentBand::Excellent => {
            format!("It has an excellent environmental footprint (impact {env_score:.1}).")
        }
        EnvironmentBand::Good => {
            format!("Its environmental impact is good (impact {env_score:.1}).")
        }
        EnvironmentBand::Moderate => {
            format!("Its environmental impact is moderate (impact {env_score:.1}).")
        }
        EnvironmentBand::HighImpact => {
            format!("It has a high environmental impact (impact {env_score:.1}).")
        }
    }
}

fn nutrition_sentence(band: NutritionBand, nutri_score: f64) -> String {
    match band {
        NutritionBand::Excellent => {
            format!("It offers excellent nutrition (nutrition {nutri_score:.1}).")
        }
        NutritionBand::Good => format!("Its nutritional value is good (nutrition {nutri_score:.1})."),
        NutritionBand::Moderate => {
            format!("Its nutritional value is moderate (nutrition {nutri_score:.1}).")
        }
        NutritionBand::Low => format!("Its nutritional value is low (nutrition {nutri_score:.1})."),
    }
}

/// Closing remark for a category
#[must_use]
pub const fn category_remark(category: Category) -> &'static str {
    match category {
        Category::Soup => "Soups are usually plant-forward and light on resources.",
        Category::Salad => "Fresh salads are among the lowest-impact dishes.",
        Category::MainCourse => {
            "Main courses tend to carry a larger footprint, so their score is adjusted down."
        }
        Category::Dessert => "Desserts are often sugar-heavy, so their score is adjusted down.",
        Category::Beverage => "Drinks have a small footprint per serving.",
        Category::Breakfast => "A balanced breakfast is a good start to the day.",
        Category::SideDish => "Pair it with a vegetable main for a lighter meal.",
        Category::Other => "Seasonal, local ingredients make any dish greener.",
    }
}

/// Explain a recipe's scores in structured form
#[must_use]
pub fn explain_detailed(recipe: &Recipe) -> Explanation {
    let sustainability = SustainabilityBand::classify(recipe.sustainability_index);
    let environment = EnvironmentBand::classify(recipe.env_score);
    let nutrition = NutritionBand::classify(recipe.nutri_score);

    let text = [
        sustainability_sentence(sustainability, recipe.sustainability_index),
        environment_sentence(environment, recipe.env_score),
        nutrition_sentence(nutrition, recipe.nutri_score),
        category_remark(recipe.category).to_owned(),
    ]
    .join(" ");

    Explanation {
        sustainability,
        environment,
        nutrition,
        category: recipe.category,
        text,
    }
}

/// Explain a recipe's scores
#[must_use]
pub fn explain(recipe: &Recipe) -> String {
    explain_detailed(recipe).text
}
