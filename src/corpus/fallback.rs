// ABOUTME: Built-in fallback recipe corpus used when the configured corpus cannot be loaded
// ABOUTME: Three small Hungarian recipes that keep the engine usable offline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ecoplate_core::models::RawRecipe;

fn raw(id: i64, name: &str, ingredients: &str, env_score: f64, nutri_score: f64) -> RawRecipe {
    RawRecipe {
        recipeid: Some(id),
        name: Some(name.to_owned()),
        ingredients: Some(ingredients.to_owned()),
        env_score: Some(env_score),
        nutri_score: Some(nutri_score),
        ..RawRecipe::default()
    }
}

/// Raw records of the built-in corpus
#[must_use]
pub fn fallback_recipes() -> Vec<RawRecipe> {
    vec![
        raw(
            1,
            "Áfonyás Joghurt",
            "áfonya, cukor, joghurt, citromlé",
            12.1,
            18.9,
        ),
        raw(
            2,
            "Zöldséges Leves",
            "paradicsomlé, káposzta, hagyma, sárgarépa",
            19.3,
            51.3,
        ),
        raw(
            3,
            "Csirke Recept",
            "csirke, hagyma, paradicsom, só, bors",
            25.4,
            45.8,
        ),
    ]
}
