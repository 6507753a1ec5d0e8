// ABOUTME: Shared test utilities for Ecoplate integration tests
// ABOUTME: Recipe builders, seeded synthetic corpora, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `ecoplate`

use chrono::{DateTime, TimeZone, Utc};
use ecoplate_core::models::{Category, RawRecipe, Recipe, TestGroup, User};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference time for deterministic records
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// Curated recipe with explicit scores
pub fn recipe(id: i64, name: &str, ingredients: &str, env: f64, nutri: f64, index: f64) -> Recipe {
    Recipe {
        recipe_id: id,
        name: name.to_owned(),
        ingredients: ingredients.to_owned(),
        env_score: env,
        nutri_score: nutri,
        sustainability_index: index,
        category: Category::Other,
        category_icon: Category::Other.icon().to_owned(),
    }
}

/// Raw corpus record with the given scores
pub fn raw_recipe(id: i64, name: &str, ingredients: &str, env: f64, nutri: f64) -> RawRecipe {
    RawRecipe {
        recipeid: Some(id),
        name: Some(name.to_owned()),
        ingredients: Some(ingredients.to_owned()),
        env_score: Some(env),
        nutri_score: Some(nutri),
        ..RawRecipe::default()
    }
}

/// Participant in a fixed group
pub fn user_in(group: TestGroup) -> User {
    User {
        id: format!("test-user-{group}"),
        email: "tester@example.com".to_owned(),
        test_group: group,
        registered_at: fixed_now(),
    }
}

const INGREDIENTS: [&str; 12] = [
    "csirke", "hagyma", "paradicsom", "burgonya", "répa", "káposzta", "tojás", "liszt", "tej",
    "joghurt", "bab", "lencse",
];

/// Deterministic generator of synthetic raw corpora
pub struct SyntheticCorpus {
    rng: ChaCha8Rng,
}

impl SyntheticCorpus {
    /// Generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// `count` raw records; roughly one in ten carries a zero score
    pub fn raw(&mut self, count: usize) -> Vec<RawRecipe> {
        (0..count)
            .map(|i| {
                let picked: Vec<&str> = INGREDIENTS
                    .choose_multiple(&mut self.rng, 3)
                    .copied()
                    .collect();
                let env = if self.rng.gen_bool(0.1) {
                    0.0
                } else {
                    self.rng.gen_range(0.5..120.0)
                };
                let nutri = self.rng.gen_range(0.5..110.0);
                raw_recipe(
                    i as i64 + 1,
                    &format!("Recept {}", i + 1),
                    &picked.join(", "),
                    env,
                    nutri,
                )
            })
            .collect()
    }

    /// `count` curated-looking recipes with random scores
    pub fn curated(&mut self, count: usize) -> Vec<Recipe> {
        (0..count)
            .map(|i| {
                let env = self.rng.gen_range(1.0..80.0);
                let nutri = self.rng.gen_range(1.0..100.0);
                let index = self.rng.gen_range(0.0..100.0);
                recipe(i as i64 + 1, &format!("Recept {}", i + 1), "víz", env, nutri, index)
            })
            .collect()
    }
}
