// ABOUTME: Integration tests for experiment state persistence over memory and JSON-file stores
// ABOUTME: Covers corrupt-value recovery, choice-log append order, and pending search round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod common;

use chrono::Duration;
use common::{fixed_now, init_test_logging, recipe, user_in};
use ecoplate::context::ExperimentContext;
use ecoplate::storage::{ExperimentStore, JsonFileStore, KeyValueStore, MemoryStore};
use ecoplate_core::constants::storage_keys;
use ecoplate_core::models::{Category, ChoiceRecord, TestGroup};
use ecoplate_intelligence::RecommendationEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

fn choice(recipe_id: i64, rank: usize) -> ChoiceRecord {
    ChoiceRecord {
        user_id: "u1".to_owned(),
        test_group: TestGroup::B,
        recipe_id,
        recipe_name: format!("Recept {recipe_id}"),
        recipe_category: Category::Soup,
        rank,
        search_ingredients: "hagyma".to_owned(),
        decision_time_seconds: 2.5,
        sustainability_index: 61.0,
        env_score: 20.0,
        nutri_score: 40.0,
        timestamp: fixed_now(),
    }
}

fn exercise_user_round_trip<S: KeyValueStore>(mut store: ExperimentStore<S>) {
    assert!(store.load_user().unwrap().is_none());

    let user = user_in(TestGroup::C);
    store.save_user(&user).unwrap();
    assert_eq!(store.load_user().unwrap(), Some(user));

    store.clear_user().unwrap();
    assert!(store.load_user().unwrap().is_none());
}

fn exercise_choice_log<S: KeyValueStore>(mut store: ExperimentStore<S>) {
    assert!(store.load_choices().unwrap().is_empty());

    for (id, rank) in [(7, 1), (3, 4), (9, 2)] {
        store.append_choice(&choice(id, rank)).unwrap();
    }
    let ids: Vec<i64> = store
        .load_choices()
        .unwrap()
        .iter()
        .map(|c| c.recipe_id)
        .collect();
    assert_eq!(ids, vec![7, 3, 9]);

    store.clear_choices().unwrap();
    assert!(store.load_choices().unwrap().is_empty());
}

#[test]
fn test_memory_store_user_round_trip() {
    exercise_user_round_trip(ExperimentStore::new(MemoryStore::new()));
}

#[test]
fn test_file_store_user_round_trip() {
    let dir = TempDir::new().unwrap();
    exercise_user_round_trip(ExperimentStore::new(JsonFileStore::new(dir.path())));
}

#[test]
fn test_memory_store_choice_log_keeps_order() {
    exercise_choice_log(ExperimentStore::new(MemoryStore::new()));
}

#[test]
fn test_file_store_choice_log_keeps_order() {
    let dir = TempDir::new().unwrap();
    exercise_choice_log(ExperimentStore::new(JsonFileStore::new(dir.path().join("nested"))));
}

#[test]
fn test_corrupt_user_is_discarded() {
    init_test_logging();
    let mut raw = MemoryStore::new();
    raw.set(storage_keys::CURRENT_USER, "{not json").unwrap();

    let mut store = ExperimentStore::new(raw);
    assert!(store.load_user().unwrap().is_none());
    assert!(store.inner().get(storage_keys::CURRENT_USER).unwrap().is_none());
}

#[test]
fn test_corrupt_choice_log_resets_to_empty() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let mut raw = JsonFileStore::new(dir.path());
    raw.set(storage_keys::USER_CHOICES, r#"{"unexpected": true}"#)
        .unwrap();

    let mut store = ExperimentStore::new(raw);
    assert!(store.load_choices().unwrap().is_empty());

    store.append_choice(&choice(1, 1)).unwrap();
    assert_eq!(store.load_choices().unwrap().len(), 1);
}

#[test]
fn test_legacy_choice_without_scores_loads() {
    let mut raw = MemoryStore::new();
    raw.set(
        storage_keys::USER_CHOICES,
        r#"[{
            "userId": "u1",
            "testGroup": "A",
            "recipeId": 4,
            "recipeName": "Lecsó",
            "rank": 2,
            "searchIngredients": "paprika",
            "decisionTime": 3.25,
            "timestamp": "2025-03-01T12:00:00Z"
        }]"#,
    )
    .unwrap();

    let choices = ExperimentStore::new(raw).load_choices().unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].decision_time_seconds, 3.25);
    assert_eq!(choices[0].sustainability_index, 0.0);
}

#[test]
fn test_pending_search_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = ExperimentStore::new(JsonFileStore::new(dir.path()));

    let corpus = vec![
        recipe(1, "Hagymaleves", "hagyma, vaj", 20.0, 40.0, 62.0),
        recipe(2, "Rakott krumpli", "burgonya, tojás", 35.0, 55.0, 48.0),
    ];
    let context =
        ExperimentContext::new(corpus, user_in(TestGroup::B), RecommendationEngine::default());
    let outcome = context
        .search("hagyma", &mut ChaCha8Rng::seed_from_u64(4), fixed_now())
        .unwrap();

    store.save_pending_search(&outcome).unwrap();
    let restored = store.load_pending_search().unwrap().unwrap();
    assert_eq!(restored, outcome);

    let record = context.select_rank(&restored, 1, fixed_now() + Duration::seconds(4)).unwrap();
    assert_eq!(record.decision_time_seconds, 4.0);

    store.clear_pending_search().unwrap();
    assert!(store.load_pending_search().unwrap().is_none());
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    assert!(store.set("../escape", "{}").is_err());
    assert!(store.get("").is_err());
}
