// ABOUTME: Criterion benchmarks for the recommendation pipeline
// ABOUTME: Measures curation, tiered matching, dead-band ranking, and full recommend calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation engine.
//!
//! Corpora are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ecoplate_core::models::{RawRecipe, SearchQuery, TestGroup};
use ecoplate_intelligence::config::RankingConfig;
use ecoplate_intelligence::ranking::{balanced_mix, sort_dead_band, DeadBands};
use ecoplate_intelligence::RecommendationEngine;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const INGREDIENTS: [&str; 10] = [
    "csirke", "hagyma", "paradicsom", "burgonya", "répa", "tojás", "liszt", "tej", "bab", "rizs",
];

/// Generate a raw corpus of `count` records
#[allow(clippy::cast_possible_wrap)]
fn generate_corpus(count: usize) -> Vec<RawRecipe> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xEC0);
    (0..count)
        .map(|index| {
            let picked: Vec<&str> = INGREDIENTS.choose_multiple(&mut rng, 4).copied().collect();
            RawRecipe {
                recipeid: Some(index as i64 + 1),
                name: Some(format!("Recept {index}")),
                ingredients: Some(picked.join(", ")),
                env_score: Some(rng.gen_range(1.0..90.0)),
                nutri_score: Some(rng.gen_range(1.0..100.0)),
                ..RawRecipe::default()
            }
        })
        .collect()
}

fn bench_curation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curation");
    let engine = RecommendationEngine::default();

    for count in [100, 1_000, 10_000] {
        let corpus = generate_corpus(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("curate", count), &corpus, |b, corpus| {
            b.iter(|| engine.curate(black_box(corpus)));
        });
    }

    group.finish();
}

fn bench_dead_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("dead_band");
    let engine = RecommendationEngine::default();
    let bands = DeadBands::from(&RankingConfig::default());
    let candidates = engine.curate(&generate_corpus(10)).recipes;

    group.bench_function("sort_ten", |b| {
        b.iter(|| sort_dead_band(black_box(candidates.clone()), bands));
    });
    group.bench_function("balanced_mix_ten", |b| {
        b.iter(|| balanced_mix(black_box(candidates.clone()), bands));
    });

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let engine = RecommendationEngine::default();
    let corpus = engine.curate(&generate_corpus(5_000)).recipes;

    for (label, raw_query) in [
        ("exact", "csirke, hagyma"),
        ("partial", "paradicsomos"),
        ("backfill", "sárkánygyümölcs"),
    ] {
        let query = SearchQuery::parse(raw_query);
        for test_group in TestGroup::ALL {
            group.bench_with_input(
                BenchmarkId::new(label, test_group),
                &query,
                |b, query| {
                    let mut rng = ChaCha8Rng::seed_from_u64(7);
                    b.iter(|| engine.recommend(black_box(&corpus), query, test_group, &mut rng));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_curation, bench_dead_band, bench_recommend);
criterion_main!(benches);
