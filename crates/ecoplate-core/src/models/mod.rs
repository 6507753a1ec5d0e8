// ABOUTME: Core data models for the recipe experiment harness
// ABOUTME: Re-exports recipe, category, experiment, and choice types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Dish categories with icons and default modifiers
pub mod category;
/// Choice log entries
pub mod choice;
/// Experiment arms and participants
pub mod experiment;
/// Raw and curated recipes, search queries
pub mod recipe;

pub use category::Category;
pub use choice::ChoiceRecord;
pub use experiment::{TestGroup, User};
pub use recipe::{RawRecipe, Recipe, RecipeId, SearchQuery};
