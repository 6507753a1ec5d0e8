// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Score band boundaries, engine defaults, and persisted storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Band boundaries are part of the contract between the engine and the
//! presentation layer: explanations and color-coding must agree on them.

/// Sustainability index band boundaries (inclusive lower bounds)
pub mod sustainability_bands {
    /// Index at or above this value is "excellent"
    pub const EXCELLENT_MIN: f64 = 75.0;
    /// Index at or above this value is "good"
    pub const GOOD_MIN: f64 = 60.0;
    /// Index at or above this value is "moderate"
    pub const MODERATE_MIN: f64 = 40.0;
    /// Index at or above this value "needs improvement"; below is "poor"
    pub const NEEDS_IMPROVEMENT_MIN: f64 = 20.0;
}

/// Environmental score band boundaries (inclusive upper bounds, lower is better)
pub mod environment_bands {
    /// Score at or below this value is "excellent"
    pub const EXCELLENT_MAX: f64 = 20.0;
    /// Score at or below this value is "good"
    pub const GOOD_MAX: f64 = 40.0;
    /// Score at or below this value is "moderate"; above is "high impact"
    pub const MODERATE_MAX: f64 = 60.0;
}

/// Nutritional score band boundaries (inclusive lower bounds)
pub mod nutrition_bands {
    /// Score at or above this value is "excellent"
    pub const EXCELLENT_MIN: f64 = 70.0;
    /// Score at or above this value is "good"
    pub const GOOD_MIN: f64 = 50.0;
    /// Score at or above this value is "moderate"; below is "low"
    pub const MODERATE_MIN: f64 = 30.0;
}

/// Sustainability index scale
pub mod sustainability {
    /// Lowest possible index
    pub const MIN_INDEX: f64 = 0.0;
    /// Highest possible index
    pub const MAX_INDEX: f64 = 100.0;
}

/// Keys under which the caller persists experiment state
pub mod storage_keys {
    /// Current registered user record
    pub const CURRENT_USER: &str = "recipeUser";
    /// Append-only list of choice records
    pub const USER_CHOICES: &str = "userChoices";
    /// Most recent search awaiting a selection
    pub const PENDING_SEARCH: &str = "pendingSearch";
}

/// Placeholder values used when curating incomplete records
pub mod placeholders {
    /// Ingredient text used when a record has none
    pub const MISSING_INGREDIENTS: &str = "Ingredients not available";
    /// Icon used for categories without a dedicated icon
    pub const DEFAULT_CATEGORY_ICON: &str = "🍽️";
}

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the CLI and library logs
    pub const ECOPLATE: &str = "ecoplate";
}
