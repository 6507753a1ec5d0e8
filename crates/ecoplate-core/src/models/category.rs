// ABOUTME: Recipe category enumeration with display icons and default score modifiers
// ABOUTME: The variant order is the evaluation order used when deriving a category from text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::placeholders::DEFAULT_CATEGORY_ICON;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dish category of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Soups and stews served as soup
    Soup,
    /// Salads
    Salad,
    /// Meat, fish, and other main dishes
    MainCourse,
    /// Cakes, pastries, sweets
    Dessert,
    /// Drinks and smoothies
    Beverage,
    /// Breakfast dishes
    Breakfast,
    /// Sides and garnishes
    SideDish,
    /// Anything not matched by another category
    #[default]
    Other,
}

impl Category {
    /// All categories in derivation order; `Other` is the fallback and comes last
    pub const ALL: [Self; 8] = [
        Self::Soup,
        Self::Salad,
        Self::MainCourse,
        Self::Dessert,
        Self::Beverage,
        Self::Breakfast,
        Self::SideDish,
        Self::Other,
    ];

    /// Canonical identifier as used in the corpus
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Soup => "soup",
            Self::Salad => "salad",
            Self::MainCourse => "main-course",
            Self::Dessert => "dessert",
            Self::Beverage => "beverage",
            Self::Breakfast => "breakfast",
            Self::SideDish => "side-dish",
            Self::Other => "other",
        }
    }

    /// Parse a category identifier, tolerating case and `_`/space separators
    ///
    /// Returns `None` for unrecognized values so the caller can re-derive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }

    /// Display icon token for this category
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Soup => "🍲",
            Self::Salad => "🥗",
            Self::MainCourse => "🍖",
            Self::Dessert => "🍰",
            Self::Beverage => "🥤",
            Self::Breakfast => "🍳",
            Self::SideDish => "🍚",
            Self::Other => DEFAULT_CATEGORY_ICON,
        }
    }

    /// Default additive sustainability modifier for this category
    #[must_use]
    pub const fn default_modifier(&self) -> f64 {
        match self {
            Self::Salad => 5.0,
            Self::Soup => 3.0,
            Self::Beverage => 2.0,
            Self::Breakfast => 1.0,
            Self::SideDish | Self::Other => 0.0,
            Self::MainCourse => -2.0,
            Self::Dessert => -3.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
