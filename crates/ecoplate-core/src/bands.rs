// ABOUTME: Thermometer-style score bands shared by explanations and display color-coding
// ABOUTME: Classifies sustainability, environmental, and nutritional scores into named levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Score bands
//!
//! The boundaries live in [`crate::constants`]. Explanation text and the
//! presentation layer both classify through these types, so a recipe shown as
//! "good" is never described as "moderate".

use crate::constants::{environment_bands, nutrition_bands, sustainability_bands};
use serde::{Deserialize, Serialize};

/// Sustainability index level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainabilityBand {
    /// 75 and above
    Excellent,
    /// 60 to below 75
    Good,
    /// 40 to below 60
    Moderate,
    /// 20 to below 40
    NeedsImprovement,
    /// Below 20
    Poor,
}

impl SustainabilityBand {
    /// Classify a sustainability index
    #[must_use]
    pub fn classify(index: f64) -> Self {
        if index >= sustainability_bands::EXCELLENT_MIN {
            Self::Excellent
        } else if index >= sustainability_bands::GOOD_MIN {
            Self::Good
        } else if index >= sustainability_bands::MODERATE_MIN {
            Self::Moderate
        } else if index >= sustainability_bands::NEEDS_IMPROVEMENT_MIN {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    /// Label used in explanations
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::NeedsImprovement => "needs improvement",
            Self::Poor => "poor",
        }
    }

    /// Thermometer fill level, 5 (best) to 1 (worst)
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Moderate => 3,
            Self::NeedsImprovement => 2,
            Self::Poor => 1,
        }
    }
}

/// Environmental impact level (lower scores are better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentBand {
    /// 20 and below
    Excellent,
    /// Above 20 up to 40
    Good,
    /// Above 40 up to 60
    Moderate,
    /// Above 60
    HighImpact,
}

impl EnvironmentBand {
    /// Classify an environmental score
    #[must_use]
    pub fn classify(env_score: f64) -> Self {
        if env_score <= environment_bands::EXCELLENT_MAX {
            Self::Excellent
        } else if env_score <= environment_bands::GOOD_MAX {
            Self::Good
        } else if env_score <= environment_bands::MODERATE_MAX {
            Self::Moderate
        } else {
            Self::HighImpact
        }
    }

    /// Label used in explanations
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent environmental",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::HighImpact => "high impact",
        }
    }

    /// Thermometer fill level, 4 (best) to 1 (worst)
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Excellent => 4,
            Self::Good => 3,
            Self::Moderate => 2,
            Self::HighImpact => 1,
        }
    }
}

/// Nutritional value level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionBand {
    /// 70 and above
    Excellent,
    /// 50 to below 70
    Good,
    /// 30 to below 50
    Moderate,
    /// Below 30
    Low,
}

impl NutritionBand {
    /// Classify a nutritional score
    #[must_use]
    pub fn classify(nutri_score: f64) -> Self {
        if nutri_score >= nutrition_bands::EXCELLENT_MIN {
            Self::Excellent
        } else if nutri_score >= nutrition_bands::GOOD_MIN {
            Self::Good
        } else if nutri_score >= nutrition_bands::MODERATE_MIN {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Label used in explanations
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent nutrition",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }

    /// Thermometer fill level, 4 (best) to 1 (worst)
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Excellent => 4,
            Self::Good => 3,
            Self::Moderate => 2,
            Self::Low => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sustainability_boundaries_are_inclusive() {
        assert_eq!(SustainabilityBand::classify(75.0), SustainabilityBand::Excellent);
        assert_eq!(SustainabilityBand::classify(74.99), SustainabilityBand::Good);
        assert_eq!(SustainabilityBand::classify(60.0), SustainabilityBand::Good);
        assert_eq!(SustainabilityBand::classify(40.0), SustainabilityBand::Moderate);
        assert_eq!(
            SustainabilityBand::classify(20.0),
            SustainabilityBand::NeedsImprovement
        );
        assert_eq!(SustainabilityBand::classify(19.9), SustainabilityBand::Poor);
    }

    #[test]
    fn test_environment_lower_is_better() {
        assert_eq!(EnvironmentBand::classify(20.0), EnvironmentBand::Excellent);
        assert_eq!(EnvironmentBand::classify(20.1), EnvironmentBand::Good);
        assert_eq!(EnvironmentBand::classify(60.0), EnvironmentBand::Moderate);
        assert_eq!(EnvironmentBand::classify(60.5), EnvironmentBand::HighImpact);
    }

    #[test]
    fn test_nutrition_boundaries() {
        assert_eq!(NutritionBand::classify(70.0), NutritionBand::Excellent);
        assert_eq!(NutritionBand::classify(50.0), NutritionBand::Good);
        assert_eq!(NutritionBand::classify(30.0), NutritionBand::Moderate);
        assert_eq!(NutritionBand::classify(29.9), NutritionBand::Low);
    }

    #[test]
    fn test_levels_decrease_with_band() {
        assert!(SustainabilityBand::Excellent.level() > SustainabilityBand::Poor.level());
        assert!(EnvironmentBand::Excellent.level() > EnvironmentBand::HighImpact.level());
        assert!(NutritionBand::Excellent.level() > NutritionBand::Low.level());
    }
}
