// ABOUTME: Experiment arm and participant models for the A/B/C recipe trial
// ABOUTME: Defines TestGroup with its presentation rules and the registered User record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Experiment arm a participant is bucketed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestGroup {
    /// Control: shuffled results, no scores
    A,
    /// Sustainability-ranked results with scores shown
    B,
    /// Sustainability-ranked results with scores and explanations
    C,
}

impl TestGroup {
    /// Arms in bucket order; `assign_group` indexes into this array
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Single-letter label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Human-readable description of the arm
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Control group",
            Self::B => "Sustainability scores",
            Self::C => "Sustainability scores + explanations",
        }
    }

    /// Whether results are ordered by the sustainability ranking
    #[must_use]
    pub const fn is_sustainability_ranked(&self) -> bool {
        matches!(self, Self::B | Self::C)
    }

    /// Whether score values are shown alongside each recipe
    #[must_use]
    pub const fn shows_scores(&self) -> bool {
        matches!(self, Self::B | Self::C)
    }

    /// Whether a generated explanation is shown alongside each recipe
    #[must_use]
    pub const fn shows_explanation(&self) -> bool {
        matches!(self, Self::C)
    }
}

impl fmt::Display for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered participant
///
/// Serialized with camel-case keys, matching the persisted record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Generated id: epoch milliseconds followed by a random base-36 suffix
    pub id: String,
    /// Contact e-mail as entered at registration
    pub email: String,
    /// Assigned experiment arm
    pub test_group: TestGroup,
    /// Registration time
    pub registered_at: DateTime<Utc>,
}
