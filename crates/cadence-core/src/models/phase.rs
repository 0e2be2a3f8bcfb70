//! Phase model: named groups of consecutive weeks.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Presentation tag attached to a phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhaseColor {
    Blue,
    Emerald,
    Indigo,
    Rose,
}

impl PhaseColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseColor::Blue => "blue",
            PhaseColor::Emerald => "emerald",
            PhaseColor::Indigo => "indigo",
            PhaseColor::Rose => "rose",
        }
    }
}

/// A named grouping of weeks sharing a pedagogical goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Phase identifier (1-based)
    pub id: u8,

    /// Display name
    pub name: String,

    /// Week numbers belonging to the phase
    pub weeks: Vec<u8>,

    /// What the phase is meant to achieve
    pub goal: String,

    /// Opaque presentation tag
    pub color: PhaseColor,
}

impl Phase {
    pub(crate) fn new(
        id: u8,
        name: &str,
        weeks: RangeInclusive<u8>,
        goal: &str,
        color: PhaseColor,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            weeks: weeks.collect(),
            goal: goal.to_string(),
            color,
        }
    }

    /// Returns true if `week` belongs to this phase.
    pub fn contains(&self, week: u8) -> bool {
        self.weeks.contains(&week)
    }

    /// The week a phase quick-jump lands on.
    pub fn first_week(&self) -> Option<u8> {
        self.weeks.iter().copied().min()
    }
}
