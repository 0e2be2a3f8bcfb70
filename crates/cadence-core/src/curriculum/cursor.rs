//! Week navigation.

use super::WEEK_COUNT;
use crate::models::Phase;

/// The currently selected week, always within 1..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    week: u8,
}

impl WeekCursor {
    /// Starts at `week`, clamped into range.
    pub fn new(week: u8) -> Self {
        Self {
            week: week.clamp(1, WEEK_COUNT),
        }
    }

    pub fn week(&self) -> u8 {
        self.week
    }

    pub fn is_first(&self) -> bool {
        self.week == 1
    }

    pub fn is_last(&self) -> bool {
        self.week == WEEK_COUNT
    }

    /// Moves one week back, stopping at week 1.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::new(self.week.saturating_sub(1))
    }

    /// Moves one week forward, stopping at week 23.
    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.week.saturating_add(1))
    }

    /// Jumps to the first week of `phase`.
    #[must_use]
    pub fn jump_to_phase(self, phase: &Phase) -> Self {
        phase.first_week().map_or(self, Self::new)
    }
}

impl Default for WeekCursor {
    fn default() -> Self {
        Self::new(1)
    }
}
