//! Display implementations for plain domain models.

use std::fmt;

use crate::models::{Phase, PhaseColor, ProgressSummary, Task};

impl fmt::Display for PhaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% ({}/{})", self.percent(), self.completed, self.total)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.label, self.id)?;
        if let Some(desc) = &self.description {
            write!(f, " - {desc}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.name)?;
        match (self.weeks.iter().min(), self.weeks.iter().max()) {
            (Some(first), Some(last)) if first != last => write!(f, " (weeks {first}-{last})")?,
            (Some(only), _) => write!(f, " (week {only})")?,
            _ => {}
        }
        write!(f, ": {}", self.goal)
    }
}
