//! Collection wrapper types for phases and per-phase progress.

use std::fmt;

use crate::models::{Phase, PhaseProgress, ProgressSummary};

/// The phase list, with the phase of the current week highlighted.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{curriculum::phases, display::PhaseList};
///
/// let phases = phases();
/// let output = PhaseList::new(&phases).with_current_week(8).to_string();
/// assert!(output.contains("**2. 技能提升期"));
/// ```
pub struct PhaseList<'a> {
    phases: &'a [Phase],
    current_week: Option<u8>,
}

impl<'a> PhaseList<'a> {
    pub fn new(phases: &'a [Phase]) -> Self {
        Self {
            phases,
            current_week: None,
        }
    }

    /// Highlights the phase containing `week`.
    pub fn with_current_week(mut self, week: u8) -> Self {
        self.current_week = Some(week);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }
}

impl fmt::Display for PhaseList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.phases.is_empty() {
            return writeln!(f, "No phases defined.");
        }

        writeln!(f, "# Phases")?;
        writeln!(f)?;
        for phase in self.phases {
            let current = self.current_week.is_some_and(|week| phase.contains(week));
            if current {
                writeln!(f, "- **{phase}** ◀")?;
            } else {
                writeln!(f, "- {phase}")?;
            }
        }
        Ok(())
    }
}

/// Overall completion followed by a line per phase.
#[derive(Debug, Clone)]
pub struct ProgressReport {
    pub overall: ProgressSummary,
    pub phases: Vec<PhaseProgress>,
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Overall Progress: {}", self.overall)?;
        writeln!(f)?;
        for phase in &self.phases {
            writeln!(f, "- {}. {}: {}", phase.phase_id, phase.name, phase.summary)?;
        }
        Ok(())
    }
}
