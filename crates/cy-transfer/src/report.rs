//! Result of a completed run.

use std::path::PathBuf;

use serde::Serialize;

use crate::section::{Direction, Section};

/// What happened to one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Transferred { section: Section, path: PathBuf },
    Skipped { section: Section },
}

impl SectionOutcome {
    #[must_use]
    pub const fn is_transferred(&self) -> bool {
        matches!(self, Self::Transferred { .. })
    }
}

/// Every section of a run, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub direction: Direction,
    pub folder: PathBuf,
    pub sections: Vec<SectionOutcome>,
}

impl TransferReport {
    #[must_use]
    pub fn transferred(&self) -> usize {
        self.sections.iter().filter(|s| s.is_transferred()).count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.sections.len() - self.transferred()
    }
}
