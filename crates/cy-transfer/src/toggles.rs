//! Per-section enable flags.

use serde::Serialize;

use crate::section::Section;

/// One enable flag per section.
///
/// Defaults enable everything except the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SectionToggles {
    pub distributed_reporting: bool,
    pub stream_data: bool,
    pub alias_catalog: bool,
    pub composite_indexes: bool,
    pub statemachine: bool,
    pub cobi: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            distributed_reporting: true,
            stream_data: true,
            alias_catalog: true,
            composite_indexes: true,
            statemachine: false,
            cobi: true,
        }
    }
}

impl SectionToggles {
    /// Every section enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self::uniform(true)
    }

    /// Every section disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self::uniform(false)
    }

    const fn uniform(enabled: bool) -> Self {
        Self {
            distributed_reporting: enabled,
            stream_data: enabled,
            alias_catalog: enabled,
            composite_indexes: enabled,
            statemachine: enabled,
            cobi: enabled,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, section: Section) -> bool {
        match section {
            Section::DistributedReporting => self.distributed_reporting,
            Section::StreamData => self.stream_data,
            Section::AliasCatalog => self.alias_catalog,
            Section::CompositeIndexes => self.composite_indexes,
            Section::Statemachine => self.statemachine,
            Section::Cobi => self.cobi,
        }
    }

    pub const fn set(&mut self, section: Section, enabled: bool) {
        let flag = match section {
            Section::DistributedReporting => &mut self.distributed_reporting,
            Section::StreamData => &mut self.stream_data,
            Section::AliasCatalog => &mut self.alias_catalog,
            Section::CompositeIndexes => &mut self.composite_indexes,
            Section::Statemachine => &mut self.statemachine,
            Section::Cobi => &mut self.cobi,
        };
        *flag = enabled;
    }

    #[must_use]
    pub const fn with(mut self, section: Section, enabled: bool) -> Self {
        self.set(section, enabled);
        self
    }
}
