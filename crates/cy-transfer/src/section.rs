//! Configuration sections and their endpoints.

use std::fmt;

use serde::Serialize;

/// Whether a run downloads configuration or uploads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Export,
    Import,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Import => "import",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configuration category, with a fixed endpoint pair and file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    DistributedReporting,
    StreamData,
    AliasCatalog,
    CompositeIndexes,
    Statemachine,
    Cobi,
}

impl Section {
    /// Every section, in the order both directions process them.
    pub const ALL: [Self; 6] = [
        Self::DistributedReporting,
        Self::StreamData,
        Self::AliasCatalog,
        Self::CompositeIndexes,
        Self::Statemachine,
        Self::Cobi,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DistributedReporting => "distributed_reporting",
            Self::StreamData => "stream_data",
            Self::AliasCatalog => "alias_catalog",
            Self::CompositeIndexes => "composite_indexes",
            Self::Statemachine => "statemachine",
            Self::Cobi => "cobi",
        }
    }

    /// GET endpoint, relative to the API base URL.
    #[must_use]
    pub const fn export_path(self) -> &'static str {
        match self {
            Self::DistributedReporting => "/platform-api/reporting/export-all",
            Self::StreamData => "/platform-api/stream-data/export-all",
            Self::AliasCatalog => "/platform-api/catalog/item/export-all",
            Self::CompositeIndexes => "/platform-common/composite-indexes/export-all",
            Self::Statemachine => "/platform-api/statemachine/export?includeIds=",
            Self::Cobi => "/data-source-config/export-all-cobi",
        }
    }

    /// POST endpoint, relative to the API base URL.
    #[must_use]
    pub const fn import_path(self) -> &'static str {
        match self {
            Self::DistributedReporting => "/platform-api/reporting/import",
            Self::StreamData => "/platform-api/stream-data/import",
            Self::AliasCatalog => "/platform-api/catalog/item/import?needRewrite=true",
            Self::CompositeIndexes => "/platform-common/composite-indexes/import",
            Self::Statemachine => "/platform-api/statemachine/import?needRewrite=true",
            Self::Cobi => "/data-source-config/import-cobi-config?doPostProcess=true",
        }
    }

    #[must_use]
    pub const fn path_for(self, direction: Direction) -> &'static str {
        match direction {
            Direction::Export => self.export_path(),
            Direction::Import => self.import_path(),
        }
    }

    /// Local file name inside the transfer folder.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::DistributedReporting => "distributed_reporting.json",
            Self::StreamData => "stream_data.json",
            Self::AliasCatalog => "alias_catalog.json",
            Self::CompositeIndexes => "composite_indexes.json",
            Self::Statemachine => "statemachine.json",
            Self::Cobi => "cobi.json",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
