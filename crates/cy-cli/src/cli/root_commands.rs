use clap::{ArgAction, Args, Subcommand, ValueEnum};
use clap::builder::BoolishValueParser;
use cy_transfer::{Direction, Section, SectionToggles};

use crate::cli::subcommands::{EntityCommands, ModelCommands, SearchCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Export or import platform configuration sections.
    Transfer(TransferArgs),
    /// Model definitions.
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Entities of a model.
    Entity {
        #[command(subcommand)]
        action: EntityCommands,
    },
    /// Snapshot searches.
    Search {
        #[command(subcommand)]
        action: SearchCommands,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TransferMode {
    Export,
    Import,
}

impl TransferMode {
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Export => Direction::Export,
            Self::Import => Direction::Import,
        }
    }
}

#[derive(Clone, Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct TransferArgs {
    #[arg(short, long)]
    pub mode: TransferMode,

    /// Folder holding one JSON file per section (created if absent).
    #[arg(long, alias = "folder_for_save_export_configs")]
    pub folder: Option<String>,

    #[arg(long, alias = "need_to_export_distributed_reporting", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub export_distributed_reporting: bool,
    #[arg(long, alias = "need_to_export_stream_data", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub export_stream_data: bool,
    #[arg(long, alias = "need_to_export_alias_catalog", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub export_alias_catalog: bool,
    #[arg(long, alias = "need_to_export_composite_indexes", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub export_composite_indexes: bool,
    #[arg(long, alias = "need_to_export_state_machine", default_value_t = false, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub export_state_machine: bool,
    #[arg(long, alias = "need_to_export_cobi", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub export_cobi: bool,

    #[arg(long, alias = "need_to_import_distributed_reporting", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub import_distributed_reporting: bool,
    #[arg(long, alias = "need_to_import_stream_data", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub import_stream_data: bool,
    #[arg(long, alias = "need_to_import_alias_catalog", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub import_alias_catalog: bool,
    #[arg(long, alias = "need_to_import_composite_indexes", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub import_composite_indexes: bool,
    #[arg(long, alias = "need_to_import_state_machine", default_value_t = false, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub import_state_machine: bool,
    #[arg(long, alias = "need_to_import_cobi", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub import_cobi: bool,
}

impl TransferArgs {
    /// Section flags of one direction.
    #[must_use]
    pub fn toggles(&self, direction: Direction) -> SectionToggles {
        let flags = match direction {
            Direction::Export => [
                self.export_distributed_reporting,
                self.export_stream_data,
                self.export_alias_catalog,
                self.export_composite_indexes,
                self.export_state_machine,
                self.export_cobi,
            ],
            Direction::Import => [
                self.import_distributed_reporting,
                self.import_stream_data,
                self.import_alias_catalog,
                self.import_composite_indexes,
                self.import_state_machine,
                self.import_cobi,
            ],
        };
        Section::ALL
            .into_iter()
            .zip(flags)
            .fold(SectionToggles::none(), |toggles, (section, enabled)| {
                toggles.with(section, enabled)
            })
    }
}
