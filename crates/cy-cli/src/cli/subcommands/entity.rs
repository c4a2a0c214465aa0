use clap::Subcommand;

use super::model::ModelArgs;

/// Entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntityCommands {
    /// Save one entity from a JSON file.
    Create {
        #[command(flatten)]
        model: ModelArgs,
        #[arg(long)]
        file: String,
    },
    /// List one page of entities.
    List {
        #[command(flatten)]
        model: ModelArgs,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long, default_value_t = 0)]
        page_number: u32,
    },
    /// Delete every entity of the model.
    DeleteAll(ModelArgs),
}
