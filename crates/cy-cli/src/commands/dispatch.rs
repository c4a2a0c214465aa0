use cy_config::CyodaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    flags: &GlobalFlags,
    config: &CyodaConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Transfer(args) => commands::transfer::handle(&args, flags, config).await,
        Commands::Model { action } => commands::model::handle(&action, flags, config).await,
        Commands::Entity { action } => commands::entity::handle(&action, flags, config).await,
        Commands::Search { action } => commands::search::handle(&action, flags, config).await,
    }
}
