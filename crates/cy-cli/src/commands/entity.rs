use std::path::Path;

use cy_client::model::read_json_file;
use cy_config::CyodaConfig;
use cy_core::{ModelRef, PageRequest};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntityCommands;
use crate::output::output;

#[derive(Serialize)]
struct EntityCreateResponse {
    model: ModelRef,
    entity_id: String,
}

#[derive(Serialize)]
struct EntityDeleteResponse {
    model: ModelRef,
    deleted: u64,
}

/// Handle `cyctl entity`.
pub async fn handle(
    action: &EntityCommands,
    flags: &GlobalFlags,
    config: &CyodaConfig,
) -> anyhow::Result<()> {
    let session = bootstrap::connect(flags, config).await?;

    match action {
        EntityCommands::Create { model, file } => {
            let model = model.model_ref();
            let payload = read_json_file(Path::new(file))?;
            let entity_id = session.create_entity(&model, &payload).await?;
            output(&EntityCreateResponse { model, entity_id }, flags.format)
        }
        EntityCommands::List {
            model,
            page_size,
            page_number,
        } => {
            let page = PageRequest {
                page_size: page_size.unwrap_or(config.search.page_size),
                page_number: *page_number,
            };
            let entities = session.get_all_entities(&model.model_ref(), page).await?;
            output(&entities, flags.format)
        }
        EntityCommands::DeleteAll(args) => {
            let model = args.model_ref();
            let deleted = session.delete_all_entities(&model).await?;
            output(&EntityDeleteResponse { model, deleted }, flags.format)
        }
    }
}
