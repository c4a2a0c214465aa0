use std::path::Path;

use cy_client::model::read_json_file;
use cy_config::CyodaConfig;
use cy_core::ModelRef;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModelCommands;
use crate::output::output;

#[derive(Serialize)]
struct ModelExistsResponse {
    model: ModelRef,
    exists: bool,
}

#[derive(Serialize)]
struct ModelStateResponse {
    model: ModelRef,
    state: String,
}

#[derive(Serialize)]
struct ModelActionResponse {
    model: ModelRef,
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_id: Option<String>,
}

/// Handle `cyctl model`.
pub async fn handle(
    action: &ModelCommands,
    flags: &GlobalFlags,
    config: &CyodaConfig,
) -> anyhow::Result<()> {
    let session = bootstrap::connect(flags, config).await?;

    match action {
        ModelCommands::Exists(args) => {
            let model = args.model_ref();
            let exists = session.model_exists(&model).await;
            output(&ModelExistsResponse { model, exists }, flags.format)
        }
        ModelCommands::Get(args) => {
            let exported = session.get_model(&args.model_ref()).await?;
            output(&exported, flags.format)
        }
        ModelCommands::State(args) => {
            let model = args.model_ref();
            let state = session.get_model_state(&model).await?;
            output(
                &ModelStateResponse {
                    model,
                    state: state.as_str().to_string(),
                },
                flags.format,
            )
        }
        ModelCommands::Lock(args) => {
            let model = args.model_ref();
            session.lock_model(&model).await?;
            output(&action_response(model, "locked", None), flags.format)
        }
        ModelCommands::Unlock(args) => {
            let model = args.model_ref();
            session.unlock_model(&model).await?;
            output(&action_response(model, "unlocked", None), flags.format)
        }
        ModelCommands::Delete(args) => {
            let model = args.model_ref();
            session.delete_model(&model).await?;
            output(&action_response(model, "deleted", None), flags.format)
        }
        ModelCommands::Derive { model, file } => {
            let model = model.model_ref();
            let sample = read_json_file(Path::new(file))?;
            let id = session.derive_model_from_sample_data(&model, &sample).await?;
            output(&action_response(model, "derived", Some(id)), flags.format)
        }
        ModelCommands::Reset { model, file } => {
            let outcome = session.reset_model(&model.model_ref(), Path::new(file)).await?;
            output(&outcome, flags.format)
        }
    }
}

fn action_response(
    model: ModelRef,
    action: &'static str,
    model_id: Option<String>,
) -> ModelActionResponse {
    ModelActionResponse {
        model,
        action,
        model_id,
    }
}
