use std::path::Path;
use std::time::Duration;

use cy_client::PollOptions;
use cy_client::model::read_json_file;
use cy_config::CyodaConfig;
use cy_core::{PageRequest, SnapshotId};
use serde_json::Value;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::SearchCommands;
use crate::output::output;
use crate::progress::Progress;

/// Timestamp fields of a snapshot status that get a local-time twin.
const TIME_FIELDS: [&str; 3] = ["createTime", "startTime", "finishTime"];

/// Handle `cyctl search`.
pub async fn handle(
    action: &SearchCommands,
    flags: &GlobalFlags,
    config: &CyodaConfig,
) -> anyhow::Result<()> {
    let session = bootstrap::connect(flags, config).await?;

    match action {
        SearchCommands::Run {
            model,
            condition,
            timeout_secs,
            interval_millis,
        } => {
            let model = model.model_ref();
            let condition = read_json_file(Path::new(condition))?;
            let options = poll_options(config, *timeout_secs, *interval_millis);

            let progress = Progress::spinner(&format!("searching {model}"));
            let result = session.search_entities(&model, &condition, options).await;
            match result {
                Ok(payload) => {
                    progress.finish_clear();
                    output(&with_local_times(payload), flags.format)
                }
                Err(error) => {
                    progress.finish_err("search did not succeed");
                    Err(error.into())
                }
            }
        }
        SearchCommands::Status { snapshot_id } => {
            let status = session
                .get_snapshot_status(&SnapshotId::new(snapshot_id.clone()))
                .await?;
            output(&with_local_times(status), flags.format)
        }
        SearchCommands::Result {
            snapshot_id,
            page_size,
            page_number,
        } => {
            let page = PageRequest {
                page_size: page_size.unwrap_or(config.search.page_size),
                page_number: *page_number,
            };
            let result = session
                .get_search_result(&SnapshotId::new(snapshot_id.clone()), page)
                .await?;
            output(&result, flags.format)
        }
    }
}

fn poll_options(
    config: &CyodaConfig,
    timeout_secs: Option<u64>,
    interval_millis: Option<u64>,
) -> PollOptions {
    PollOptions {
        timeout: timeout_secs.map_or_else(|| config.search.timeout(), Duration::from_secs),
        interval: interval_millis.map_or_else(|| config.search.interval(), Duration::from_millis),
    }
}

/// Add `<field>Local` next to every known timestamp field that parses.
fn with_local_times(mut payload: Value) -> Value {
    if let Value::Object(map) = &mut payload {
        for field in TIME_FIELDS {
            let Some(raw) = map.get(field).and_then(Value::as_str) else {
                continue;
            };
            match cy_core::time::to_local_time(raw) {
                Ok(local) => {
                    map.insert(format!("{field}Local"), Value::String(local));
                }
                Err(error) => tracing::debug!(field, %error, "timestamp left as is"),
            }
        }
    }
    payload
}
