use anyhow::Context;
use cy_config::CyodaConfig;
use cy_transfer::TransferContext;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::TransferArgs;
use crate::output::output;
use crate::progress::Progress;

/// Handle `cyctl transfer`.
pub async fn handle(
    args: &TransferArgs,
    flags: &GlobalFlags,
    config: &CyodaConfig,
) -> anyhow::Result<()> {
    let folder = args
        .folder
        .clone()
        .or_else(|| config.transfer.folder.clone())
        .context("no folder: pass --folder or set CYODA_TRANSFER__FOLDER")?;
    let direction = args.mode.direction();
    let toggles = args.toggles(direction);

    let host = bootstrap::host(flags, config)?;
    let credentials = bootstrap::credentials(flags, config)?;
    let ctx = TransferContext::login(bootstrap::http_client(config)?, &host, &credentials, folder)
        .await
        .with_context(|| format!("failed to log in to {host}"))?;

    let progress = Progress::spinner(&format!("{direction} configs"));
    match ctx.run(direction, &toggles).await {
        Ok(report) => {
            progress.finish_clear();
            output(&report, flags.format)
        }
        Err(error) => {
            progress.finish_err(&format!("{direction} aborted"));
            Err(error).with_context(|| format!("{direction} of {} failed", ctx.folder().display()))
        }
    }
}
