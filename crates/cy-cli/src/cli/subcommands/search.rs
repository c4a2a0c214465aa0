use clap::Subcommand;

use super::model::ModelArgs;

/// Snapshot search commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SearchCommands {
    /// Submit a search condition and wait for it to finish.
    Run {
        #[command(flatten)]
        model: ModelArgs,
        /// JSON file with the search condition.
        #[arg(long)]
        condition: String,
        /// Give up after this many seconds of RUNNING.
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Pause between status checks, in milliseconds.
        #[arg(long)]
        interval_millis: Option<u64>,
    },
    /// Show the status of a snapshot search.
    Status { snapshot_id: String },
    /// Fetch one page of a successful search.
    Result {
        snapshot_id: String,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long, default_value_t = 0)]
        page_number: u32,
    },
}
