//! Export/import defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransferConfig {
    /// Folder used when `--folder` is not given.
    #[serde(default)]
    pub folder: Option<String>,
}
