//! Snapshot search identifiers and statuses.
//!
//! A snapshot search is a server-side query job. It is submitted once,
//! polled through its status endpoint, and its result pages can be fetched
//! only after it reports `SUCCESSFUL`.
//!
//! ```text
//! submitted → RUNNING → SUCCESSFUL
//!                     → <any other value>   (terminal failure)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// Field carrying the status in a snapshot status payload.
pub const STATUS_FIELD: &str = "snapshotStatus";

/// Field the client adds to a completed search payload.
pub const SNAPSHOT_ID_FIELD: &str = "snapshotId";

/// Server-assigned identifier of a snapshot search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(String);

impl SnapshotId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the identifier from the body returned by the submit endpoint.
    ///
    /// The endpoint answers with a bare JSON string; numbers are accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for any other JSON shape or an empty id.
    pub fn from_response(body: &Value) -> Result<Self, CoreError> {
        let id = match body {
            Value::String(id) => id.trim().to_string(),
            Value::Number(id) => id.to_string(),
            other => {
                return Err(CoreError::Validation(format!(
                    "snapshot search response is not an id: {other}"
                )));
            }
        };
        if id.is_empty() {
            return Err(CoreError::Validation(
                "snapshot search response carried an empty id".into(),
            ));
        }
        Ok(Self(id))
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of a snapshot search as reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotStatus {
    Running,
    Successful,
    /// Any other reported value. Terminal.
    Failed(String),
    /// The payload had no usable status field. Treated as terminal.
    Missing,
}

impl SnapshotStatus {
    /// Read the status from a full status payload.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        match payload.get(STATUS_FIELD).and_then(Value::as_str) {
            Some("RUNNING") => Self::Running,
            Some("SUCCESSFUL") => Self::Successful,
            Some(other) => Self::Failed(other.to_string()),
            None => Self::Missing,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for SnapshotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("RUNNING"),
            Self::Successful => f.write_str("SUCCESSFUL"),
            Self::Failed(raw) => f.write_str(raw),
            Self::Missing => f.write_str("<missing>"),
        }
    }
}
