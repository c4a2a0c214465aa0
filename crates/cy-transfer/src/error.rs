//! Transfer error types.

use cy_auth::AuthError;
use thiserror::Error;

use crate::section::{Direction, Section};

/// Errors that abort an export or import run.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A section endpoint answered with anything but `200 OK`.
    #[error("can not {direction} {section} via {endpoint} ({status}): {body}")]
    Api {
        section: Section,
        direction: Direction,
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
