//! Client error types.

use std::time::Duration;

use thiserror::Error;

/// Errors raised by [`crate::Session`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login or token exchange failed.
    #[error(transparent)]
    Auth(#[from] cy_auth::AuthError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a status other than 200.
    #[error("{operation} failed ({status}): {body}")]
    Api {
        /// What was being attempted, including the model or snapshot involved.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// A snapshot search reached a terminal status other than `SUCCESSFUL`.
    #[error("snapshot search failed with status {status}: {payload}")]
    SearchFailed {
        /// The reported status (`<missing>` if the field was absent).
        status: String,
        /// The full status payload.
        payload: serde_json::Value,
    },

    /// A snapshot search was still running when the poll timeout elapsed.
    #[error("snapshot search still running after {}s", timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    /// Reading a local input file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A local input file or a response body is not the JSON we expected.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A 200 response whose body lacks a field the operation needs.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The client could not be constructed.
    #[error("client configuration error: {0}")]
    Config(String),
}

impl From<cy_core::CoreError> for ClientError {
    fn from(error: cy_core::CoreError) -> Self {
        Self::UnexpectedResponse(error.to_string())
    }
}
