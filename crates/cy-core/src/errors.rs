//! Cross-cutting error types.
//!
//! Remote-call errors live in `cy-client` and `cy-transfer`; the binary
//! converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
