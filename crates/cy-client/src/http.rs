//! Shared HTTP response helpers.
//!
//! Every wrapped endpoint treats exactly `200 OK` as success; anything else
//! becomes [`ClientError::Api`] with the status and the body text.

use crate::error::ClientError;

/// Return the response unchanged if it is `200 OK`.
pub async fn check_response(
    resp: reqwest::Response,
    operation: &str,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(ClientError::Api {
            operation: operation.to_string(),
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
