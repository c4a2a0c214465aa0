//! Snapshot search: submit, poll to a terminal status, fetch result pages.

use std::future::Future;
use std::time::Duration;

use cy_core::search::SNAPSHOT_ID_FIELD;
use cy_core::{ModelRef, PageRequest, SnapshotId, SnapshotStatus};
use reqwest::Method;
use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::{ClientError, Session, http::check_response};

/// Poll loop bounds. The two durations are independent: `timeout` bounds the
/// total time spent polling, `interval` is the pause between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            interval: Duration::from_millis(10),
        }
    }
}

/// Drives a status source until the search reaches a terminal status.
///
/// Each round fetches the status, then:
/// - `SUCCESSFUL` → returns the full payload
/// - anything but `RUNNING` (including a missing status) → [`ClientError::SearchFailed`]
/// - `RUNNING` past the timeout → [`ClientError::Timeout`]
/// - `RUNNING` otherwise → sleeps one interval and polls again
#[derive(Debug, Clone)]
pub struct SearchPoller<C = SystemClock> {
    clock: C,
    options: PollOptions,
}

impl<C: Clock> SearchPoller<C> {
    #[must_use]
    pub const fn new(clock: C, options: PollOptions) -> Self {
        Self { clock, options }
    }

    /// Run the loop against `fetch_status`.
    ///
    /// # Errors
    ///
    /// Returns the first error from `fetch_status`, [`ClientError::SearchFailed`]
    /// on a terminal non-success status, or [`ClientError::Timeout`].
    pub async fn poll<F, Fut>(&self, mut fetch_status: F) -> Result<Value, ClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Value, ClientError>>,
    {
        let start = self.clock.now();

        loop {
            let payload = fetch_status().await?;
            let status = SnapshotStatus::from_payload(&payload);
            tracing::debug!(%status, "snapshot status polled");

            if status == SnapshotStatus::Successful {
                return Ok(payload);
            }
            if status.is_terminal() {
                return Err(ClientError::SearchFailed {
                    status: status.to_string(),
                    payload,
                });
            }

            let elapsed = self.clock.now().saturating_sub(start);
            if elapsed > self.options.timeout {
                return Err(ClientError::Timeout {
                    timeout: self.options.timeout,
                });
            }

            self.clock.sleep(self.options.interval).await;
        }
    }
}

impl Session {
    /// Submit a search condition. Returns the snapshot id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn create_snapshot_search(
        &self,
        model: &ModelRef,
        condition: &Value,
    ) -> Result<SnapshotId, ClientError> {
        let path = format!("/treeNode/search/snapshot/{}", model.path());
        let resp = self.request(Method::POST, &path).json(condition).send().await?;
        let resp = check_response(resp, &format!("Snapshot search trigger for {model}")).await?;
        let id = SnapshotId::from_response(&resp.json::<Value>().await?)?;
        tracing::info!(%model, snapshot_id = %id, "snapshot search submitted");
        Ok(id)
    }

    /// The raw status payload of a snapshot search.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer.
    pub async fn get_snapshot_status(&self, snapshot_id: &SnapshotId) -> Result<Value, ClientError> {
        let path = format!(
            "/treeNode/search/snapshot/{}/status",
            urlencoding::encode(snapshot_id.as_str())
        );
        let resp = self.request(Method::GET, &path).send().await?;
        let resp = check_response(
            resp,
            &format!("Snapshot search status check for {snapshot_id}"),
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// Poll the snapshot status until it is terminal.
    ///
    /// # Errors
    ///
    /// See [`SearchPoller::poll`].
    pub async fn wait_for_search_completion(
        &self,
        snapshot_id: &SnapshotId,
        options: PollOptions,
    ) -> Result<Value, ClientError> {
        SearchPoller::new(SystemClock::new(), options)
            .poll(|| self.get_snapshot_status(snapshot_id))
            .await
    }

    /// One page of a successful search's results.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on any non-200 answer, including when the
    /// search has not succeeded yet.
    pub async fn get_search_result(
        &self,
        snapshot_id: &SnapshotId,
        page: PageRequest,
    ) -> Result<Value, ClientError> {
        let path = format!(
            "/treeNode/search/snapshot/{}?{}",
            urlencoding::encode(snapshot_id.as_str()),
            page.query()
        );
        let resp = self.request(Method::GET, &path).send().await?;
        let resp = check_response(resp, &format!("Get search result for {snapshot_id}")).await?;
        Ok(resp.json().await?)
    }

    /// Submit a search, wait for it, and return the final status payload with
    /// `snapshotId` added.
    ///
    /// # Errors
    ///
    /// See [`Self::create_snapshot_search`] and [`SearchPoller::poll`].
    pub async fn search_entities(
        &self,
        model: &ModelRef,
        condition: &Value,
        options: PollOptions,
    ) -> Result<Value, ClientError> {
        let snapshot_id = self.create_snapshot_search(model, condition).await?;
        let mut payload = self.wait_for_search_completion(&snapshot_id, options).await?;
        attach_snapshot_id(&mut payload, &snapshot_id);
        Ok(payload)
    }
}

fn attach_snapshot_id(payload: &mut Value, snapshot_id: &SnapshotId) {
    if let Value::Object(map) = payload {
        map.insert(
            SNAPSHOT_ID_FIELD.to_string(),
            Value::String(snapshot_id.as_str().to_string()),
        );
    }
}
