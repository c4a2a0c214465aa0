//! # cy-client
//!
//! Session client for the cyoda platform API.
//!
//! A [`Session`] holds the API base URL and the current access token and wraps
//! the model, entity, and snapshot search endpoints. Each operation is a
//! single request with the access token as bearer, except:
//! - [`Session::reset_model`], which walks a model through
//!   delete → derive → lock
//! - [`Session::wait_for_search_completion`], which polls a snapshot search
//!   until it reaches a terminal status or times out
//!
//! Calls are issued one at a time; there is no retry, caching, or token
//! refresh beyond an explicit [`Session::connect`].

pub mod clock;
pub mod entity;
pub mod model;
pub mod search;

mod error;
mod http;

pub use clock::{Clock, SystemClock};
pub use error::ClientError;
pub use model::ResetOutcome;
pub use search::{PollOptions, SearchPoller};

use std::time::Duration;

use cy_auth::{Authenticator, Credentials};

/// An authenticated view of one platform API.
pub struct Session {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl Session {
    /// Create a session without a token. Call [`Self::connect`] (or
    /// [`Self::set_access_token`]) before any other operation.
    ///
    /// `request_timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, request_timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "cyctl/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a session around an existing HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: String::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
    }

    /// Login, exchange the refresh token, and keep the access token for all
    /// subsequent calls. Calling it again replaces the token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Auth`] if login or the token exchange fails.
    pub async fn connect(&mut self, credentials: &Credentials) -> Result<(), ClientError> {
        let authenticator = Authenticator::new(self.http.clone(), &self.base_url);
        self.access_token = authenticator.authenticate(credentials).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }
}
