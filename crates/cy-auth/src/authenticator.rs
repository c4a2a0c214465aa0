//! Login and access-token exchange.
//!
//! `POST /auth/login` answers with a refresh token (and, on most deployments,
//! an initial access token). `GET /auth/token` with the refresh token as
//! bearer answers with a fresh access token.

use serde::Deserialize;

use crate::credentials::Credentials;
use crate::error::AuthError;

/// Body of a successful login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl LoginResponse {
    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] if the login body had no refresh token.
    pub fn refresh_token(&self) -> Result<&str, AuthError> {
        non_empty(self.refresh_token.as_deref()).ok_or(AuthError::MissingToken {
            field: "refreshToken",
        })
    }

    /// # Errors
    ///
    /// Returns [`AuthError::MissingToken`] if the login body had no access token.
    pub fn access_token(&self) -> Result<&str, AuthError> {
        non_empty(self.token.as_deref()).ok_or(AuthError::MissingToken { field: "token" })
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Talks to the two auth endpoints under an API base URL.
#[derive(Debug, Clone)]
pub struct Authenticator {
    http: reqwest::Client,
    login_url: String,
    token_url: String,
}

impl Authenticator {
    /// `base_url` is the API root, e.g. `https://my-env.cyoda.net/api`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            http,
            login_url: format!("{base}/auth/login"),
            token_url: format!("{base}/auth/token"),
        }
    }

    /// POST the credentials to the login endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::LoginFailed`] on any non-200 status,
    /// [`AuthError::Http`] on transport or body-decoding failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        tracing::info!(username = %credentials.username, "logging in");

        let resp = self
            .http
            .post(&self.login_url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(reqwest::header::ACCEPT, "application/json")
            .json(credentials)
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(AuthError::LoginFailed {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp.json::<LoginResponse>().await?)
    }

    /// Exchange a refresh token for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenRefreshFailed`] on any non-200 status and
    /// [`AuthError::MissingToken`] if the body has no `token`.
    pub async fn get_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        let resp = self
            .http
            .get(&self.token_url)
            .bearer_auth(refresh_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(AuthError::TokenRefreshFailed {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let body = resp.json::<TokenResponse>().await?;
        non_empty(body.token.as_deref())
            .map(str::to_string)
            .ok_or(AuthError::MissingToken { field: "token" })
    }

    /// Login followed by the refresh-token exchange.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::login`] or [`Self::get_access_token`].
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let login = self.login(credentials).await?;
        let access_token = self.get_access_token(login.refresh_token()?).await?;
        tracing::debug!("access token acquired");
        Ok(access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accessors_reject_missing_and_empty() {
        let full: LoginResponse =
            serde_json::from_str(r#"{"token":"acc","refreshToken":"ref"}"#).unwrap();
        assert_eq!(full.access_token().unwrap(), "acc");
        assert_eq!(full.refresh_token().unwrap(), "ref");

        let empty: LoginResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
        assert!(matches!(
            empty.access_token(),
            Err(AuthError::MissingToken { field: "token" })
        ));
        assert!(matches!(
            empty.refresh_token(),
            Err(AuthError::MissingToken {
                field: "refreshToken"
            })
        ));
    }

    #[test]
    fn endpoints_are_derived_from_base_url() {
        let auth = Authenticator::new(reqwest::Client::new(), "https://x.cyoda.net/api/");
        assert_eq!(auth.login_url, "https://x.cyoda.net/api/auth/login");
        assert_eq!(auth.token_url, "https://x.cyoda.net/api/auth/token");
    }
}
