//! The run context and the per-section export/import steps.

use std::path::{Path, PathBuf};

use cy_auth::{Authenticator, Credentials};
use reqwest::header::CONTENT_TYPE;

use crate::error::TransferError;
use crate::report::{SectionOutcome, TransferReport};
use crate::section::{Direction, Section};
use crate::toggles::SectionToggles;

const IMPORT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Everything a run needs: one token, one API base URL, one folder.
///
/// The token is obtained once and reused for every section.
#[derive(Debug, Clone)]
pub struct TransferContext {
    http: reqwest::Client,
    host: String,
    token: String,
    folder: PathBuf,
}

impl TransferContext {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        host: &str,
        token: impl Into<String>,
        folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            http,
            host: host.trim_end_matches('/').to_string(),
            token: token.into(),
            folder: folder.into(),
        }
    }

    /// Login and keep the `token` of the login response.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Auth`] if the login is rejected or its body
    /// carries no `token`.
    pub async fn login(
        http: reqwest::Client,
        host: &str,
        credentials: &Credentials,
        folder: impl Into<PathBuf>,
    ) -> Result<Self, TransferError> {
        let login = Authenticator::new(http.clone(), host)
            .login(credentials)
            .await?;
        let token = login.access_token()?.to_string();
        Ok(Self::new(http, host, token, folder))
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// # Errors
    ///
    /// See [`Self::run`].
    pub async fn run_export(&self, toggles: &SectionToggles) -> Result<TransferReport, TransferError> {
        self.run(Direction::Export, toggles).await
    }

    /// # Errors
    ///
    /// See [`Self::run`].
    pub async fn run_import(&self, toggles: &SectionToggles) -> Result<TransferReport, TransferError> {
        self.run(Direction::Import, toggles).await
    }

    /// Create the folder if needed, then process every section in order.
    ///
    /// # Errors
    ///
    /// Stops at the first section that fails: [`TransferError::Api`] for a
    /// non-200 answer, [`TransferError::Io`] for a folder or file problem.
    pub async fn run(
        &self,
        direction: Direction,
        toggles: &SectionToggles,
    ) -> Result<TransferReport, TransferError> {
        std::fs::create_dir_all(&self.folder).map_err(|source| io_error(&self.folder, source))?;

        let mut sections = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            if !toggles.is_enabled(section) {
                tracing::info!(%section, "skipping {direction} {}", section.path_for(direction));
                sections.push(SectionOutcome::Skipped { section });
                continue;
            }
            let path = match direction {
                Direction::Export => self.export_section(section).await?,
                Direction::Import => self.import_section(section).await?,
            };
            sections.push(SectionOutcome::Transferred { section, path });
        }

        tracing::info!(%direction, "finish {direction} configs");
        Ok(TransferReport {
            direction,
            folder: self.folder.clone(),
            sections,
        })
    }

    /// GET one section and write it as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Api`] on a non-200 answer; nothing is written.
    pub async fn export_section(&self, section: Section) -> Result<PathBuf, TransferError> {
        let endpoint = section.export_path();
        let resp = self
            .http
            .get(self.url(endpoint))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let resp = check_status(resp, section, Direction::Export, endpoint).await?;
        let body: serde_json::Value = resp.json().await?;

        let path = self.file_path(section);
        std::fs::write(&path, serde_json::to_string(&body)?)
            .map_err(|source| io_error(&path, source))?;
        tracing::info!(%section, path = %path.display(), "saved");
        Ok(path)
    }

    /// POST the raw bytes of one section file.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Io`] if the file cannot be read (no request is
    /// made) and [`TransferError::Api`] on a non-200 answer.
    pub async fn import_section(&self, section: Section) -> Result<PathBuf, TransferError> {
        let endpoint = section.import_path();
        let path = self.file_path(section);
        let data = std::fs::read(&path).map_err(|source| io_error(&path, source))?;

        let resp = self
            .http
            .post(self.url(endpoint))
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, IMPORT_CONTENT_TYPE)
            .body(data)
            .send()
            .await?;
        check_status(resp, section, Direction::Import, endpoint).await?;
        tracing::info!(%section, path = %path.display(), "imported");
        Ok(path)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.host)
    }

    fn file_path(&self, section: Section) -> PathBuf {
        self.folder.join(section.file_name())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> TransferError {
    TransferError::Io {
        path: path.display().to_string(),
        source,
    }
}

async fn check_status(
    resp: reqwest::Response,
    section: Section,
    direction: Direction,
    endpoint: &'static str,
) -> Result<reqwest::Response, TransferError> {
    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(TransferError::Api {
            section,
            direction,
            endpoint,
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
