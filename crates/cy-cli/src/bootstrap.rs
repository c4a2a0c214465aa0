use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use cy_auth::{Credentials, PasswordSources, TerminalPrompt};
use cy_client::Session;
use cy_config::CyodaConfig;

use crate::cli::GlobalFlags;
use crate::ui;

pub fn load_config() -> anyhow::Result<CyodaConfig> {
    CyodaConfig::load_with_dotenv().context("failed to load cyoda configuration")
}

/// `--host`, else the configured API URL. There is no built-in default.
pub fn host(flags: &GlobalFlags, config: &CyodaConfig) -> anyhow::Result<String> {
    flags
        .host
        .as_deref()
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .or_else(|| config.connection.base_url())
        .map(|host| host.trim_end_matches('/').to_string())
        .context("no host: pass --host or set CYODA_CONNECTION__API_URL")
}

pub fn request_timeout(config: &CyodaConfig) -> Option<Duration> {
    config
        .connection
        .request_timeout_secs
        .map(Duration::from_secs)
}

pub fn http_client(config: &CyodaConfig) -> anyhow::Result<reqwest::Client> {
    let mut builder =
        reqwest::Client::builder().user_agent(concat!("cyctl/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = request_timeout(config) {
        builder = builder.timeout(timeout);
    }
    builder.build().context("failed to build HTTP client")
}

pub fn password_sources(flags: &GlobalFlags, config: &CyodaConfig) -> PasswordSources {
    PasswordSources {
        explicit_file: flags.password_file.clone().map(PathBuf::from),
        explicit: flags.password.clone(),
        env_var: Some(config.connection.password_env.clone()),
        file: config.connection.password_file.clone().map(PathBuf::from),
        allow_prompt: ui::prefs().interactive,
    }
}

pub fn credentials(flags: &GlobalFlags, config: &CyodaConfig) -> anyhow::Result<Credentials> {
    let username = flags
        .username
        .clone()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            config
                .connection
                .has_username()
                .then(|| config.connection.username.clone())
        })
        .context("no username: pass --username or set CYODA_CONNECTION__USERNAME")?;

    let (password, source) = password_sources(flags, config).resolve(&TerminalPrompt)?;
    tracing::debug!(?source, "password resolved");
    Ok(Credentials::new(username, password))
}

/// Build a session and authenticate it.
pub async fn connect(flags: &GlobalFlags, config: &CyodaConfig) -> anyhow::Result<Session> {
    let host = host(flags, config)?;
    let credentials = credentials(flags, config)?;
    let mut session = Session::new(&host, request_timeout(config))?;
    session
        .connect(&credentials)
        .await
        .with_context(|| format!("failed to authenticate against {host}"))?;
    Ok(session)
}
