use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login failed ({status}): {body}")]
    LoginFailed { status: u16, body: String },

    #[error("token refresh failed ({status}): {body}")]
    TokenRefreshFailed { status: u16, body: String },

    #[error("'{field}' attribute missing in auth response")]
    MissingToken { field: &'static str },

    #[error("no password available: pass --password, set the password variable, or provide a password file")]
    MissingPassword,

    #[error("failed to read password file {path}: {source}")]
    PasswordFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("password prompt failed: {0}")]
    Prompt(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
