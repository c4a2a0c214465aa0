//! # cy-auth
//!
//! Authentication against the cyoda platform API.
//!
//! Provides password resolution (explicit value → env var → password file →
//! interactive prompt), the login call that yields a refresh token, and the
//! exchange of that refresh token for a short-lived access token.

pub mod authenticator;
pub mod credentials;
pub mod error;
pub mod password;

pub use authenticator::{Authenticator, LoginResponse};
pub use credentials::Credentials;
pub use error::AuthError;
pub use password::{PasswordPrompt, PasswordSource, PasswordSources, TerminalPrompt};
