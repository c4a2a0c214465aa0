//! Model references and lock states.
//!
//! A model is a versioned schema definition. Entities can only be saved
//! against a locked model, and a model must be unlocked before it can be
//! deleted.
//!
//! ```text
//! (absent) → derived (unlocked) → locked
//!                  ↑                 │
//!                  └──── unlock ─────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(name, version)` pair identifying a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRef {
    pub name: String,
    pub version: u32,
}

impl ModelRef {
    #[must_use]
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// `{name}/{version}` with the name percent-encoded, ready to splice into
    /// an endpoint path.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}", urlencoding::encode(&self.name), self.version)
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Lock state of a model, as reported in the `currentState` field of the
/// model export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelState {
    Locked,
    Unlocked,
    /// Any state this client does not know about, kept verbatim.
    Other(String),
}

impl ModelState {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Locked => "LOCKED",
            Self::Unlocked => "UNLOCKED",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}

impl From<String> for ModelState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LOCKED" => Self::Locked,
            "UNLOCKED" => Self::Unlocked,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for ModelState {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ModelState> for String {
    fn from(state: ModelState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
