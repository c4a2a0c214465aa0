//! Password resolution.
//!
//! Priority: password file named by the caller → explicit value →
//! environment variable → configured password file → interactive prompt.
//! The first source that yields a non-empty value wins and later sources are
//! never consulted. Resolved values are never logged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

/// Where a resolved password came from (for diagnostics only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSource {
    Explicit,
    Env,
    File,
    Prompt,
}

/// Reads a secret from the user without echoing it.
pub trait PasswordPrompt {
    /// # Errors
    ///
    /// Returns [`AuthError::Prompt`] if the terminal cannot be read.
    fn prompt(&self, message: &str) -> Result<String, AuthError>;
}

/// Prompt on the controlling terminal via `rpassword`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&self, message: &str) -> Result<String, AuthError> {
        rpassword::prompt_password(message).map_err(|e| AuthError::Prompt(e.to_string()))
    }
}

/// The candidate sources, in resolution order.
#[derive(Debug, Clone, Default)]
pub struct PasswordSources {
    /// Password file named explicitly (e.g. `--password-file`). It must exist.
    pub explicit_file: Option<PathBuf>,
    /// Value passed directly (e.g. `--password`).
    pub explicit: Option<String>,
    /// Name of the environment variable to read.
    pub env_var: Option<String>,
    /// Configured password file; skipped when absent.
    pub file: Option<PathBuf>,
    /// Whether falling back to an interactive prompt is allowed.
    pub allow_prompt: bool,
}

impl PasswordSources {
    /// Resolve the password from the first source that has one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordFile`] if the explicit file cannot be read
    /// (including when it does not exist) or an existing configured file
    /// cannot be read, [`AuthError::Prompt`] if prompting fails, and
    /// [`AuthError::MissingPassword`] if no source yields a value.
    pub fn resolve(
        &self,
        prompt: &dyn PasswordPrompt,
    ) -> Result<(String, PasswordSource), AuthError> {
        if let Some(path) = &self.explicit_file {
            let password = read_password_file(path)?;
            if !password.is_empty() {
                tracing::debug!(path = %path.display(), "password taken from given file");
                return Ok((password, PasswordSource::File));
            }
            tracing::warn!(path = %path.display(), "password file is empty");
        }

        if let Some(password) = self.explicit.as_deref().filter(|p| !p.is_empty()) {
            return Ok((password.to_string(), PasswordSource::Explicit));
        }

        if let Some(name) = self.env_var.as_deref()
            && let Ok(password) = std::env::var(name)
            && !password.is_empty()
        {
            tracing::debug!(env_var = name, "password taken from environment");
            return Ok((password, PasswordSource::Env));
        }

        if let Some(path) = &self.file {
            if path.exists() {
                let password = read_password_file(path)?;
                if !password.is_empty() {
                    tracing::debug!(path = %path.display(), "password taken from file");
                    return Ok((password, PasswordSource::File));
                }
                tracing::warn!(path = %path.display(), "password file is empty");
            } else {
                tracing::debug!(path = %path.display(), "configured password file not found");
            }
        }

        if self.allow_prompt {
            let password = prompt.prompt("Enter your password: ")?;
            if !password.is_empty() {
                return Ok((password, PasswordSource::Prompt));
            }
        }

        Err(AuthError::MissingPassword)
    }
}

/// First line of the file with trailing whitespace removed.
fn read_password_file(path: &Path) -> Result<String, AuthError> {
    let content = fs::read_to_string(path).map_err(|source| AuthError::PasswordFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(content
        .lines()
        .next()
        .map(str::trim_end)
        .unwrap_or_default()
        .to_string())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use figment::Jail;

    use super::*;

    /// Counts invocations and answers with a fixed value.
    struct FakePrompt {
        answer: &'static str,
        calls: Cell<u32>,
    }

    impl FakePrompt {
        fn new(answer: &'static str) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl PasswordPrompt for FakePrompt {
        fn prompt(&self, _message: &str) -> Result<String, AuthError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.answer.to_string())
        }
    }

    #[test]
    fn env_var_wins_over_file_and_prompt() {
        Jail::expect_with(|jail| {
            jail.set_env("CY_TEST_PASSWORD", "from-env");
            jail.create_file("passwd", "from-file\n")?;
            let prompt = FakePrompt::new("from-prompt");

            let sources = PasswordSources {
                env_var: Some("CY_TEST_PASSWORD".into()),
                file: Some(jail.directory().join("passwd")),
                allow_prompt: true,
                ..Default::default()
            };
            let (password, source) = sources.resolve(&prompt).expect("resolves");

            assert_eq!(password, "from-env");
            assert_eq!(source, PasswordSource::Env);
            assert_eq!(prompt.calls.get(), 0);
            Ok(())
        });
    }

    #[test]
    fn file_first_line_is_trimmed_when_env_unset() {
        Jail::expect_with(|jail| {
            jail.create_file("passwd", "s3cret  \t\nsecond line\n")?;
            let prompt = FakePrompt::new("from-prompt");

            let sources = PasswordSources {
                env_var: Some("CY_TEST_PASSWORD_UNSET".into()),
                file: Some(jail.directory().join("passwd")),
                allow_prompt: true,
                ..Default::default()
            };
            let (password, source) = sources.resolve(&prompt).expect("resolves");

            assert_eq!(password, "s3cret");
            assert_eq!(source, PasswordSource::File);
            assert_eq!(prompt.calls.get(), 0);
            Ok(())
        });
    }

    #[test]
    fn prompt_is_used_when_nothing_else_resolves() {
        Jail::expect_with(|jail| {
            let prompt = FakePrompt::new("typed");
            let sources = PasswordSources {
                env_var: Some("CY_TEST_PASSWORD_UNSET".into()),
                file: Some(jail.directory().join("does-not-exist")),
                allow_prompt: true,
                ..Default::default()
            };
            let (password, source) = sources.resolve(&prompt).expect("resolves");

            assert_eq!(password, "typed");
            assert_eq!(source, PasswordSource::Prompt);
            assert_eq!(prompt.calls.get(), 1);
            Ok(())
        });
    }

    #[test]
    fn explicit_value_short_circuits_everything() {
        Jail::expect_with(|jail| {
            jail.set_env("CY_TEST_PASSWORD", "from-env");
            let prompt = FakePrompt::new("typed");
            let sources = PasswordSources {
                explicit: Some("given".into()),
                env_var: Some("CY_TEST_PASSWORD".into()),
                allow_prompt: true,
                ..Default::default()
            };
            let (password, source) = sources.resolve(&prompt).expect("resolves");

            assert_eq!(password, "given");
            assert_eq!(source, PasswordSource::Explicit);
            assert_eq!(prompt.calls.get(), 0);
            Ok(())
        });
    }

    #[test]
    fn given_file_wins_over_explicit_value() {
        Jail::expect_with(|jail| {
            jail.set_env("CY_TEST_PASSWORD", "from-env");
            jail.create_file("passwd", "from-file\n")?;
            let prompt = FakePrompt::new("typed");
            let sources = PasswordSources {
                explicit_file: Some(jail.directory().join("passwd")),
                explicit: Some("from-flag".into()),
                env_var: Some("CY_TEST_PASSWORD".into()),
                allow_prompt: true,
                ..Default::default()
            };
            let (password, source) = sources.resolve(&prompt).expect("resolves");

            assert_eq!(password, "from-file");
            assert_eq!(source, PasswordSource::File);
            assert_eq!(prompt.calls.get(), 0);
            Ok(())
        });
    }

    #[test]
    fn missing_given_file_is_a_hard_error() {
        Jail::expect_with(|jail| {
            let prompt = FakePrompt::new("typed");
            let sources = PasswordSources {
                explicit_file: Some(jail.directory().join("no-such-passwd")),
                explicit: Some("from-flag".into()),
                allow_prompt: true,
                ..Default::default()
            };
            let err = sources.resolve(&prompt).unwrap_err();

            let AuthError::PasswordFile { path, .. } = err else {
                panic!("expected PasswordFile, got {err:?}");
            };
            assert!(path.ends_with("no-such-passwd"));
            assert_eq!(prompt.calls.get(), 0);
            Ok(())
        });
    }

    #[test]
    fn missing_password_without_prompt_is_an_error() {
        let prompt = FakePrompt::new("typed");
        let sources = PasswordSources {
            env_var: Some("CY_TEST_PASSWORD_NEVER_SET".into()),
            allow_prompt: false,
            ..Default::default()
        };
        let err = sources.resolve(&prompt).unwrap_err();

        assert!(matches!(err, AuthError::MissingPassword));
        assert_eq!(prompt.calls.get(), 0);
    }

    #[test]
    fn empty_prompt_answer_is_rejected() {
        let prompt = FakePrompt::new("");
        let sources = PasswordSources {
            allow_prompt: true,
            ..Default::default()
        };
        assert!(matches!(
            sources.resolve(&prompt),
            Err(AuthError::MissingPassword)
        ));
    }
}
