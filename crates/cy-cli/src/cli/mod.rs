use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cyctl` binary.
#[derive(Debug, Parser)]
#[command(name = "cyctl", version, about = "cyoda platform client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL, like https://my-env.cyoda.net/api
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Username for login
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Password for login, if you have no password file
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// File whose first line is the password; takes priority over --password
    #[arg(long, global = true, alias = "passwordFile")]
    pub password_file: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            host: self.host.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            password_file: self.password_file.clone(),
        }
    }
}
