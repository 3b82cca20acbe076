//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ask for text, secrets, and MFA codes on the controlling terminal.
///
/// The answer is printed to stdout, so prompts stay usable inside command
/// substitution: `token=$(ttyprompt secret "Token: ")`.
#[derive(Debug, Parser)]
#[command(name = "ttyprompt", version)]
pub struct Args {
    /// Path to config file (default: ./ttyprompt.toml or ~/.config/ttyprompt/ttyprompt.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Terminal device to prompt on instead of the configured one.
    #[arg(long = "device", value_name = "PATH")]
    pub device: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a line of text.
    Text {
        /// Message shown before reading.
        message: String,
    },
    /// Prompt for a secret without echoing it.
    Secret {
        /// Message shown before reading.
        message: String,
    },
    /// Prompt for an MFA code.
    Mfa {
        /// Serial or ARN of the MFA device.
        serial: String,
        /// Prompt provider to use (default: configured provider).
        #[arg(short = 'p', long = "provider")]
        provider: Option<String>,
    },
    /// List registered MFA prompt providers.
    Providers,
}
