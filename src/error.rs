//! Error types for prompting and configuration.

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors returned by the prompt operations and the provider registry.
///
/// An absent controlling terminal is deliberately not represented here: the
/// prompter falls back to stdin/stderr instead of failing.
#[derive(Debug)]
pub enum PromptError {
    /// Reading from or writing to the terminal streams failed.
    Io(io::Error),
    /// Input ended before a full line was entered.
    UnexpectedEof,
    /// Terminal echo could not be disabled for a masked read.
    EchoDisable(io::Error),
    /// No provider is registered under the requested name.
    UnknownProvider(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "unable to read input: {e}"),
            Self::UnexpectedEof => write!(f, "unable to read input: unexpected end of input"),
            Self::EchoDisable(e) => write!(f, "unable to disable terminal echo: {e}"),
            Self::UnknownProvider(name) => write!(f, "unknown prompt provider: {name}"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::EchoDisable(e) => Some(e),
            Self::UnexpectedEof | Self::UnknownProvider(_) => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(e)
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
