//! Configuration data model.

use serde::Deserialize;
use std::path::PathBuf;

use crate::registry::TERMINAL_PROVIDER;
use crate::terminal::{default_device_path, TerminalPrompter};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub prompt: PromptConfig,
}

impl Config {
    /// Terminal prompter for the configured device.
    pub fn prompter(&self) -> TerminalPrompter {
        match &self.prompt.device {
            Some(device) => TerminalPrompter::with_device(device),
            None => TerminalPrompter::without_device(),
        }
    }
}

/// Prompt settings from the `[prompt]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// MFA provider selected when the caller does not name one.
    pub provider: String,
    /// Controlling terminal device; `None` always uses stdin/stderr.
    pub device: Option<PathBuf>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            provider: TERMINAL_PROVIDER.to_string(),
            device: default_device_path(),
        }
    }
}

/// On-disk TOML shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub prompt: FilePromptConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FilePromptConfig {
    pub provider: Option<String>,
    pub device: Option<String>,
}
