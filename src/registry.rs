//! Named MFA prompt providers.
//!
//! The application builds one [`PromptRegistry`] at startup and passes it to
//! whatever dispatches MFA prompts by name. The terminal prompt is always
//! available as [`TERMINAL_PROVIDER`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::PromptError;
use crate::terminal::TerminalPrompter;

/// Registry key of the controlling-terminal MFA prompt.
pub const TERMINAL_PROVIDER: &str = "terminal";

// ---------------------------------------------------------------------------
// MfaPrompt trait
// ---------------------------------------------------------------------------

/// A strategy for asking the user for an MFA code.
pub trait MfaPrompt: Send + Sync {
    /// Name the provider is registered and selected under.
    fn name(&self) -> &str;

    /// Ask for the code of the MFA device identified by `mfa_serial`.
    fn prompt(&self, mfa_serial: &str) -> Result<String, PromptError>;
}

/// MFA prompt on the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalMfaPrompt {
    prompter: TerminalPrompter,
}

impl TerminalMfaPrompt {
    pub fn new(prompter: TerminalPrompter) -> Self {
        Self { prompter }
    }
}

impl MfaPrompt for TerminalMfaPrompt {
    fn name(&self) -> &str {
        TERMINAL_PROVIDER
    }

    fn prompt(&self, mfa_serial: &str) -> Result<String, PromptError> {
        self.prompter.prompt_mfa(mfa_serial)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Registry of MFA prompt providers keyed by name.
pub struct PromptRegistry {
    providers: BTreeMap<String, Box<dyn MfaPrompt>>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self {
            providers: BTreeMap::new(),
        }
    }

    /// Registry holding the built-in providers, with the terminal provider
    /// bound to `prompter`.
    pub fn with_defaults(prompter: TerminalPrompter) -> Self {
        let mut registry = Self::new();
        registry.register(TerminalMfaPrompt::new(prompter));
        registry
    }

    /// Register a provider under its own name, replacing any previous one.
    pub fn register(&mut self, provider: impl MfaPrompt + 'static) {
        self.providers.insert(provider.name().to_string(), Box::new(provider));
    }

    /// Look up a provider by name.
    pub fn get(&self, name: &str) -> Option<&dyn MfaPrompt> {
        self.providers.get(name).map(|p| &**p)
    }

    /// Find a provider by name and ask it for an MFA code.
    pub fn prompt(&self, name: &str, mfa_serial: &str) -> Result<String, PromptError> {
        let provider = self
            .get(name)
            .ok_or_else(|| PromptError::UnknownProvider(name.to_string()))?;
        debug!(provider = name, mfa_serial, "dispatching mfa prompt");
        provider.prompt(mfa_serial)
    }

    /// Registered provider names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    /// True if no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}
