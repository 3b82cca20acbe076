//! ttyprompt: interactive prompts on the controlling terminal.
//!
//! Prompts for plain text, masked secrets, and MFA codes are written to and
//! read from the controlling terminal device, so they keep working when stdout
//! is redirected. Without a controlling terminal the prompts fall back to
//! stdin and stderr.
//!
//! # Quick start
//!
//! ```no_run
//! use ttyprompt::registry::{PromptRegistry, TERMINAL_PROVIDER};
//! use ttyprompt::terminal::{terminal_secret_prompt, TerminalPrompter};
//!
//! let password = terminal_secret_prompt("Password: ").unwrap();
//!
//! let registry = PromptRegistry::with_defaults(TerminalPrompter::new());
//! let code = registry.prompt(TERMINAL_PROVIDER, "arn:aws:iam::123456789012:mfa/me").unwrap();
//! # let _ = (password, code);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod registry;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
