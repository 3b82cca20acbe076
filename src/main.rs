//! CLI entry point for ttyprompt.

mod cli;

use clap::Parser;
use ttyprompt::config::{load_config, Config};
use ttyprompt::error::PromptError;
use ttyprompt::logging::init_logging;
use ttyprompt::registry::PromptRegistry;
use ttyprompt::terminal::TerminalPrompter;

fn main() {
    init_logging();
    let args = cli::Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(device) = args.device {
        config.prompt.device = Some(device);
    }

    let prompter = config.prompter();
    let registry = PromptRegistry::with_defaults(prompter.clone());

    match run(args.command, &config, &prompter, &registry) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Execute one subcommand and return the lines to print on stdout.
fn run(
    command: cli::Command,
    config: &Config,
    prompter: &TerminalPrompter,
    registry: &PromptRegistry,
) -> Result<Vec<String>, PromptError> {
    match command {
        cli::Command::Text { message } => Ok(vec![prompter.prompt(&message)?]),
        cli::Command::Secret { message } => Ok(vec![prompter.prompt_secret(&message)?]),
        cli::Command::Mfa { serial, provider } => {
            let provider = provider.as_deref().unwrap_or(&config.prompt.provider);
            Ok(vec![registry.prompt(provider, &serial)?])
        }
        cli::Command::Providers => Ok(registry.names().into_iter().map(String::from).collect()),
    }
}
