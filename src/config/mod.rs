//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TTYPROMPT_PROVIDER`, `TTYPROMPT_DEVICE`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./ttyprompt.toml in the current directory
//! 4. $XDG_CONFIG_HOME/ttyprompt/ttyprompt.toml (or
//!    ~/.config/ttyprompt/ttyprompt.toml)
//! 5. Built-in defaults
//!
//! ```toml
//! [prompt]
//! provider = "terminal"
//! device = "/dev/tty"
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

mod env;
mod sources;
mod types;

use env::apply_env_overrides;
use sources::read_config_text_with_sources;
pub use sources::config_root_dir;
pub use types::{Config, PromptConfig};
use types::FileConfig;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!(?source, "config source resolved");

    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed)?;
    apply_env_overrides(&mut config, &env_lookup);
    Ok(config)
}

fn resolve_file_config(parsed: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Some(provider) = parsed.prompt.provider {
        let provider = provider.trim();
        if provider.is_empty() {
            return Err(ConfigError::Invalid("prompt.provider must not be empty".to_string()));
        }
        config.prompt.provider = provider.to_string();
    }
    if let Some(device) = parsed.prompt.device {
        if device.trim().is_empty() {
            return Err(ConfigError::Invalid("prompt.device must not be empty".to_string()));
        }
        config.prompt.device = Some(PathBuf::from(device));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TERMINAL_PROVIDER;
    use crate::terminal::default_device_path;
    use std::collections::HashMap;
    use std::io;

    fn no_files(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn no_root() -> Option<PathBuf> {
        None
    }

    fn files(entries: &[(&str, &str)]) -> impl Fn(&Path) -> Result<String, io::Error> {
        let map: HashMap<PathBuf, String> = entries
            .iter()
            .map(|(path, text)| (PathBuf::from(path), text.to_string()))
            .collect();
        move |path: &Path| {
            map.get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    #[test]
    fn defaults_when_no_file_exists() {
        let config = load_config_from_sources(None, no_files, no_env, no_root).unwrap();
        assert_eq!(config.prompt.provider, TERMINAL_PROVIDER);
        assert_eq!(config.prompt.device, default_device_path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(Some("missing.toml"), no_files, no_env, no_root)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn explicit_path_wins_over_local_file() {
        let read = files(&[
            ("custom.toml", "[prompt]\nprovider = \"custom\"\n"),
            ("ttyprompt.toml", "[prompt]\nprovider = \"local\"\n"),
        ]);
        let config = load_config_from_sources(Some("custom.toml"), read, no_env, no_root).unwrap();
        assert_eq!(config.prompt.provider, "custom");
    }

    #[test]
    fn local_file_wins_over_global_file() {
        let read = files(&[
            ("ttyprompt.toml", "[prompt]\nprovider = \"local\"\n"),
            ("/cfg/ttyprompt/ttyprompt.toml", "[prompt]\nprovider = \"global\"\n"),
        ]);
        let config =
            load_config_from_sources(None, read, no_env, || Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(config.prompt.provider, "local");
    }

    #[test]
    fn global_file_is_read_from_config_root() {
        let read = files(&[(
            "/cfg/ttyprompt/ttyprompt.toml",
            "[prompt]\ndevice = \"/dev/pts/7\"\n",
        )]);
        let config =
            load_config_from_sources(None, read, no_env, || Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(config.prompt.device, Some(PathBuf::from("/dev/pts/7")));
        assert_eq!(config.prompt.provider, TERMINAL_PROVIDER);
    }

    #[test]
    fn env_overrides_file_values() {
        let read = files(&[(
            "ttyprompt.toml",
            "[prompt]\nprovider = \"local\"\ndevice = \"/dev/pts/1\"\n",
        )]);
        let env = |name: &str| match name {
            "TTYPROMPT_PROVIDER" => Some("from-env".to_string()),
            "TTYPROMPT_DEVICE" => Some("/dev/pts/9".to_string()),
            _ => None,
        };
        let config = load_config_from_sources(None, read, env, no_root).unwrap();
        assert_eq!(config.prompt.provider, "from-env");
        assert_eq!(config.prompt.device, Some(PathBuf::from("/dev/pts/9")));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let read = files(&[("ttyprompt.toml", "[prompt]\nprovider = \"local\"\n")]);
        let env = |name: &str| (name == "TTYPROMPT_PROVIDER").then(|| "  ".to_string());
        let config = load_config_from_sources(None, read, env, no_root).unwrap();
        assert_eq!(config.prompt.provider, "local");
    }

    #[test]
    fn empty_provider_is_invalid() {
        let read = files(&[("ttyprompt.toml", "[prompt]\nprovider = \" \"\n")]);
        let err = load_config_from_sources(None, read, no_env, no_root).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: prompt.provider must not be empty");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let read = files(&[("ttyprompt.toml", "[prompt]\nretries = 3\n")]);
        let err = load_config_from_sources(None, read, no_env, no_root).unwrap_err();
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }

    #[test]
    fn configured_device_drives_prompter() {
        let mut config = Config::default();
        config.prompt.device = Some(PathBuf::from("/dev/pts/3"));
        assert_eq!(config.prompter().device(), Some(Path::new("/dev/pts/3")));

        config.prompt.device = None;
        assert_eq!(config.prompter().device(), None);
    }
}
