//! Environment overrides.
//!
//! `TTYPROMPT_*` variables win over every config file. Blank values are
//! treated as unset.

use std::path::PathBuf;

use super::Config;

pub(super) const PROVIDER_ENV: &str = "TTYPROMPT_PROVIDER";
pub(super) const DEVICE_ENV: &str = "TTYPROMPT_DEVICE";

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(provider) = non_blank(env_lookup, PROVIDER_ENV) {
        config.prompt.provider = provider;
    }
    if let Some(device) = non_blank(env_lookup, DEVICE_ENV) {
        config.prompt.device = Some(PathBuf::from(device));
    }
}

fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
