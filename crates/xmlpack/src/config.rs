use std::path::PathBuf;

use anyhow::{Context, Result};
use xmlpack_config::{InputArgs, Profile, UserConfig};
use xmlpack_core::types::{InputType, Options};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "XMLPACK_CONFIG";

fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => Some(dirs::config_dir()?.join("xmlpack").join("config.json")),
    }
}

/// A missing file is not an error; a present but malformed one is.
pub(crate) fn load_config() -> Result<Option<UserConfig>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = UserConfig::parse(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), profiles = config.profiles.len(), "loaded config");
    Ok(Some(config))
}

pub fn resolve_profile<'a>(config: Option<&'a UserConfig>, name: Option<&str>) -> Option<&'a Profile> {
    config.and_then(|c| c.profile(name.unwrap_or("default")))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub input_type: InputType,
    pub options: Options,
}

/// Flags win over the profile; profile options are extended by `--option`.
pub fn resolve_input(args: &InputArgs, profile: Option<&Profile>) -> ResolvedInput {
    let input_type = args
        .input_type
        .as_deref()
        .or_else(|| profile.and_then(|p| p.input_type.as_deref()))
        .map(InputType::from_tag)
        .unwrap_or_default();

    let mut options = profile
        .and_then(|p| p.options.clone())
        .unwrap_or_default();
    for (key, value) in &args.options {
        options.insert(key.clone(), value.clone());
    }

    ResolvedInput {
        input_type,
        options,
    }
}

pub fn resolve_template(flag: Option<&str>, profile: Option<&Profile>) -> String {
    flag.or_else(|| profile.and_then(|p| p.template.as_deref()))
        .unwrap_or("default")
        .to_string()
}
