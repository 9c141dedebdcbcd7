mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

pub const TMDB_API_KEY_ENV: &str = "PLEXNAME_TMDB_API_KEY";
pub const TVDB_API_KEY_ENV: &str = "PLEXNAME_TVDB_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = ["./plexname.toml", "~/.config/plexname/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

/// API keys from the environment take precedence over the file.
fn apply_env_overrides(config: &mut Config) {
    if let Some(key) = non_empty_env(TMDB_API_KEY_ENV) {
        config.tmdb.api_key = key;
    }
    if let Some(key) = non_empty_env(TVDB_API_KEY_ENV) {
        config.tvdb.api_key = key;
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.tmdb.language.trim().is_empty() {
        anyhow::bail!("TMDB language cannot be empty");
    }

    if config.tvdb.pin.is_some() && config.tvdb.api_key.is_empty() {
        tracing::warn!("TVDB pin is set but no TVDB API key is configured");
    }

    Ok(())
}

/// Check that every provider a lookup may hit has credentials.
///
/// Only required when lookups are actually performed; `--parse-only` runs
/// work without any keys.
pub fn validate_for_lookup(config: &Config) -> Result<()> {
    if config.tmdb.api_key.is_empty() {
        anyhow::bail!(
            "No TMDB API key configured (set tmdb.api_key or {})",
            TMDB_API_KEY_ENV
        );
    }

    if config.search.tv_provider == TvProvider::Tvdb && config.tvdb.api_key.is_empty() {
        anyhow::bail!(
            "TV lookups use tvdb but no TVDB API key is configured (set tvdb.api_key or {})",
            TVDB_API_KEY_ENV
        );
    }

    Ok(())
}
