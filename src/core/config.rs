//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lookout/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LookoutConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lookout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lookout").join("config.toml"))
}

/// Load config from `~/.lookout/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LookoutConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LookoutConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LookoutConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(LookoutConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LookoutConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lookout Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:8000/api"   # Or set LOOKOUT_API_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_url` comes from the `--api-url` flag (None = not specified).
pub fn resolve(config: &LookoutConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    // API base URL: CLI → env → config → default
    let api_base_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LOOKOUT_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    ResolvedConfig { api_base_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LookoutConfig::default();
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = LookoutConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_resolve_config_value_overrides_default() {
        let config = LookoutConfig {
            api: ApiConfig {
                base_url: Some("http://staging:9000/api".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_base_url, "http://staging:9000/api");
    }

    #[test]
    fn test_resolve_cli_flag_wins() {
        let config = LookoutConfig {
            api: ApiConfig {
                base_url: Some("http://staging:9000/api".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://cli:8080/api"));
        assert_eq!(resolved.api_base_url, "http://cli:8080/api");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: LookoutConfig = toml::from_str("").unwrap();
        assert!(config.api.base_url.is_none());

        let toml_str = r#"
[api]
base_url = "http://192.168.1.10:8000/api"
"#;
        let config: LookoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://192.168.1.10:8000/api")
        );
    }
}
