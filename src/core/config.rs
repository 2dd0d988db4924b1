//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tido/config.toml`. If missing on first run, a
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
pub struct TidoConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub base_url: Option<String>,
    pub fetch_limit: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/todos";
pub const DEFAULT_FETCH_LIMIT: u32 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub fetch_limit: u32,
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

/// Returns the path to `~/.tido/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tido").join("config.toml"))
}

/// Load config from `~/.tido/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TidoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TidoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TidoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TidoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TidoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Tido Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [remote]
# base_url = "https://jsonplaceholder.typicode.com/todos"
# fetch_limit = 10                   # Items requested on load (?_limit=)
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
/// `cli_base_url` and `cli_limit` are from CLI flags (None = not specified).
pub fn resolve(
    config: &TidoConfig,
    cli_base_url: Option<&str>,
    cli_limit: Option<u32>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TIDO_BASE_URL").ok())
        .or_else(|| config.remote.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Fetch limit: CLI → env → config → default
    let fetch_limit = cli_limit
        .or_else(parse_limit_env)
        .or(config.remote.fetch_limit)
        .unwrap_or(DEFAULT_FETCH_LIMIT);

    ResolvedConfig {
        base_url,
        fetch_limit,
    }
}

/// Reads `TIDO_FETCH_LIMIT`, warning on (and discarding) unparseable values.
fn parse_limit_env() -> Option<u32> {
    let raw = std::env::var("TIDO_FETCH_LIMIT").ok()?;
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("Ignoring unparseable TIDO_FETCH_LIMIT: {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TidoConfig::default();
        assert!(config.remote.base_url.is_none());
        assert!(config.remote.fetch_limit.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = TidoConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.fetch_limit, DEFAULT_FETCH_LIMIT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TidoConfig {
            remote: RemoteConfig {
                base_url: Some("http://localhost:3000/todos".to_string()),
                fetch_limit: Some(25),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://localhost:3000/todos");
        assert_eq!(resolved.fetch_limit, 25);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = TidoConfig {
            remote: RemoteConfig {
                base_url: Some("http://from-config/todos".to_string()),
                fetch_limit: Some(25),
            },
        };
        let resolved = resolve(&config, Some("http://from-cli/todos"), Some(3));
        assert_eq!(resolved.base_url, "http://from-cli/todos");
        assert_eq!(resolved.fetch_limit, 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[remote]
base_url = "http://192.168.1.100:3000/todos"
fetch_limit = 50
"#;
        let config: TidoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.remote.base_url.as_deref(),
            Some("http://192.168.1.100:3000/todos")
        );
        assert_eq!(config.remote.fetch_limit, Some(50));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[remote]
fetch_limit = 5
"#;
        let config: TidoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.remote.fetch_limit, Some(5));
        assert!(config.remote.base_url.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: TidoConfig = toml::from_str("").unwrap();
        assert!(config.remote.base_url.is_none());
    }
}
