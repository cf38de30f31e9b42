//! Configuration for the remote parts table.
//!
//! Two values are required: the endpoint URL of the hosted service and an
//! access key. Resolution order:
//!
//! 1. `.env` file (via dotenvy, best effort), then the `PARTSCTL_URL` and
//!    `PARTSCTL_KEY` environment variables
//! 2. `~/.partsctl/config.toml` for whichever value the environment did not
//!    supply
//!
//! Fails hard with an actionable error when a value is missing from both.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PartsError, Result};

pub const ENV_URL: &str = "PARTSCTL_URL";
pub const ENV_KEY: &str = "PARTSCTL_KEY";

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted service, e.g. `https://xyzcompany.supabase.co`
    pub endpoint_url: String,
    /// Access key sent as `apikey` and bearer token on every request
    pub access_key: String,
}

/// On-disk config file shape (~/.partsctl/config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub endpoint_url: Option<String>,
    pub access_key: Option<String>,
}

impl Config {
    /// Load config from the environment and ~/.partsctl/config.toml
    pub fn load() -> Result<Self> {
        // Pull in a .env file if one exists; absence is not an error
        let _ = dotenvy::dotenv();

        let env_url = env::var(ENV_URL).ok();
        let env_key = env::var(ENV_KEY).ok();

        let file = match Self::config_path() {
            Some(path) if path.exists() => Some(ConfigFile::read(&path)?),
            _ => None,
        };

        Self::resolve(env_url, env_key, file)
    }

    /// Merge environment values over file values; error when a value is
    /// missing from both sources.
    pub fn resolve(
        env_url: Option<String>,
        env_key: Option<String>,
        file: Option<ConfigFile>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();

        let endpoint_url = env_url
            .or(file.endpoint_url)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                PartsError::config(format!(
                    "remote endpoint URL not set\n\nSet {ENV_URL} or run: partsctl config init"
                ))
            })?;

        let access_key = env_key
            .or(file.access_key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                PartsError::config(format!(
                    "access key not set\n\nSet {ENV_KEY} or run: partsctl config init"
                ))
            })?;

        Ok(Self {
            endpoint_url,
            access_key,
        })
    }

    /// Config file path: ~/.partsctl/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".partsctl").join("config.toml"))
    }
}

impl ConfigFile {
    /// Read and parse a config file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PartsError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            PartsError::config(format!("invalid TOML in {}: {}", path.display(), e))
        })
    }

    /// Write a config file, creating the parent directory if needed
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PartsError::config(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| PartsError::config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, toml_str).map_err(|e| {
            PartsError::config(format!("failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins_over_file() {
        let file = ConfigFile {
            endpoint_url: Some("https://file.example".into()),
            access_key: Some("file-key".into()),
        };

        let config = Config::resolve(
            Some("https://env.example".into()),
            None,
            Some(file),
        )
        .unwrap();

        assert_eq!(config.endpoint_url, "https://env.example");
        assert_eq!(config.access_key, "file-key");
    }

    #[test]
    fn test_missing_value_is_actionable() {
        let err = Config::resolve(Some("https://env.example".into()), None, None).unwrap_err();
        assert!(err.to_string().contains(ENV_KEY));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = Config::resolve(Some("  ".into()), Some("key".into()), None).unwrap_err();
        assert!(err.to_string().contains(ENV_URL));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let original = ConfigFile {
            endpoint_url: Some("https://xyz.supabase.co".into()),
            access_key: Some("anon-key".into()),
        };
        original.write(&path).unwrap();

        let read = ConfigFile::read(&path).unwrap();
        assert_eq!(read.endpoint_url.as_deref(), Some("https://xyz.supabase.co"));
        assert_eq!(read.access_key.as_deref(), Some("anon-key"));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "endpoint_url = [not toml").unwrap();

        let err = ConfigFile::read(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
