//! Global Holidaze configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{HolidazeError, HolidazeResult};

pub const DEFAULT_API_URL: &str = "https://v2.api.noroff.dev";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Directory holding config and session files: ~/.config/holidaze
pub fn base_dir() -> HolidazeResult<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| HolidazeError::Config("Could not determine config directory".into()))?
        .join("holidaze"))
}

/// Global configuration at ~/.config/holidaze/config.toml
///
/// Every key can be overridden from the environment with a `HOLIDAZE_`
/// prefix, e.g. `HOLIDAZE_API_KEY`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HolidazeConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Sent as `X-Noroff-API-Key` on authenticated requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for HolidazeConfig {
    fn default() -> Self {
        HolidazeConfig {
            api_url: default_api_url(),
            api_key: None,
        }
    }
}

impl HolidazeConfig {
    pub fn config_path() -> HolidazeResult<PathBuf> {
        Ok(base_dir()?.join("config.toml"))
    }

    pub fn load() -> HolidazeResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> HolidazeResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("HOLIDAZE"))
            .build()
            .map_err(|e| HolidazeError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HolidazeError::Config(e.to_string()))
    }

    /// The API key, or a config error telling the user where to put one.
    pub fn require_api_key(&self) -> HolidazeResult<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            HolidazeError::Config(
                "No API key configured.\n\n\
                Set api_key in ~/.config/holidaze/config.toml or export HOLIDAZE_API_KEY."
                    .into(),
            )
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HolidazeResult<()> {
        let contents = format!(
            "\
# holidaze configuration

# Base URL of the Holidaze API:
# api_url = \"{}\"

# API key sent with authenticated requests:
# api_key = \"your-api-key\"
",
            DEFAULT_API_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HolidazeError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HolidazeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidaze").join("config.toml");

        let config = HolidazeConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"http://127.0.0.1:9000\"\napi_key = \"abc-123\"\n",
        )
        .unwrap();

        let config = HolidazeConfig::load_from(&path).unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.require_api_key().unwrap(), "abc-123");
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = HolidazeConfig::default();
        assert!(matches!(
            config.require_api_key(),
            Err(HolidazeError::Config(_))
        ));
    }
}
