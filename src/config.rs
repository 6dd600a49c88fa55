use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseTagError, Result};

/// Represents the complete configuration for release-tag.
///
/// Contains the project settings, the remote to publish to, and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_project_name() -> String {
    "Release".to_string()
}

fn default_version_file() -> String {
    "version.toml".to_string()
}

fn default_remote_name() -> String {
    "origin".to_string()
}

/// Project settings.
///
/// `name` prefixes every tag annotation; `version_file` is the descriptor
/// opened in the editor, relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    #[serde(default = "default_project_name")]
    pub name: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            name: default_project_name(),
            version_file: default_version_file(),
        }
    }
}

/// Remote that tags are pushed to
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Editor used when `EDITOR` is not set
    #[serde(default)]
    pub editor: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasetag.toml` at the project root (current directory when unknown)
/// 3. `.releasetag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `project_root` - Repository working directory to look for `releasetag.toml` in
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, project_root: Option<&Path>) -> Result<Config> {
    let project_config = project_root
        .unwrap_or_else(|| Path::new("."))
        .join("releasetag.toml");

    let (source, config_str) = if let Some(path) = config_path {
        (path.to_string(), fs::read_to_string(path)?)
    } else if project_config.exists() {
        (
            project_config.display().to_string(),
            fs::read_to_string(&project_config)?,
        )
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasetag.toml");
        if config_path.exists() {
            (
                config_path.display().to_string(),
                fs::read_to_string(&config_path)?,
            )
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    log::debug!("Loading configuration from {}", source);

    toml::from_str(&config_str)
        .map_err(|e| ReleaseTagError::config(format!("Cannot parse '{}': {}", source, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project.name, "Release");
        assert_eq!(config.project.version_file, "version.toml");
        assert_eq!(config.remote.name, "origin");
        assert_eq!(config.behavior.editor, None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[project]\nname = \"Fabric\"\n").unwrap();
        assert_eq!(config.project.name, "Fabric");
        assert_eq!(config.project.version_file, "version.toml");
        assert_eq!(config.remote.name, "origin");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
