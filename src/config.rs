//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/medhier/medhier.toml`
//! 3. Environment variables: `MEDHIER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for medhier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one `<id>.json` document per member
    /// (default: ~/.medhier/members)
    pub members_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            members_dir: dirs_default_members_dir(),
        }
    }
}

/// Get the default members directory (~/.medhier/members).
fn dirs_default_members_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".medhier").join("members"))
        .unwrap_or_else(|| PathBuf::from("~/.medhier/members"))
}

/// Get the XDG config directory for medhier.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "medhier").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("medhier.toml"))
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    members_dir: Option<PathBuf>,
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand environment variables and tilde in a path string.
///
/// Supports `$VAR`, `${VAR}` and `~`. Falls back to the input on failed
/// expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.members_dir.to_string_lossy().as_ref());
        self.members_dir = PathBuf::from(expanded);
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/medhier/medhier.toml`
    /// 3. Environment variables: `MEDHIER_*` prefix (explicit override)
    pub fn load() -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Load global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                if let Some(members_dir) = raw.members_dir {
                    current.members_dir = members_dir;
                }
            }
        }

        // 3. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply MEDHIER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("MEDHIER").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("members_dir") {
            settings.members_dir = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# medhier configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/medhier/medhier.toml
#   Env:    MEDHIER_* environment variables (explicit overrides)

# Directory holding one <id>.json document per member
# members_dir = "~/.medhier/members"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load().expect("load defaults");
        assert!(!settings.members_dir.as_os_str().is_empty());
    }

    #[test]
    fn given_tilde_in_members_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            members_dir: PathBuf::from("~/.medhier/members"),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let dir_str = settings.members_dir.to_string_lossy();
        assert!(
            dir_str.starts_with(&home),
            "members_dir should start with home dir: {}",
            dir_str
        );
        assert!(
            !dir_str.contains('~'),
            "members_dir should not contain tilde: {}",
            dir_str
        );
    }

    #[test]
    fn given_env_var_in_path_when_expand_paths_then_expands_variable() {
        let mut settings = Settings {
            members_dir: PathBuf::from("$HOME/.medhier/members"),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.members_dir.to_string_lossy().starts_with(&home),
            "members_dir should expand $HOME"
        );
    }
}
