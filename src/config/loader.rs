//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::schema::{Config, Overrides};
use crate::domain::{LabelMap, DEFAULT_LABEL_PREFIXES};
use crate::error::ConfigError;

/// File name of the per-repository config
pub const LOCAL_CONFIG_FILE: &str = ".flowbranch.toml";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration with fallback
    ///
    /// Load priority:
    /// 1. `explicit` path (from `--config`), which must exist
    /// 2. Local config (`.flowbranch.toml` in the current directory)
    /// 3. Global config (`~/.config/flowbranch/config.toml`)
    /// 4. Default config
    ///
    /// # Errors
    /// Returns an error if a configuration file exists but cannot be read or parsed
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(
            explicit,
            &Self::local_config_path(),
            Self::global_config_path().as_deref(),
        )
    }

    fn load_from(explicit: Option<&Path>, local: &Path, global: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if local.exists() {
            return Self::from_file(local);
        }

        if let Some(global) = global {
            if global.exists() {
                return Self::from_file(global);
            }
        }

        Ok(Self::default())
    }

    /// Get the local config path (relative to the current directory)
    #[must_use]
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Get the global config path
    /// Respects `XDG_CONFIG_HOME` environment variable on all platforms.
    /// Fallback: `$HOME/.config/flowbranch/config.toml`
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("flowbranch").join("config.toml"))
    }

    /// Apply command-line overrides (they take precedence over the file)
    #[must_use]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(reference) = &overrides.reference {
            self.branch.reference.clone_from(reference);
        }
        if let Some(base) = &overrides.base {
            self.branch.base.clone_from(base);
        }
        if let Some(log_file) = &overrides.log_file {
            self.log.file.clone_from(log_file);
        }
        self
    }

    /// Check the literals that end up in git ref names
    ///
    /// # Errors
    /// Returns the first invalid setting found
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ref_component("branch.reference", &self.branch.reference)?;
        check_ref_component("branch.default_prefix", &self.branch.default_prefix)?;
        check_not_blank("branch.base", &self.branch.base)?;
        check_not_blank("branch.remote", &self.branch.remote)?;
        check_present("git.user_name", &self.git.user_name)?;
        check_present("git.user_email", &self.git.user_email)?;

        if let Some(labels) = &self.labels {
            let mut seen: Vec<String> = Vec::with_capacity(labels.len());
            for (label, prefix) in labels {
                check_ref_component("labels prefix", prefix)?;

                // Keys differing only in case would map the same label twice
                let folded = label.trim().to_lowercase();
                if seen.contains(&folded) {
                    return Err(ConfigError::InvalidSetting {
                        field: "labels",
                        value: label.clone(),
                        reason: "duplicates another label when case is ignored",
                    });
                }
                seen.push(folded);
            }
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                field: "api.timeout_secs",
                value: "0".to_string(),
                reason: "must be greater than zero",
            });
        }

        Ok(())
    }

    /// The label table to classify with
    #[must_use]
    pub fn label_map(&self) -> LabelMap {
        self.labels.as_ref().map_or_else(
            || {
                LabelMap::new(
                    DEFAULT_LABEL_PREFIXES.iter().copied(),
                    self.branch.default_prefix.clone(),
                )
            },
            |labels| LabelMap::new(labels, self.branch.default_prefix.clone()),
        )
    }

    #[must_use]
    pub const fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// `<remote>/<base>`, the start point of new branches
    #[must_use]
    pub fn start_point(&self) -> String {
        format!("{}/{}", self.branch.remote, self.branch.base)
    }
}

fn check_not_blank(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidSetting {
            field,
            value: value.to_string(),
            reason: "must be non-empty and contain no whitespace",
        });
    }
    Ok(())
}

fn check_present(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidSetting {
            field,
            value: value.to_string(),
            reason: "must be non-empty",
        });
    }
    Ok(())
}

/// A single path component of a git ref (see `git check-ref-format`)
fn check_ref_component(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = value.is_empty()
        || value.starts_with('.')
        || value.starts_with('-')
        || value.ends_with(".lock")
        || value.contains("..")
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "/~^:?*[\\".contains(c));

    if invalid {
        return Err(ConfigError::InvalidSetting {
            field,
            value: value.to_string(),
            reason: "must be a single valid git ref component",
        });
    }
    Ok(())
}
