//! Configuration schema and type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_PREFIX, DEFAULT_REFERENCE};
use crate::messages::Locale;

/// Deployment settings for flowbranch
///
/// Issue data comes from the environment (see `IssueContext`); this file
/// only holds the literals that differ between deployments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub branch: BranchConfig,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub api: ApiConfig,
    /// Label to prefix table; replaces the built-in table when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

/// Branch naming and placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchConfig {
    /// Token between the prefix and the issue number (`feature/<reference>-42`)
    #[serde(default = "default_reference")]
    pub reference: String,
    /// Branch new branches are cut from
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Prefix used when no label matches
    #[serde(default = "default_prefix")]
    pub default_prefix: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            base: default_base(),
            remote: default_remote(),
            default_prefix: default_prefix(),
        }
    }
}

fn default_reference() -> String {
    DEFAULT_REFERENCE.to_string()
}

fn default_base() -> String {
    "develop".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Identity written to the global git config before creating branches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitConfig {
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_user_email")]
    pub user_email: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            user_email: default_user_email(),
        }
    }
}

fn default_user_name() -> String {
    "gitea-actions".to_string()
}

fn default_user_email() -> String {
    "actions@gitea.com".to_string()
}

/// Log sink settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Append-only log file, relative paths resolve from the working directory
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("action.log")
}

/// Issue tracker API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Command-line overrides applied on top of the loaded file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub locale: Option<Locale>,
    pub reference: Option<String>,
    pub base: Option<String>,
    pub log_file: Option<PathBuf>,
}
