//! Issue data read from the CI environment
//!
//! The environment is read exactly once, here. Everything downstream takes
//! an `IssueContext` so nothing else depends on ambient process state.

use std::fmt;

use crate::error::ConfigError;

pub const ISSUE_NUMBER: &str = "ISSUE_NUMBER";
pub const ISSUE_TITLE: &str = "ISSUE_TITLE";
pub const ISSUE_LABELS: &str = "ISSUE_LABELS";
pub const GITEA_TOKEN: &str = "GITEA_TOKEN";
pub const GITEA_URL: &str = "GITEA_URL";
pub const REPO_OWNER: &str = "REPO_OWNER";
pub const REPO_NAME: &str = "REPO_NAME";

/// Variables that must be present and non-empty, in reporting order
pub const REQUIRED_VARS: [&str; 6] = [
    ISSUE_NUMBER,
    ISSUE_TITLE,
    GITEA_TOKEN,
    GITEA_URL,
    REPO_OWNER,
    REPO_NAME,
];

/// Validated issue and repository data for one run
#[derive(Clone, PartialEq, Eq)]
pub struct IssueContext {
    pub issue_number: i64,
    pub issue_title: String,
    /// Raw comma-separated label list, possibly empty
    pub labels: String,
    pub token: String,
    pub api_url: String,
    pub owner: String,
    pub repo: String,
}

impl fmt::Debug for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueContext")
            .field("issue_number", &self.issue_number)
            .field("issue_title", &self.issue_title)
            .field("labels", &self.labels)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish()
    }
}

impl IssueContext {
    /// Read the context from the process environment
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or empty, or if
    /// `ISSUE_NUMBER` is not a 64-bit integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the context through `lookup` (a stand-in for `std::env::var`)
    ///
    /// All missing variables are reported together.
    ///
    /// # Errors
    /// See [`IssueContext::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(vec![key]));

        Ok(Self {
            issue_number: parse_issue_number(&required(ISSUE_NUMBER)?)?,
            issue_title: required(ISSUE_TITLE)?,
            labels: get(ISSUE_LABELS).unwrap_or_default(),
            token: required(GITEA_TOKEN)?,
            api_url: required(GITEA_URL)?,
            owner: required(REPO_OWNER)?,
            repo: required(REPO_NAME)?,
        })
    }
}

/// Issue number and labels only, for commands that never touch git or the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInputs {
    pub issue_number: i64,
    pub labels: String,
}

impl BranchInputs {
    /// # Errors
    /// Returns an error if `ISSUE_NUMBER` is missing or not a 64-bit integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    /// See [`BranchInputs::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = lookup(ISSUE_NUMBER)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::Missing(vec![ISSUE_NUMBER]))?;

        Ok(Self {
            issue_number: parse_issue_number(&number)?,
            labels: lookup(ISSUE_LABELS).unwrap_or_default(),
        })
    }
}

fn parse_issue_number(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| ConfigError::InvalidIssueNumber {
            value: value.to_string(),
            source,
        })
}
