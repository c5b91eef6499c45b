//! Error types for the provisioning run
//!
//! Every variant is fatal. The caller logs the full cause chain and exits
//! with status 1; no variant is retried or rolled back.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Invalid or missing input, detected before any git or API call
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid issue number {value:?}")]
    InvalidIssueNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid {field} {value:?}: {reason}")]
    InvalidSetting {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Step of the provisioning sequence that touches the outside world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ConfigureIdentity,
    Fetch,
    QueryRemote,
    CreateBranch,
    Push,
    LinkIssue,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ConfigureIdentity => "identity configuration",
            Self::Fetch => "fetch",
            Self::QueryRemote => "remote branch lookup",
            Self::CreateBranch => "branch creation",
            Self::Push => "push",
            Self::LinkIssue => "issue link",
        };
        f.write_str(name)
    }
}

/// Fatal error of a provisioning run
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// The local git command failed or could not be spawned
    #[error("git {step} failed")]
    Git {
        step: Step,
        #[source]
        source: anyhow::Error,
    },

    /// The remote could not be queried or updated
    #[error("remote {step} failed")]
    Remote {
        step: Step,
        #[source]
        source: anyhow::Error,
    },

    /// The issue tracker rejected or never received the request
    #[error("issue tracker request for issue #{issue} failed")]
    Api {
        issue: i64,
        #[source]
        source: anyhow::Error,
    },
}

impl ProvisionError {
    pub(crate) fn git(step: Step) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| Self::Git { step, source }
    }

    pub(crate) fn remote(step: Step) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| Self::Remote { step, source }
    }
}
