#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
mod client;

pub use client::{normalize_api_base, GiteaClient, IssueInfo};

use anyhow::Result;

/// Issue tracker operations needed to link a branch to an issue
pub trait IssueTracker {
    /// Set the branch reference (`ref`) of issue `number` in `owner/repo`
    fn set_issue_ref(&self, owner: &str, repo: &str, number: i64, branch: &str)
        -> Result<IssueInfo>;
}
