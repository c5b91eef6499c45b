//! Branch provisioning sequence
//!
//! Named -> identity + fetch -> remote lookup -> (create + push) -> link.
//! Each step either succeeds or ends the run with a `ProvisionError`; there
//! is no retry and nothing is rolled back.

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::context::IssueContext;
use crate::domain::BranchName;
use crate::error::{ProvisionError, Step};
use crate::integrations::git::GitClient;
use crate::integrations::gitea::{IssueInfo, IssueTracker};

/// Whether mutating steps are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Apply,
    /// Read-only: fetch and look up the remote, log the rest
    DryRun,
}

/// What happened to the branch on the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    Created,
    AlreadyExists,
    /// Dry run only
    WouldCreate,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub branch: BranchName,
    pub outcome: BranchOutcome,
    /// The updated issue, `None` on a dry run
    pub issue: Option<IssueInfo>,
}

/// Provisions issue branches using a git client and an issue tracker
pub struct Provisioner<G, T>
where
    G: GitClient,
    T: IssueTracker,
{
    git: G,
    tracker: T,
}

impl<G, T> Provisioner<G, T>
where
    G: GitClient,
    T: IssueTracker,
{
    pub const fn new(git: G, tracker: T) -> Self {
        Self { git, tracker }
    }

    /// Ensure the issue branch exists on the remote and link it to the issue
    ///
    /// An existing remote branch is left untouched; only the link step runs.
    ///
    /// # Errors
    /// Returns the error of the first step that fails. Later steps never run.
    pub fn run(
        &self,
        issue: &IssueContext,
        config: &Config,
        mode: RunMode,
    ) -> Result<ProvisionReport, ProvisionError> {
        let locale = config.locale;
        let remote = config.branch.remote.as_str();
        let labels = config.label_map();

        let branch = BranchName::from_labels(
            &issue.labels,
            &labels,
            &config.branch.reference,
            issue.issue_number,
        );
        info!("{}", locale.branch_name_set(branch.as_str()));

        if mode == RunMode::Apply {
            info!("{}", locale.configuring_git());
            self.git
                .set_global_config("user.name", &config.git.user_name)
                .map_err(ProvisionError::git(Step::ConfigureIdentity))?;
            self.git
                .set_global_config("user.email", &config.git.user_email)
                .map_err(ProvisionError::git(Step::ConfigureIdentity))?;
        }

        info!("{}", locale.fetching(remote));
        self.git
            .fetch(remote)
            .map_err(ProvisionError::git(Step::Fetch))?;

        info!("{}", locale.checking_branch(branch.as_str()));
        let exists = self
            .git
            .remote_branch_exists(remote, branch.as_str())
            .map_err(ProvisionError::remote(Step::QueryRemote))?;

        let outcome = if exists {
            info!("{}", locale.branch_exists(branch.as_str()));
            BranchOutcome::AlreadyExists
        } else if mode == RunMode::DryRun {
            info!("{}", locale.dry_run_create(branch.as_str(), &config.branch.base));
            BranchOutcome::WouldCreate
        } else {
            info!("{}", locale.creating_branch(branch.as_str(), &config.branch.base));
            self.git
                .create_branch(branch.as_str(), &config.start_point())
                .map_err(ProvisionError::git(Step::CreateBranch))?;
            self.git
                .push(remote, branch.as_str())
                .map_err(ProvisionError::remote(Step::Push))?;
            info!("{}", locale.branch_created(branch.as_str()));
            BranchOutcome::Created
        };

        if mode == RunMode::DryRun {
            info!("{}", locale.dry_run_link(branch.as_str(), issue.issue_number));
            return Ok(ProvisionReport {
                branch,
                outcome,
                issue: None,
            });
        }

        info!("{}", locale.assigning(branch.as_str(), issue.issue_number));
        let updated = self
            .tracker
            .set_issue_ref(&issue.owner, &issue.repo, issue.issue_number, branch.as_str())
            .with_context(|| format!("failed to assign branch '{branch}'"))
            .map_err(|source| ProvisionError::Api {
                issue: issue.issue_number,
                source,
            })?;
        info!("{}", locale.assigned(branch.as_str(), issue.issue_number));

        Ok(ProvisionReport {
            branch,
            outcome,
            issue: Some(updated),
        })
    }
}
