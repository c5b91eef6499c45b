#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Git client interface for branch provisioning
pub trait GitClient {
    /// Set a key in the global git config (`git config --global <key> <value>`)
    fn set_global_config(&self, key: &str, value: &str) -> Result<()>;

    /// Update remote-tracking refs (`git fetch <remote>`)
    fn fetch(&self, remote: &str) -> Result<()>;

    /// Whether `<remote>` has a head named exactly `branch`
    fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool>;

    /// Create and check out `branch` at `start_point` (`git checkout -b`)
    fn create_branch(&self, branch: &str, start_point: &str) -> Result<()>;

    /// Publish `branch` to `remote` (`git push <remote> <branch>`)
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}

/// Real git implementation backed by the `git` binary
#[derive(Debug, Default)]
pub struct RealGitClient {
    repo_dir: Option<PathBuf>,
}

impl RealGitClient {
    /// Run git in the current working directory
    pub const fn new() -> Self {
        Self { repo_dir: None }
    }

    /// Run git inside `repo_dir`
    pub fn in_dir(repo_dir: &Path) -> Self {
        Self {
            repo_dir: Some(repo_dir.to_path_buf()),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        info!("Executing command: git {}", args.join(" "));
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute git {}", args[0]))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl GitClient for RealGitClient {
    fn set_global_config(&self, key: &str, value: &str) -> Result<()> {
        self.run(&["config", "--global", key, value]).map(drop)
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        self.run(&["fetch", remote]).map(drop)
    }

    fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool> {
        let head_ref = format!("refs/heads/{branch}");
        let output = self.run(&["ls-remote", "--heads", remote, &head_ref])?;
        Ok(ls_remote_has_ref(&output, &head_ref))
    }

    fn create_branch(&self, branch: &str, start_point: &str) -> Result<()> {
        self.run(&["checkout", "-b", branch, start_point]).map(drop)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", remote, branch]).map(drop)
    }
}

/// Check `git ls-remote` output for an exact ref match
///
/// `ls-remote` matches patterns against the tail of ref names, so
/// `refs/heads/x` also matches `refs/heads/team/refs/heads/x`. Only an
/// exact match counts.
pub fn ls_remote_has_ref(output: &str, full_ref: &str) -> bool {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .any(|name| name == full_ref)
}
