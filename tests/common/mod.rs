#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const ISSUE_VARS: [&str; 7] = [
    "ISSUE_NUMBER",
    "ISSUE_TITLE",
    "ISSUE_LABELS",
    "GITEA_TOKEN",
    "GITEA_URL",
    "REPO_OWNER",
    "REPO_NAME",
];

/// Run git in `dir` with a throwaway identity and assert success
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A bare `origin` with a `develop` branch and a clone to run in
pub struct Fixture {
    pub root: PathBuf,
    pub remote: PathBuf,
    pub work: PathBuf,
    pub home: PathBuf,
}

impl Fixture {
    pub fn new(root: &Path) -> Self {
        let remote = root.join("remote.git");
        let seed = root.join("seed");
        let work = root.join("work");
        let home = root.join("home");

        fs::create_dir_all(&remote).unwrap();
        git(&remote, &["init", "--bare"]);
        git(&remote, &["symbolic-ref", "HEAD", "refs/heads/develop"]);

        fs::create_dir_all(&seed).unwrap();
        git(&seed, &["init"]);
        fs::write(seed.join("README.md"), "seed").unwrap();
        git(&seed, &["add", "."]);
        git(&seed, &["commit", "-m", "Initial commit"]);
        git(&seed, &["branch", "-M", "develop"]);
        git(&seed, &["remote", "add", "origin", remote.to_str().unwrap()]);
        git(&seed, &["push", "origin", "develop"]);

        git(root, &["clone", remote.to_str().unwrap(), work.to_str().unwrap()]);
        fs::create_dir_all(&home).unwrap();

        Self {
            root: root.to_path_buf(),
            remote,
            work,
            home,
        }
    }

    /// Push an extra branch to the remote, as if a previous run created it
    pub fn push_branch(&self, branch: &str) {
        git(&self.work, &["branch", branch, "origin/develop"]);
        git(&self.work, &["push", "origin", branch]);
    }

    pub fn remote_has_branch(&self, branch: &str) -> bool {
        let output = git(
            &self.remote,
            &["branch", "--list", branch, "--format=%(refname:short)"],
        );
        output.lines().any(|line| line == branch)
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join("action.log")
    }

    pub fn global_gitconfig(&self) -> PathBuf {
        self.home.join(".gitconfig")
    }

    /// The binary, isolated from the caller's environment and git config
    pub fn command(&self) -> Command {
        let mut cmd = isolated_command(&self.home);
        cmd.current_dir(&self.work)
            .arg("--log-file")
            .arg(self.log_file());
        cmd
    }
}

/// The binary with issue variables cleared and `HOME` pointed at `home`
pub fn isolated_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flowbranch").unwrap();
    for var in ISSUE_VARS {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Set every issue variable for issue #42 labelled `Bug, enhancement`
pub fn with_issue_env<'a>(cmd: &'a mut Command, gitea_url: &str) -> &'a mut Command {
    cmd.env("ISSUE_NUMBER", "42")
        .env("ISSUE_TITLE", "Crash on start")
        .env("ISSUE_LABELS", "Bug, enhancement")
        .env("GITEA_TOKEN", "s3cret")
        .env("GITEA_URL", gitea_url)
        .env("REPO_OWNER", "acme")
        .env("REPO_NAME", "widgets")
}
