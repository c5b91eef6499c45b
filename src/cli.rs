// CommandFactory is used by tests via Cli::command()
#[allow(unused_imports)]
use clap::CommandFactory;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::color::ColorMode;
use crate::config::Overrides;
use crate::messages::Locale;

/// Create the git branch for a Gitea issue and link it to the issue
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<ColorMode>,

    /// Config file to use instead of .flowbranch.toml or the global config
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Language of the log messages
    #[arg(long, value_name = "LOCALE", global = true, ignore_case = true)]
    pub locale: Option<Locale>,

    /// Issue-reference token in branch names (e.g. "ticket", "us")
    #[arg(long, value_name = "TOKEN", global = true)]
    pub reference: Option<String>,

    /// Branch new issue branches start from
    #[arg(long, value_name = "BRANCH", global = true)]
    pub base: Option<String>,

    /// Log file, appended to on every run
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create the issue branch on the remote and link it to the issue
    Run {
        /// Fetch and query the remote, but change nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the branch name for ISSUE_NUMBER and ISSUE_LABELS
    Name,
    /// Write a commented config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Settings given on the command line that take precedence over the file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            locale: self.locale,
            reference: self.reference.clone(),
            base: self.base.clone(),
            log_file: self.log_file.clone(),
        }
    }
}
