//! Run command - provision the issue branch and link it to the issue

use anyhow::Result;
use std::process::ExitCode;
use tracing::{error, info};

use crate::color::ColorMode;
use crate::config::Config;
use crate::context::IssueContext;
use crate::error::ProvisionError;
use crate::integrations::git::RealGitClient;
use crate::integrations::gitea::GiteaClient;
use crate::logging;
use crate::service::{Provisioner, RunMode};

/// Provision the branch for the issue described by the environment
///
/// Once logging is up, every failure is logged and turned into
/// `ExitCode::FAILURE` instead of an `Err`, so the diagnostic lands in the
/// log file too.
///
/// # Errors
/// Returns an error only if the log file cannot be opened
pub fn cmd_run(config: &Config, mode: RunMode, color_mode: ColorMode) -> Result<ExitCode> {
    let _guard = logging::init(&config.log.file, color_mode)?;

    match provision(config, mode) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            let detail = format!("{:#}", anyhow::Error::new(err));
            error!("{}", config.locale.fatal(&detail));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn provision(config: &Config, mode: RunMode) -> Result<(), ProvisionError> {
    config.validate()?;
    let issue = IssueContext::from_env()?;

    let tracker = GiteaClient::new(&issue.api_url, &issue.token, config.api_timeout())
        .map_err(|source| ProvisionError::Api {
            issue: issue.issue_number,
            source,
        })?;

    let service = Provisioner::new(RealGitClient::new(), tracker);
    let report = service.run(&issue, config, mode)?;

    if let Some(updated) = report.issue.as_ref().filter(|i| !i.html_url.is_empty()) {
        info!("{}", updated.html_url);
    }
    info!(
        "{}",
        config.locale.summary(report.branch.as_str(), report.outcome)
    );
    Ok(())
}
