//! Name command - print the branch name for the current issue

use anyhow::Result;

use crate::config::Config;
use crate::context::BranchInputs;
use crate::domain::BranchName;

/// Print the branch name computed from `ISSUE_NUMBER` and `ISSUE_LABELS`
///
/// Touches neither git nor the issue tracker, so it is safe to call from
/// any step of a workflow.
///
/// # Errors
/// Returns an error if the configuration is invalid or `ISSUE_NUMBER` is
/// missing or malformed
pub fn cmd_name(config: &Config) -> Result<()> {
    config.validate()?;
    let inputs = BranchInputs::from_env()?;
    let branch = branch_name(config, &inputs);
    println!("{branch}");
    Ok(())
}

fn branch_name(config: &Config, inputs: &BranchInputs) -> BranchName {
    BranchName::from_labels(
        &inputs.labels,
        &config.label_map(),
        &config.branch.reference,
        inputs.issue_number,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn inputs(number: i64, labels: &str) -> BranchInputs {
        BranchInputs {
            issue_number: number,
            labels: labels.to_string(),
        }
    }

    #[test]
    fn test_branch_name_default_config() {
        let config = Config::default();
        assert_eq!(
            branch_name(&config, &inputs(42, "Bug, enhancement")).as_str(),
            "hotfix/ticket-42"
        );
    }

    #[test]
    fn test_branch_name_uses_reference_and_label_table() {
        let mut config = Config::default();
        config.branch.reference = "us".to_string();
        config.labels = Some(BTreeMap::from([(
            "chore".to_string(),
            "maintenance".to_string(),
        )]));

        assert_eq!(
            branch_name(&config, &inputs(5, "chore")).as_str(),
            "maintenance/us-5"
        );
        // The file table replaces the built-in one
        assert_eq!(
            branch_name(&config, &inputs(5, "bug")).as_str(),
            "feature/us-5"
        );
    }
}
