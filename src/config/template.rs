//! Commented config template written by `flowbranch init`

use super::schema::Config;

const TEMPLATE: &str = r#"# flowbranch configuration
# Issue data (ISSUE_NUMBER, ISSUE_LABELS, GITEA_URL, ...) always comes from
# the environment. This file only holds per-deployment settings.

# Language of progress log lines: "en" or "fr"
locale = "en"

[branch]
# Token between prefix and issue number: feature/<reference>-42
reference = "ticket"
# Branch new branches are cut from
base = "develop"
remote = "origin"
# Prefix used when no label matches
default_prefix = "feature"

[git]
# Identity written to the global git config before creating branches
user_name = "gitea-actions"
user_email = "actions@gitea.com"

[log]
# Append-only log file (also mirrored to stdout)
file = "action.log"

[api]
timeout_secs = 30

# Label to prefix table (case-insensitive, first matching label wins).
# Uncomment to replace the built-in table.
# [labels]
# enhancement = "feature"
# invalid = "bugfix"
# bug = "hotfix"
"#;

impl Config {
    /// Template for `.flowbranch.toml`
    #[must_use]
    pub const fn template() -> &'static str {
        TEMPLATE
    }
}
