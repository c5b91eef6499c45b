use std::fmt;

use super::labels::{classify, LabelMap};

/// Default issue-reference token in branch names
pub const DEFAULT_REFERENCE: &str = "ticket";

/// Branch name in the form `<prefix>/<reference>-<issue number>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    #[must_use]
    pub fn new(prefix: &str, reference: &str, issue_number: i64) -> Self {
        Self(format!("{prefix}/{reference}-{issue_number}"))
    }

    /// Classify `labels` with `table` and build the branch name
    #[must_use]
    pub fn from_labels(labels: &str, table: &LabelMap, reference: &str, issue_number: i64) -> Self {
        Self::new(classify(labels, table), reference, issue_number)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
