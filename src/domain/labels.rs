//! Label classification into Git-Flow branch prefixes

/// Prefix used when no label matches
pub const DEFAULT_PREFIX: &str = "feature";

/// Built-in label to prefix table
pub const DEFAULT_LABEL_PREFIXES: &[(&str, &str)] = &[
    ("enhancement", "feature"),
    ("invalid", "bugfix"),
    ("bug", "hotfix"),
];

/// Case-insensitive label to prefix lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
    default_prefix: String,
}

impl LabelMap {
    /// Build a table from `(label, prefix)` pairs
    ///
    /// Labels are trimmed and folded to lower case. When the same folded
    /// label appears twice, the first pair wins.
    pub fn new<I, K, V>(entries: I, default_prefix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut folded: Vec<(String, String)> = Vec::new();
        for (label, prefix) in entries {
            let key = label.as_ref().trim().to_lowercase();
            if !folded.iter().any(|(existing, _)| *existing == key) {
                folded.push((key, prefix.into()));
            }
        }

        Self {
            entries: folded,
            default_prefix: default_prefix.into(),
        }
    }

    /// The built-in table (`enhancement`, `invalid`, `bug`)
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_LABEL_PREFIXES.iter().copied(), DEFAULT_PREFIX)
    }

    /// Look up a single label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<&str> {
        let key = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, prefix)| prefix.as_str())
    }

    #[must_use]
    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pick the branch prefix for a comma-separated label list
///
/// The first label (left to right) found in `table` decides the prefix.
/// Empty input, empty segments and unknown labels fall through to the
/// table's default prefix. This never fails.
#[must_use]
pub fn classify<'a>(labels: &str, table: &'a LabelMap) -> &'a str {
    labels
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .find_map(|label| table.lookup(label))
        .unwrap_or_else(|| table.default_prefix())
}
