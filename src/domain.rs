// Domain logic: label classification and branch naming

pub mod branch;
pub mod labels;

pub use branch::{BranchName, DEFAULT_REFERENCE};
pub use labels::{classify, LabelMap, DEFAULT_LABEL_PREFIXES, DEFAULT_PREFIX};
