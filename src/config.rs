//! Configuration module
//!
//! This module handles loading deployment settings from TOML files and
//! merging command-line overrides on top of them.

pub mod loader;
pub mod schema;
pub mod template;

pub use loader::LOCAL_CONFIG_FILE;
pub use schema::{ApiConfig, BranchConfig, Config, GitConfig, LogConfig, Overrides};
