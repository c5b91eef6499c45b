// Export modules for the binary and the integration tests
pub mod cli;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod messages;
pub mod service;

// Integration modules
pub mod integrations;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;
