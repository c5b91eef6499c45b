//! Init command - write a commented configuration template

use anyhow::{Context, Result};
use std::path::Path;

use crate::color;
use crate::config::Config;

/// Write the template to `path` unless it exists (or `force` is set)
///
/// # Errors
/// Returns an error if the parent directory or the file cannot be written
pub fn cmd_init(path: &Path, force: bool, color_mode: color::ColorMode) -> Result<()> {
    if path.exists() && !force {
        eprintln!(
            "{}",
            color::warn(
                color_mode,
                format!("Config already exists: {}", path.display())
            )
        );
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(path, Config::template())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    eprintln!(
        "{}",
        color::success(color_mode, format!("Created config: {}", path.display()))
    );
    Ok(())
}
