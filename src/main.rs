use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use flowbranch::cli::{Cli, Commands};
use flowbranch::color::{self, ColorMode};
use flowbranch::commands;
use flowbranch::config::{Config, LOCAL_CONFIG_FILE};
use flowbranch::service::RunMode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = ColorMode::resolve(cli.color);

    match dispatch(cli, color_mode) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", color::error(color_mode, format!("Error: {err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli, color_mode: ColorMode) -> anyhow::Result<ExitCode> {
    let overrides = cli.overrides();
    let load_config = |path: Option<&Path>| -> anyhow::Result<Config> {
        Ok(Config::load(path)?.with_overrides(&overrides))
    };

    match cli.command.unwrap_or(Commands::Run { dry_run: false }) {
        Commands::Run { dry_run } => {
            let config = load_config(cli.config.as_deref())?;
            let mode = if dry_run { RunMode::DryRun } else { RunMode::Apply };
            commands::run::cmd_run(&config, mode, color_mode)
        }
        Commands::Name => {
            let config = load_config(cli.config.as_deref())?;
            commands::name::cmd_name(&config)?;
            Ok(ExitCode::SUCCESS)
        }
        // Does not load the config, so a broken file can be replaced with --force
        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
            commands::init::cmd_init(&path, force, color_mode)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
