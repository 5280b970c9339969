mod cli;
mod commands;
mod input;
mod scene;
mod shutdown;
mod terminal;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use dronebox_core::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("dronebox=info".parse()?);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn load_config(path: &Path) -> Config {
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) if e.is_not_found() => {
            info!("No config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    match cli.command {
        Command::Flight => commands::flight::run(&load_config(&cli.config).flight),
        Command::Jukebox => commands::jukebox::run(&load_config(&cli.config).jukebox),
        Command::Songs { name, json } => commands::songs::run(name.as_deref(), json),
        Command::Config { init, force } => commands::config::init(&init, force),
    }
}
