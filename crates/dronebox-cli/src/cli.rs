use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dronebox_core::CONFIG_FILE;

#[derive(Parser)]
#[command(name = "dronebox")]
#[command(version, about = "Drone controller games: cloud dodging and a jukebox")]
pub struct Cli {
    /// Config file (TOML); defaults are used if it is missing
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "DRONEBOX_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fly through the clouds (arrow keys steer and set throttle, a/d restart)
    Flight,

    /// Play songs on the drone buzzer (a/d select, c play, z stop or quit)
    Jukebox,

    /// List the built-in songs, or show one by name
    Songs {
        /// Song name, case-insensitive
        name: Option<String>,

        /// One JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Manage the config file
    Config {
        /// Write the default config to this path
        #[arg(long, value_name = "PATH")]
        init: PathBuf,

        /// Replace the file if it already exists
        #[arg(long)]
        force: bool,
    },
}
