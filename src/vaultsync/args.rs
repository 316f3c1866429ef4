use clap::Parser;
use std::path::PathBuf;

use vaultsync::config::CONFIG_FILENAME;

#[derive(Parser, Debug)]
#[command(name = "vaultsync")]
#[command(version)]
#[command(about = "Sync Obsidian notes into an Astro content collection", long_about = None)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Log every file processed
    #[arg(short, long)]
    pub verbose: bool,
}
