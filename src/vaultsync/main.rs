use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;
use vaultsync::config::SyncConfig;
use vaultsync::error::Result;
use vaultsync::sync::{self, SyncReport};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SyncConfig::load(&cli.config)?;
    let report = sync::run(&config)?;
    print_summary(&report);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "vaultsync=debug" } else { "vaultsync=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(report: &SyncReport) {
    println!(
        "{}",
        format!("Synced {} notes", report.written.len()).green()
    );
    if !report.skipped.is_empty() {
        println!(
            "{}",
            format!("Skipped {} without front matter", report.skipped.len()).dimmed()
        );
    }
    for category in &report.missing_categories {
        println!("{}", format!("No folder for category: {}", category).yellow());
    }
}
