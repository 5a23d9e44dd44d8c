// src/main.rs
mod aggregate;
mod cli;
mod config;
mod extract;
mod partition;
mod scan;
mod tags;
mod tui;
mod walker;

use clap::Parser;
use clap::error::ErrorKind;

use cli::Args;
use config::Config;
use scan::{ScanOptions, handle_scan, prompt_directory};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Load configuration
    let config = Config::load()?;

    // Help exits 0; any malformed or unknown token exits 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let jobs = args.jobs.unwrap_or(config.scan.default_jobs);
    if jobs == 0 {
        eprintln!("error: --jobs must be at least 1");
        std::process::exit(1);
    }

    let directory = match args.directory {
        Some(dir) => dir,
        None => prompt_directory(&config.ui.color.theme)?,
    };

    let opts = ScanOptions {
        directory,
        jobs,
        verbose: args.verbose,
    };

    handle_scan(&opts, &config).await?;

    Ok(())
}
