//! Command-line interface definitions.
//!
//! This module defines the CLI structure using clap. Exit-code policy lives
//! in `main`: help exits 0, any malformed or unknown token exits 1.

use crate::tui::BANNER;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "muviz")]
#[command(about = "Visualise the genre distribution of a music library")]
#[command(before_help = BANNER)]
#[command(version)]
pub struct Args {
    /// Directory to scan (prompted interactively if omitted)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Number of tag extraction workers (default from config, initially 4)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Emit per-file progress and diagnostic detail
    #[arg(short, long)]
    pub verbose: bool,
}
