//! Library scan workflow.
//!
//! Drives the whole pipeline: discover audio files, partition them across
//! the worker pool, extract tags concurrently, then aggregate and render
//! the genre distribution.

use std::path::PathBuf;

use dialoguer::Input;

use crate::aggregate::{distribution_summary, genre_distribution};
use crate::config::Config;
use crate::extract::extract_tags;
use crate::partition::partition;
use crate::tui::{UI, truncate_status};
use crate::walker::walk_directory;

/// Immutable per-run options, resolved once from CLI flags and config.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub directory: PathBuf,
    pub jobs: usize,
    pub verbose: bool,
}

/// Asks for the scan root when `--directory` was omitted.
pub fn prompt_directory(theme: &str) -> color_eyre::Result<PathBuf> {
    let theme = UI::get_colorful_theme(theme);
    let input: String = Input::with_theme(&theme)
        .with_prompt("Directory to scan")
        .interact_text()?;

    Ok(PathBuf::from(input))
}

pub async fn handle_scan(opts: &ScanOptions, config: &Config) -> color_eyre::Result<()> {
    let ui = UI::new()?.with_color_theme(config.ui.color.theme.clone());

    // A missing scan root is a user-input error, checked before any worker
    // is dispatched.
    if !opts.directory.exists() {
        ui.print_error(&format!(
            "Directory does not exist: {}",
            opts.directory.display()
        ))?;
        std::process::exit(1);
    }

    ui.init(&format!("Library: {}", opts.directory.display()))?;

    if opts.verbose {
        ui.print_info(&format!(
            "Options: directory={}, jobs={}",
            opts.directory.display(),
            opts.jobs
        ))?;
    }

    // Phase 1: walk the library root
    ui.print_info("Phase 1/2: Discovering audio files")?;
    let spinner = ui.create_counting_spinner("Scanning directory tree...");

    let tracks = walk_directory(&opts.directory, config.scan.exclude_patterns.clone(), {
        let spinner = spinner.clone();
        move |path| {
            spinner.inc(1);
            spinner.set_message(truncate_status(&path));
        }
    })
    .await?;

    spinner.finish_and_clear();
    ui.print_success(&format!("Discovered {} audio files", tracks.len()))?;

    // Phase 2: read tags across the worker pool
    ui.print_info(&format!(
        "Phase 2/2: Reading tags with {} workers",
        opts.jobs
    ))?;

    let work_items = partition(tracks, opts.jobs);

    if opts.verbose {
        let mut start = 0;
        for (i, item) in work_items.iter().enumerate() {
            ui.print_info(&format!(
                "Worker #{}: items {}..{}",
                i + 1,
                start,
                start + item.len()
            ))?;
            start += item.len();
        }
    }

    let total: u64 = work_items.iter().map(|item| item.len() as u64).sum();
    let pb = ui.create_progress_bar(total, "Reading tags");

    let stats = extract_tags(work_items, {
        let pb = pb.clone();
        move |path| {
            pb.set_message(truncate_status(&path));
            pb.inc(1);
        }
    })
    .await?;

    pb.finish_and_clear();
    ui.print_success(&format!("Read tags from {} files", stats.tags_by_file.len()))?;

    if !stats.errors.is_empty() {
        ui.print_warning(&format!(
            "{} file(s) skipped due to unreadable or corrupt tags",
            stats.errors.len()
        ))?;
        if opts.verbose {
            for error in &stats.errors {
                ui.print_warning(error)?;
            }
        }
    }

    // Aggregate and render
    let counts = genre_distribution(&stats.tags_by_file);
    let summary = distribution_summary(&counts);
    ui.print_distribution(&summary)?;

    ui.cleanup()?;

    Ok(())
}
