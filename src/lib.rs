//! # muviz - Music Library Visualiser
//!
//! muviz inventories an audio library: it recursively discovers audio files
//! under a root directory, extracts their embedded metadata tags across a
//! fixed pool of concurrent workers, and renders the library's genre
//! distribution as a terminal chart.
//!
//! ## Features
//!
//! - **Recursive Discovery**: Walks the whole library tree and picks up
//!   `.mp3`, `.ogg`, `.flac`, and `.wav` files
//! - **Concurrent Tag Extraction**: Discovered files are statically
//!   partitioned across a fixed worker pool; each worker reads tags into
//!   its own local table, so the hot path needs no locking
//! - **Fault Isolation**: A single unreadable or corrupt file is skipped
//!   and reported, never aborting the run
//! - **Genre Distribution Chart**: Normalized genre counts rendered as a
//!   fixed-width terminal bar chart with progress tracking throughout
//!
//! ## Command Line Usage
//!
//! ```bash
//! # Scan a library
//! muviz --directory ~/Music
//!
//! # More workers, verbose diagnostics
//! muviz -d ~/Music -j 8 -v
//!
//! # Prompt for the directory interactively
//! muviz
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use muviz::aggregate::genre_distribution;
//! use muviz::extract::extract_tags;
//! use muviz::partition::partition;
//! use muviz::walker::walk_directory;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> color_eyre::Result<()> {
//!     let tracks = walk_directory(Path::new("/music"), Vec::new(), |_| {}).await?;
//!
//!     let work_items = partition(tracks, 4);
//!     let stats = extract_tags(work_items, |_| {}).await?;
//!
//!     for (genre, count) in genre_distribution(&stats.tags_by_file) {
//!         println!("{}: {}", genre, count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! muviz uses a TOML configuration file located at
//! `~/.config/muviz/config.toml`, created with defaults on first run. It
//! holds the default worker count, directory names to exclude from the
//! walk, and the UI color theme. CLI flags override config values.
//!
//! ## Module Organization
//!
//! - [`aggregate`]: Genre distribution derived from the merged tag table
//! - [`cli`]: Command-line argument parsing
//! - [`config`]: Configuration management
//! - [`extract`]: Concurrent tag extraction worker pool
//! - [`partition`]: Static work partitioning
//! - [`scan`]: The end-to-end scan workflow
//! - [`tags`]: Per-file tag reading
//! - [`tui`]: Terminal user interface components
//! - [`walker`]: Recursive audio file discovery

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod extract;
pub mod partition;
pub mod scan;
pub mod tags;
pub mod tui;
pub mod walker;

// Re-export commonly used types
pub use aggregate::{GenreCount, TagTable};
pub use config::Config;
pub use extract::ExtractStats;
pub use scan::ScanOptions;
pub use tags::TrackTags;
