//! Recursive audio file discovery.
//!
//! This module walks a library root and collects every file whose extension
//! is on the supported allow-list, reporting progress as files are found.

use std::path::{Path, PathBuf};
use tokio::task;
use walkdir::WalkDir;

/// Extensions accepted by the walk, without the leading dot.
///
/// Matching is case-sensitive: `track.mp3` is discovered, `track.MP3` is not.
pub const ALLOWED_EXTENSIONS: &[&str] = &["mp3", "ogg", "flac", "wav"];

/// Returns true if the path carries a supported audio extension.
///
/// Files without any extension are never considered audio files.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use muviz::walker::is_audio_file;
///
/// assert!(is_audio_file(Path::new("albums/track.flac")));
/// assert!(!is_audio_file(Path::new("albums/cover.jpg")));
/// assert!(!is_audio_file(Path::new("albums/README")));
/// ```
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Synchronous walk core. Symlinks are not followed, which also rules out
/// filesystem cycles.
fn collect_audio_files<F>(root: &Path, exclude_patterns: &[String], progress: &F) -> Vec<PathBuf>
where
    F: Fn(String),
{
    let mut track_files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            let file_name = e.file_name().to_string_lossy();
            !exclude_patterns.iter().any(|p| file_name == p.as_str())
        })
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() && is_audio_file(entry.path()) {
            progress(entry.path().display().to_string());
            track_files.push(entry.into_path());
        }
    }

    track_files
}

/// Recursively discovers audio files under `root`.
///
/// Directory entries whose name exactly matches one of `exclude_patterns`
/// are pruned from the walk. The callback fires once per accepted file and
/// drives the discovery spinner.
///
/// The returned paths are in directory-traversal order. That order is
/// platform-defined; downstream code only relies on it for partition
/// boundaries, never for correctness.
///
/// # Errors
///
/// Returns an error if the walking task panics. A nonexistent `root` is a
/// user-input error and is validated by the scan workflow before this is
/// called.
pub async fn walk_directory<F>(
    root: &Path,
    exclude_patterns: Vec<String>,
    progress_callback: F,
) -> color_eyre::Result<Vec<PathBuf>>
where
    F: Fn(String) + Send + Sync + 'static,
{
    let root = root.to_path_buf();

    let track_files = task::spawn_blocking(move || {
        collect_audio_files(&root, &exclude_patterns, &progress_callback)
    })
    .await?;

    Ok(track_files)
}
