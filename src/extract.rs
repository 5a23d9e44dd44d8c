//! Concurrent tag extraction.
//!
//! One worker per work item, each on its own blocking thread. Workers write
//! only into their own local stats while running; the main task blocks on a
//! single join barrier and merges the locals afterwards. No table is shared
//! between workers during processing.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tokio::task;

use crate::tags::{self, TrackTags};

/// Results accumulated during tag extraction.
///
/// `tags_by_file` holds the files whose tags were read successfully; every
/// failed file contributes one entry to `errors` instead.
#[derive(Debug, Default)]
pub struct ExtractStats {
    pub tags_by_file: HashMap<PathBuf, TrackTags>,
    pub errors: Vec<String>,
}

impl ExtractStats {
    /// Creates a new empty `ExtractStats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds another worker's local stats into this one.
    ///
    /// Work items are disjoint, so the key sets never collide.
    pub fn merge(&mut self, other: ExtractStats) {
        self.tags_by_file.extend(other.tags_by_file);
        self.errors.extend(other.errors);
    }
}

/// Sequentially processes one work item.
///
/// The progress callback fires once per file attempted, success or failure.
/// A file whose tags cannot be read is recorded and skipped; it never aborts
/// the worker.
fn read_work_item<F>(paths: Vec<PathBuf>, progress: &F) -> ExtractStats
where
    F: Fn(String),
{
    let mut local = ExtractStats::new();

    for path in paths {
        progress(path.display().to_string());

        match tags::read_tags(&path) {
            Ok(file_tags) => {
                local.tags_by_file.insert(path, file_tags);
            }
            Err(e) => {
                local
                    .errors
                    .push(format!("Failed to read tags from {}: {}", path.display(), e));
            }
        }
    }

    local
}

/// Runs tag extraction across the worker pool and merges the results.
///
/// Spawns exactly one blocking task per work item; each occupies an OS
/// thread for the whole slice since tag reading is plain file I/O. The
/// progress callback is shared by all workers and must be safe to call
/// concurrently. A cloned `indicatif` bar behind the closure satisfies
/// that.
///
/// # Errors
///
/// Returns an error only if a worker task panics. Per-file read failures
/// are contained in the returned stats.
pub async fn extract_tags<F>(
    work_items: Vec<Vec<PathBuf>>,
    progress_callback: F,
) -> color_eyre::Result<ExtractStats>
where
    F: Fn(String) + Send + Sync + 'static,
{
    let callback = Arc::new(progress_callback);

    let workers: Vec<_> = work_items
        .into_iter()
        .map(|item| {
            let callback = Arc::clone(&callback);
            task::spawn_blocking(move || read_work_item(item, callback.as_ref()))
        })
        .collect();

    // Join barrier: every worker finishes before any merging happens.
    let mut stats = ExtractStats::new();
    for worker in join_all(workers).await {
        stats.merge(worker?);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use std::cell::Cell;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Writes a minimal but valid PCM WAV file with no tags.
    fn write_minimal_wav(path: &Path) {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&40u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&44100u32.to_le_bytes());
        bytes.extend_from_slice(&88200u32.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 4]);
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_merge_disjoint_stats() {
        let mut a = ExtractStats::new();
        a.tags_by_file
            .insert(PathBuf::from("/music/a.mp3"), TrackTags::new());
        a.errors.push("first".to_string());

        let mut b = ExtractStats::new();
        b.tags_by_file
            .insert(PathBuf::from("/music/b.mp3"), TrackTags::new());
        b.errors.push("second".to_string());

        a.merge(b);

        assert_eq!(a.tags_by_file.len(), 2);
        assert_eq!(a.errors.len(), 2);
    }

    #[test]
    fn test_read_work_item_continues_past_bad_files() {
        let paths = vec![
            PathBuf::from("/nonexistent/one.mp3"),
            PathBuf::from("/nonexistent/two.mp3"),
            PathBuf::from("/nonexistent/three.mp3"),
        ];

        let attempted = Cell::new(0usize);
        let local = read_work_item(paths, &|_| {
            attempted.set(attempted.get() + 1);
        });

        // Every file was attempted even though each one failed.
        assert_eq!(attempted.get(), 3);
        assert!(local.tags_by_file.is_empty());
        assert_eq!(local.errors.len(), 3);
    }

    #[tokio::test]
    async fn test_extract_tags_fault_isolation() {
        let dir = tempfile::tempdir().unwrap();

        let good_one = dir.path().join("one.wav");
        let good_two = dir.path().join("two.wav");
        let bad = dir.path().join("broken.mp3");
        write_minimal_wav(&good_one);
        write_minimal_wav(&good_two);
        std::fs::write(&bad, b"definitely not audio").unwrap();

        let paths = vec![good_one.clone(), bad, good_two.clone()];
        let work_items = partition(paths, 2);

        let attempted = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempted);
        let stats = extract_tags(work_items, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await
        .unwrap();

        // One unreadable file reduces the table by exactly one entry.
        assert_eq!(attempted.load(Ordering::SeqCst), 3);
        assert_eq!(stats.tags_by_file.len(), 2);
        assert_eq!(stats.errors.len(), 1);
        assert!(stats.tags_by_file.contains_key(&good_one));
        assert!(stats.tags_by_file.contains_key(&good_two));
    }

    #[tokio::test]
    async fn test_extract_tags_empty_work_items() {
        let work_items: Vec<Vec<PathBuf>> = vec![Vec::new(), Vec::new()];

        let stats = extract_tags(work_items, |_| {}).await.unwrap();

        assert!(stats.tags_by_file.is_empty());
        assert!(stats.errors.is_empty());
    }
}
