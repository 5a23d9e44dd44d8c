//! Genre aggregation.
//!
//! Runs single-threaded after the extraction barrier: reduces the merged
//! tag table to a normalized genre → count distribution for display.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::tags::{GENRE_TAG, TrackTags};

/// Merged mapping from file to its tag set, covering every file whose
/// extraction succeeded.
pub type TagTable = HashMap<PathBuf, TrackTags>;

/// Mapping from normalized genre label to file count.
pub type GenreCount = HashMap<String, usize>;

/// Label counted for files that carry no genre tag.
pub const UNTAGGED_LABEL: &str = "none";

/// Picks the genre label for one file's tags.
///
/// The first value of the `GENRE` tag wins, lower-cased so that `Rock` and
/// `rock` count together. Files without the tag fall into
/// [`UNTAGGED_LABEL`].
pub fn genre_label(tags: &TrackTags) -> String {
    tags.get(GENRE_TAG)
        .and_then(|values| values.first())
        .map(|genre| genre.to_lowercase())
        .unwrap_or_else(|| UNTAGGED_LABEL.to_string())
}

/// Reduces the tag table to a genre distribution.
///
/// Each table entry contributes exactly once. Contributions commute, so the
/// order in which workers processed the files never changes the result.
pub fn genre_distribution(table: &TagTable) -> GenreCount {
    let mut counts = GenreCount::new();

    for tags in table.values() {
        *counts.entry(genre_label(tags)).or_insert(0) += 1;
    }

    counts
}

/// Flattens a distribution into `(label, count)` pairs sorted by count
/// descending, ties broken alphabetically. Only the visual ordering of the
/// chart depends on this; the counts themselves never do.
pub fn distribution_summary(counts: &GenreCount) -> Vec<(String, usize)> {
    let mut summary: Vec<_> = counts
        .iter()
        .map(|(label, count)| (label.clone(), *count))
        .collect();

    summary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_with_genre(values: &[&str]) -> TrackTags {
        let mut tags = TrackTags::new();
        tags.insert(
            GENRE_TAG.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        );
        tags
    }

    #[test]
    fn test_genre_label_normalizes_case() {
        assert_eq!(genre_label(&tags_with_genre(&["Rock"])), "rock");
        assert_eq!(genre_label(&tags_with_genre(&["ROCK"])), "rock");
    }

    #[test]
    fn test_genre_label_takes_first_value() {
        assert_eq!(genre_label(&tags_with_genre(&["Jazz", "Fusion"])), "jazz");
    }

    #[test]
    fn test_genre_label_untagged() {
        assert_eq!(genre_label(&TrackTags::new()), UNTAGGED_LABEL);
        // A GENRE key with no values counts as untagged too.
        assert_eq!(genre_label(&tags_with_genre(&[])), UNTAGGED_LABEL);
    }

    #[test]
    fn test_genre_distribution_normalization() {
        let mut table = TagTable::new();
        table.insert(PathBuf::from("/m/a.mp3"), tags_with_genre(&["Rock"]));
        table.insert(PathBuf::from("/m/b.mp3"), tags_with_genre(&["rock"]));
        table.insert(PathBuf::from("/m/c.mp3"), TrackTags::new());

        let counts = genre_distribution(&table);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["rock"], 2);
        assert_eq!(counts[UNTAGGED_LABEL], 1);
    }

    #[test]
    fn test_genre_distribution_is_order_independent() {
        let entries = [
            (PathBuf::from("/m/a.mp3"), tags_with_genre(&["Electronic"])),
            (PathBuf::from("/m/b.mp3"), tags_with_genre(&["Jazz"])),
            (PathBuf::from("/m/c.mp3"), tags_with_genre(&["electronic"])),
            (PathBuf::from("/m/d.mp3"), TrackTags::new()),
        ];

        let forward: TagTable = entries.iter().cloned().collect();
        let reversed: TagTable = entries.iter().rev().cloned().collect();

        assert_eq!(genre_distribution(&forward), genre_distribution(&reversed));
    }

    #[test]
    fn test_genre_distribution_empty_table() {
        assert!(genre_distribution(&TagTable::new()).is_empty());
    }

    #[test]
    fn test_distribution_summary_sorted() {
        let mut counts = GenreCount::new();
        counts.insert("rock".to_string(), 5);
        counts.insert("jazz".to_string(), 9);
        counts.insert("ambient".to_string(), 5);

        let summary = distribution_summary(&counts);

        assert_eq!(summary[0], ("jazz".to_string(), 9));
        // Equal counts fall back to alphabetical order.
        assert_eq!(summary[1], ("ambient".to_string(), 5));
        assert_eq!(summary[2], ("rock".to_string(), 5));
    }
}
