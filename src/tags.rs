//! Audio tag reading.
//!
//! Thin wrapper around lofty that reads every textual tag of a file into a
//! tag-name → values multimap. Tag names are canonical upper-case strings
//! (`TITLE`, `ARTIST`, `GENRE`, ...) regardless of the underlying tag format.

use std::collections::HashMap;
use std::path::Path;

use lofty::{ItemKey, Probe, TaggedFileExt};

/// The metadata tags read from one file. Values keep the order in which the
/// tag stores them.
pub type TrackTags = HashMap<String, Vec<String>>;

/// Tag name the genre aggregation keys on.
pub const GENRE_TAG: &str = "GENRE";

/// Maps a lofty item key to its canonical tag name.
///
/// Keys with no textual representation (cover art, binary frames) are
/// dropped. Format-specific keys lofty could not classify keep their raw
/// name, upper-cased.
fn canonical_key(key: &ItemKey) -> Option<String> {
    let name = match key {
        ItemKey::TrackTitle => "TITLE",
        ItemKey::TrackArtist => "ARTIST",
        ItemKey::AlbumTitle => "ALBUM",
        ItemKey::AlbumArtist => "ALBUMARTIST",
        ItemKey::Genre => "GENRE",
        ItemKey::TrackNumber => "TRACKNUMBER",
        ItemKey::TrackTotal => "TRACKTOTAL",
        ItemKey::DiscNumber => "DISCNUMBER",
        ItemKey::DiscTotal => "DISCTOTAL",
        ItemKey::Year => "DATE",
        ItemKey::RecordingDate => "DATE",
        ItemKey::Comment => "COMMENT",
        ItemKey::Composer => "COMPOSER",
        ItemKey::Unknown(other) => return Some(other.to_uppercase()),
        _ => return None,
    };

    Some(name.to_string())
}

/// Reads all tags from one audio file.
///
/// Prefers the format's primary tag (ID3v2 for MP3, Vorbis comments for
/// OGG/FLAC) and falls back to the first tag block present. A file that
/// parses cleanly but carries no tags at all yields an empty map; that is a
/// success, and the file counts as untagged downstream.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its format cannot be
/// parsed. Callers treat this as a per-file failure: the file is skipped
/// and the run continues.
pub fn read_tags(path: &Path) -> color_eyre::Result<TrackTags> {
    let tagged_file = Probe::open(path)?.read()?;

    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

    let mut tags = TrackTags::new();
    if let Some(tag) = tag {
        for item in tag.items() {
            let Some(name) = canonical_key(item.key()) else {
                continue;
            };
            if let Some(text) = item.value().text() {
                tags.entry(name).or_default().push(text.to_string());
            }
        }
    }

    Ok(tags)
}
