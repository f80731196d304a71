//! Playlist selection and track resolution
//!
//! Selects playlists by the configured naming convention, resolves their
//! track references against the library, and materializes one deduplicated
//! track per referenced identifier with its path rewritten for the output
//! directory layout.

use super::config::ExportConfig;
use crate::model::{Library, Playlist, Track, TrackRecord};
use std::collections::{HashMap, HashSet};

/// Extract the selected playlists and their resolved tracks
///
/// Playlist membership preserves source order and duplicates; the track
/// mapping holds exactly one entry per referenced track. Items referencing
/// a track absent from the library are dropped silently.
pub fn extract(
    library: &Library,
    config: &ExportConfig,
) -> (Vec<Playlist>, HashMap<String, Track>) {
    let token = config.prefix_token();
    let relative_root = config.media_relative_root();

    let mut playlists = Vec::new();
    let mut referenced: HashSet<u64> = HashSet::new();

    for record in library.playlists() {
        if !record.name.contains(&token) {
            continue;
        }

        let display_name = record.name.replacen(&token, "", 1);
        let mut playlist = Playlist::new(record.persistent_id.clone(), display_name);

        for &item_id in &record.item_ids {
            let Some(track) = library.track(item_id) else {
                log::debug!(
                    "Playlist {:?} references unknown track {item_id}, dropping item",
                    record.name
                );
                continue;
            };
            referenced.insert(item_id);
            playlist.add_track(track.persistent_id.clone());
        }

        log::info!(
            "Selected playlist {:?} ({} tracks)",
            playlist.display_name,
            playlist.len()
        );
        playlists.push(playlist);
    }

    let mut tracks = HashMap::new();
    for id in referenced {
        if let Some(record) = library.track(id) {
            let track = resolve_track(record, library.music_folder(), &relative_root);
            tracks.insert(track.persistent_id.clone(), track);
        }
    }

    (playlists, tracks)
}

/// Materialize one output track from its library record
fn resolve_track(record: &TrackRecord, music_folder: &str, relative_root: &str) -> Track {
    let source_path = record.decoded_path();

    // Paths outside the music folder are kept verbatim below the media root
    let rewritten_path = {
        let relative = source_path.strip_prefix(music_folder).unwrap_or(&source_path);
        format!("{relative_root}{relative}")
    };

    Track {
        persistent_id: record.persistent_id.clone(),
        name: record.name.clone(),
        artist: record.artist.clone(),
        album: record.album.clone(),
        total_time_seconds: total_seconds(record.total_time_ms),
        rewritten_path,
        source_path,
        disc_number: record.disc_number,
        track_number: record.track_number,
    }
}

/// Milliseconds to whole seconds, rounded up so durations are never
/// under-reported to consuming players
fn total_seconds(ms: u64) -> u64 {
    ms.div_ceil(1000)
}
