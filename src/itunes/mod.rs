//! iTunes library loading
//!
//! Reads the XML property list exported by iTunes and converts it into the
//! typed [`Library`] model. The whole document is parsed before anything is
//! returned; there is no streaming mode.

mod plist;

use crate::error::{Error, Result};
use crate::model::{decode_file_uri, Library, PlaylistRecord, TrackRecord};
use plist::{PlistError, Value};
use std::fs;
use std::path::Path;

/// Load and convert a library document
///
/// Fails with [`Error::Read`] when the file cannot be read and with
/// [`Error::Parse`] (carrying the parser diagnostic) when the content is not
/// a well-formed property list.
pub fn load_library(path: &Path) -> Result<Library> {
    log::info!("Loading iTunes library from {:?}", path);

    let xml = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = plist::parse(&xml).map_err(|e| parse_error(path, e))?;
    let library = build_library(&document).map_err(|e| parse_error(path, e))?;

    log::info!(
        "Loaded library: {} tracks, {} playlists (application version {})",
        library.track_count(),
        library.playlist_count(),
        library.application_version()
    );

    Ok(library)
}

fn parse_error(path: &Path, source: PlistError) -> Error {
    Error::Parse {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}

/// Convert the parsed plist tree into the library model
fn build_library(document: &Value) -> std::result::Result<Library, PlistError> {
    if document.as_dict().is_none() {
        return Err(PlistError::Invalid(
            "library root is not a <dict>".to_string(),
        ));
    }

    let application_version = string_field(document, "Application Version");
    let music_folder = document
        .get("Music Folder")
        .and_then(Value::as_str)
        .map(decode_file_uri)
        .unwrap_or_default();

    let mut library = Library::new(application_version, music_folder);

    if let Some(tracks) = document.get("Tracks").and_then(Value::as_dict) {
        for (key, value) in tracks {
            // Track dicts are keyed by their decimal numeric ID
            let Ok(id) = key.parse::<u64>() else {
                log::debug!("Skipping track entry with non-numeric key: {key}");
                continue;
            };
            if let Some(track) = build_track(id, value) {
                library.add_track(track);
            }
        }
    }

    if let Some(playlists) = document.get("Playlists").and_then(Value::as_array) {
        for value in playlists {
            if let Some(playlist) = build_playlist(value) {
                library.add_playlist(playlist);
            }
        }
    }

    Ok(library)
}

fn build_track(id: u64, value: &Value) -> Option<TrackRecord> {
    value.as_dict()?;

    Some(TrackRecord {
        id,
        persistent_id: string_field(value, "Persistent ID"),
        name: string_field(value, "Name"),
        artist: string_field(value, "Artist"),
        album: string_field(value, "Album"),
        location: string_field(value, "Location"),
        total_time_ms: value.get("Total Time").and_then(Value::as_u64).unwrap_or(0),
        disc_number: u32_field(value, "Disc Number", 1),
        track_number: u32_field(value, "Track Number", 1),
    })
}

fn build_playlist(value: &Value) -> Option<PlaylistRecord> {
    value.as_dict()?;

    let item_ids = value
        .get("Playlist Items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("Track ID").and_then(Value::as_u64))
                .collect()
        })
        .unwrap_or_default();

    Some(PlaylistRecord {
        persistent_id: string_field(value, "Playlist Persistent ID"),
        name: string_field(value, "Name"),
        item_ids,
    })
}

fn string_field(dict: &Value, key: &str) -> String {
    dict.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn u32_field(dict: &Value, key: &str, default: u32) -> u32 {
    dict.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(default)
}
