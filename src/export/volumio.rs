//! Volumio playlist serialization
//!
//! Volumio consumes a JSON array of track objects addressed to its media
//! daemon. Its media root sits one directory level above the M3U output
//! directory, so the leading `../` of each rewritten path is stripped.

use crate::error::{Error, Result};
use crate::model::{Playlist, Track};
use serde::Serialize;
use std::collections::HashMap;

/// Media daemon handling local files on Volumio
const SERVICE: &str = "mpd";

/// Mount point Volumio's albumart service resolves against
const ALBUMART_ROOT: &str = "/mnt/USB/Music";

#[derive(Debug, Serialize)]
struct VolumioEntry<'a> {
    service: &'a str,
    uri: &'a str,
    title: &'a str,
    artist: &'a str,
    album: &'a str,
    albumart: String,
}

/// Render one playlist as a Volumio JSON array
///
/// Tracks missing from the mapping are skipped, same as the M3U serializer.
pub fn render_volumio_playlist(
    playlist: &Playlist,
    tracks: &HashMap<String, Track>,
) -> Result<String> {
    let entries: Vec<VolumioEntry> = playlist
        .track_ids
        .iter()
        .filter_map(|id| tracks.get(id))
        .map(|track| VolumioEntry {
            service: SERVICE,
            uri: track
                .rewritten_path
                .strip_prefix("../")
                .unwrap_or(&track.rewritten_path),
            title: &track.name,
            artist: &track.artist,
            album: &track.album,
            albumart: albumart_url(&track.artist, &track.album),
        })
        .collect();

    serde_json::to_string_pretty(&entries).map_err(|source| Error::Encode {
        name: playlist.display_name.clone(),
        source,
    })
}

/// Query URL resolved by Volumio's albumart service
fn albumart_url(artist: &str, album: &str) -> String {
    let path = format!("{ALBUMART_ROOT}/{artist}/{album}");
    format!("/albumart?path={}", urlencoding::encode(&path))
}
