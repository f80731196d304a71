//! Extended-M3U serialization
//!
//! Output layout: `#EXTM3U` header, one authorship comment, then per track
//! an `#EXTINF` directive followed by the rewritten relative path.

use crate::model::{Playlist, Track};
use std::collections::HashMap;

/// Render one playlist as an extended-M3U document
///
/// Tracks missing from the mapping are skipped. The caller decides whether
/// the result is written with a leading byte-order mark.
pub fn render_extended_m3u(
    playlist: &Playlist,
    tracks: &HashMap<String, Track>,
    authorship: &str,
) -> String {
    let mut out = String::from("#EXTM3U\n");
    out.push_str("# ");
    out.push_str(authorship);
    out.push('\n');

    for id in &playlist.track_ids {
        let Some(track) = tracks.get(id) else {
            continue;
        };
        out.push_str(&format!(
            "#EXTINF:{},{}\n",
            track.total_time_seconds,
            track.title()
        ));
        out.push_str(&track.rewritten_path);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_track(persistent_id: &str, name: &str, seconds: u64, path: &str) -> Track {
        Track {
            persistent_id: persistent_id.to_string(),
            name: name.to_string(),
            artist: "Y".to_string(),
            album: "Album".to_string(),
            source_path: format!("/data/itunes{}", path.trim_start_matches("..")),
            total_time_seconds: seconds,
            rewritten_path: path.to_string(),
            disc_number: 1,
            track_number: 1,
        }
    }

    fn track_map(tracks: Vec<Track>) -> HashMap<String, Track> {
        tracks
            .into_iter()
            .map(|t| (t.persistent_id.clone(), t))
            .collect()
    }

    #[test]
    fn test_render_layout() {
        let mut playlist = Playlist::new("PL1".to_string(), "Road Trip".to_string());
        playlist.add_track("A".to_string());

        let tracks = track_map(vec![test_track("A", "X", 200, "../Music/Y/Album/X.mp3")]);
        let out = render_extended_m3u(&playlist, &tracks, "volumio-exporter by Jane Doe");

        assert_eq!(
            out,
            "#EXTM3U\n\
             # volumio-exporter by Jane Doe\n\
             #EXTINF:200,X - Y\n\
             ../Music/Y/Album/X.mp3\n"
        );
    }

    #[test]
    fn test_missing_tracks_skipped() {
        let mut playlist = Playlist::new("PL1".to_string(), "Road Trip".to_string());
        playlist.add_track("A".to_string());
        playlist.add_track("GONE".to_string());
        playlist.add_track("B".to_string());

        let tracks = track_map(vec![
            test_track("A", "First", 10, "../Music/a.mp3"),
            test_track("B", "Second", 20, "../Music/b.mp3"),
        ]);
        let out = render_extended_m3u(&playlist, &tracks, "author");

        assert_eq!(out.matches("#EXTINF").count(), 2);
        assert!(!out.contains("GONE"));
    }

    #[test]
    fn test_empty_playlist_renders_header_only() {
        let playlist = Playlist::new("PL1".to_string(), "Empty".to_string());
        let out = render_extended_m3u(&playlist, &HashMap::new(), "author");
        assert_eq!(out, "#EXTM3U\n# author\n");
    }

    /// Re-parse rendered output and recover path, duration and title exactly
    #[test]
    fn test_round_trip() {
        let mut playlist = Playlist::new("PL1".to_string(), "Road Trip".to_string());
        playlist.add_track("A".to_string());

        let tracks = track_map(vec![test_track("A", "X", 200, "../Music/Y/Album/X.mp3")]);
        let out = render_extended_m3u(&playlist, &tracks, "author");

        let mut recovered = Vec::new();
        let mut lines = out.lines();
        while let Some(line) = lines.next() {
            if let Some(directive) = line.strip_prefix("#EXTINF:") {
                let (duration, title) = directive.split_once(',').unwrap();
                let path = lines.next().unwrap();
                recovered.push((duration.parse::<u64>().unwrap(), title, path));
            }
        }

        assert_eq!(recovered, vec![(200, "X - Y", "../Music/Y/Album/X.mp3")]);
    }
}
