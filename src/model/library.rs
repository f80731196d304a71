use super::{PlaylistRecord, TrackRecord};
use std::collections::HashMap;

/// Complete parsed library: metadata, tracks and raw playlists
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Library {
    /// Version of the application that wrote the document
    application_version: String,

    /// Decoded absolute path of the music folder, trailing separator preserved
    music_folder: String,

    /// All tracks indexed by their numeric ID
    tracks: HashMap<u64, TrackRecord>,

    /// All playlists, in document order
    playlists: Vec<PlaylistRecord>,
}

impl Library {
    /// Create an empty library with its document metadata
    pub fn new(application_version: String, music_folder: String) -> Self {
        Self {
            application_version,
            music_folder,
            tracks: HashMap::new(),
            playlists: Vec::new(),
        }
    }

    /// Add a track to the library
    pub fn add_track(&mut self, track: TrackRecord) {
        self.tracks.insert(track.id, track);
    }

    /// Add a playlist to the library
    pub fn add_playlist(&mut self, playlist: PlaylistRecord) {
        self.playlists.push(playlist);
    }

    /// Get a track by numeric ID
    pub fn track(&self, id: u64) -> Option<&TrackRecord> {
        self.tracks.get(&id)
    }

    /// Get all playlists in document order
    pub fn playlists(&self) -> &[PlaylistRecord] {
        &self.playlists
    }

    /// Decoded music folder path
    pub fn music_folder(&self) -> &str {
        &self.music_folder
    }

    /// Version of the application that wrote the document
    pub fn application_version(&self) -> &str {
        &self.application_version
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_library() -> Library {
        Library::new("12.9.0.167".to_string(), "/data/itunes/Music/".to_string())
    }

    #[test]
    fn test_library_creation() {
        let lib = empty_library();
        assert_eq!(lib.track_count(), 0);
        assert_eq!(lib.playlist_count(), 0);
        assert_eq!(lib.application_version(), "12.9.0.167");
        assert_eq!(lib.music_folder(), "/data/itunes/Music/");
    }

    #[test]
    fn test_add_track() {
        let mut lib = empty_library();

        lib.add_track(TrackRecord {
            id: 1001,
            persistent_id: "F00F00F00F00F00F".to_string(),
            name: "Test Song".to_string(),
            artist: "Test Artist".to_string(),
            album: "Test Album".to_string(),
            location: "file:///data/itunes/Music/Test%20Artist/a.mp3".to_string(),
            total_time_ms: 180_000,
            disc_number: 1,
            track_number: 1,
        });

        assert_eq!(lib.track_count(), 1);
        assert!(lib.track(1001).is_some());
        assert_eq!(lib.track(1001).unwrap().name, "Test Song");
        assert!(lib.track(9999).is_none());
    }

    #[test]
    fn test_add_playlist() {
        let mut lib = empty_library();

        lib.add_playlist(PlaylistRecord {
            persistent_id: "AA00AA00AA00AA00".to_string(),
            name: "sync_Road Trip".to_string(),
            item_ids: vec![1001, 1002],
        });

        assert_eq!(lib.playlist_count(), 1);
        assert_eq!(lib.playlists()[0].name, "sync_Road Trip");
        assert_eq!(lib.playlists()[0].item_ids, vec![1001, 1002]);
    }
}
