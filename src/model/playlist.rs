use serde::Serialize;

/// A selected playlist, named after the source playlist with the
/// configured prefix token stripped
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    /// Stable opaque playlist identifier
    pub persistent_id: String,

    /// Raw name with the prefix token removed; used as the output filename
    pub display_name: String,

    /// Persistent track identifiers, in playlist order, duplicates kept
    pub track_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(persistent_id: String, display_name: String) -> Self {
        Self {
            persistent_id,
            display_name,
            track_ids: Vec::new(),
        }
    }

    /// Append a resolved track reference
    pub fn add_track(&mut self, persistent_id: String) {
        self.track_ids.push(persistent_id);
    }

    /// Number of resolved entries in this playlist
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    /// Check if the playlist resolved to zero tracks
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }
}
