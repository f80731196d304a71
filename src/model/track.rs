use serde::Serialize;

/// A resolved track, ready for playlist serialization
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    /// Stable opaque identifier (`Persistent ID` in the library)
    pub persistent_id: String,

    /// Track title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Decoded absolute path as recorded by the source library
    pub source_path: String,

    /// Duration in whole seconds, rounded up so players never under-report
    pub total_time_seconds: u64,

    /// Path relative to the playlist output directory, forward slashes
    pub rewritten_path: String,

    /// Disc number, defaults to 1
    pub disc_number: u32,

    /// Track number, defaults to 1
    pub track_number: u32,
}

impl Track {
    /// Display title used in extended-M3U directives
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_combines_name_and_artist() {
        let track = Track {
            persistent_id: "B0B0B0B0B0B0B0B0".to_string(),
            name: "One More Time".to_string(),
            artist: "Daft Punk".to_string(),
            album: "Discovery".to_string(),
            source_path: "/data/itunes/Music/Daft Punk/Discovery/One More Time.mp3".to_string(),
            total_time_seconds: 320,
            rewritten_path: "../Music/Daft Punk/Discovery/One More Time.mp3".to_string(),
            disc_number: 1,
            track_number: 1,
        };
        assert_eq!(track.title(), "One More Time - Daft Punk");
    }
}
