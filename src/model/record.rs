//! Raw library records as they appear in the property list

/// Track entry as recorded in the library document
///
/// `location` is kept in its URL-encoded `file://` form and decoded on use.
#[derive(Debug, Clone, Default)]
pub struct TrackRecord {
    /// Numeric track identifier, unique within one library snapshot
    pub id: u64,

    /// Stable opaque identifier, unique across snapshots
    pub persistent_id: String,

    /// Track title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// file:// URI of the audio file, URL-encoded
    pub location: String,

    /// Track duration in milliseconds
    pub total_time_ms: u64,

    /// Disc number, 1 when the library omits it
    pub disc_number: u32,

    /// Track number, 1 when the library omits it
    pub track_number: u32,
}

impl TrackRecord {
    /// Decoded absolute path of the audio file
    pub fn decoded_path(&self) -> String {
        decode_file_uri(&self.location)
    }
}

/// Playlist entry as recorded in the library document
///
/// `item_ids` preserves source order and duplicates.
#[derive(Debug, Clone, Default)]
pub struct PlaylistRecord {
    /// Stable opaque playlist identifier
    pub persistent_id: String,

    /// Raw playlist name, prefix token included
    pub name: String,

    /// Numeric track identifiers, in playlist order
    pub item_ids: Vec<u64>,
}

/// Convert a `file://` URI to a decoded filesystem path
///
/// Accepts both `file://localhost/...` and `file:///...` forms. A value
/// without a `file://` scheme is decoded as-is.
pub fn decode_file_uri(uri: &str) -> String {
    let path = uri
        .strip_prefix("file://localhost")
        .or_else(|| uri.strip_prefix("file://"))
        .unwrap_or(uri);

    urlencoding::decode(path)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
