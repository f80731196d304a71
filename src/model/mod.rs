//! Data model for the exported library
//!
//! Raw records mirror the property list as parsed; `Track` and `Playlist`
//! are the resolved forms produced by extraction and consumed by the
//! serializers.

mod library;
mod playlist;
mod record;
mod track;

pub use library::Library;
pub use playlist::Playlist;
pub use record::{decode_file_uri, PlaylistRecord, TrackRecord};
pub use track::Track;
