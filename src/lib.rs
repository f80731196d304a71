//! Volumio Exporter - iTunes to M3U/Volumio playlist exporter
//!
//! Reads an iTunes XML library, selects playlists by naming convention
//! and re-emits them as extended-M3U files and Volumio playlist files.

pub mod error;
pub mod export;
pub mod itunes;
pub mod model;

pub use error::{Error, Result};
pub use export::config::ExportConfig;
pub use export::pipeline::ExportPipeline;
