//! Export orchestration and playlist serializers

pub mod config;
pub mod extractor;
pub mod m3u;
pub mod pipeline;
pub mod volumio;

pub use config::{ExportConfig, PackageInfo, Settings};
pub use pipeline::ExportPipeline;
