//! Export configuration
//!
//! Configuration is entirely file-based: a settings file locates the library
//! and names the playlist selection convention, and a package descriptor
//! supplies the name/author pair used for output directories and the M3U
//! authorship comment.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the media subfolder under the library root; both players address
/// their music through this alias
pub const MEDIA_DIR: &str = "Music";

/// User settings file (JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path to the iTunes XML library; its parent directory is the library root
    #[serde(rename = "itunesXMLPath")]
    pub itunes_xml_path: String,

    /// Naming-convention token: playlists whose raw name contains
    /// `<prefix>_` are selected
    #[serde(rename = "playlistPrefix")]
    pub playlist_prefix: String,

    /// Write M3U files with a leading byte-order mark; absent and `false`
    /// are the same state
    #[serde(rename = "playlistBOM", default)]
    pub playlist_bom: bool,
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

/// Package descriptor (JSON), only the fields the exporter consumes
#[derive(Debug, Clone, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub author: String,
}

impl PackageInfo {
    /// Load the package descriptor from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolved configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// iTunes XML library document
    pub library_path: PathBuf,

    /// Parent directory of the library document
    pub library_root: PathBuf,

    /// Selection token, underscore not included
    pub playlist_prefix: String,

    /// Prefix M3U files with U+FEFF
    pub playlist_bom: bool,

    /// M3U output directory: `<library root>/_<package name>/`
    pub m3u_dir: PathBuf,

    /// Volumio output directory, nested under the M3U directory
    pub volumio_dir: PathBuf,

    /// Comment line content for the M3U header
    pub authorship: String,
}

impl ExportConfig {
    /// Combine settings and package metadata into a run configuration
    pub fn from_parts(settings: Settings, package: PackageInfo) -> Self {
        let expanded = shellexpand::tilde(&settings.itunes_xml_path);
        let library_path = PathBuf::from(expanded.as_ref());
        let library_root = library_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let m3u_dir = library_root.join(format!("_{}", package.name));
        let volumio_dir = m3u_dir.join("volumio");

        Self {
            library_path,
            library_root,
            playlist_prefix: settings.playlist_prefix,
            playlist_bom: settings.playlist_bom,
            m3u_dir,
            volumio_dir,
            authorship: format!("{} by {}", package.name, package.author),
        }
    }

    /// Selection token as it appears in raw playlist names
    pub fn prefix_token(&self) -> String {
        format!("{}_", self.playlist_prefix)
    }

    /// Relative path from the M3U output directory to the media root,
    /// forward-slash separators, trailing separator appended
    pub fn media_relative_root(&self) -> String {
        let depth = self
            .m3u_dir
            .strip_prefix(&self.library_root)
            .map(|p| p.components().count())
            .unwrap_or(1);

        let mut root = String::new();
        for _ in 0..depth {
            root.push_str("../");
        }
        root.push_str(MEDIA_DIR);
        root.push('/');
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ExportConfig {
        let settings = Settings {
            itunes_xml_path: "/data/itunes/Library.xml".to_string(),
            playlist_prefix: "sync".to_string(),
            playlist_bom: false,
        };
        let package = PackageInfo {
            name: "volumio-exporter".to_string(),
            author: "Jane Doe".to_string(),
        };
        ExportConfig::from_parts(settings, package)
    }

    #[test]
    fn test_settings_parse_with_bom() {
        let settings: Settings = serde_json::from_str(
            r#"{"itunesXMLPath": "~/Library.xml", "playlistPrefix": "sync", "playlistBOM": true}"#,
        )
        .unwrap();
        assert_eq!(settings.itunes_xml_path, "~/Library.xml");
        assert_eq!(settings.playlist_prefix, "sync");
        assert!(settings.playlist_bom);
    }

    #[test]
    fn test_settings_bom_defaults_to_disabled() {
        let settings: Settings =
            serde_json::from_str(r#"{"itunesXMLPath": "a.xml", "playlistPrefix": "p"}"#).unwrap();
        assert!(!settings.playlist_bom);
    }

    #[test]
    fn test_malformed_settings_is_a_parse_error() {
        let err = serde_json::from_str::<Settings>(r#"{"playlistPrefix": "p"}"#).unwrap_err();
        assert!(err.to_string().contains("itunesXMLPath"));
    }

    #[test]
    fn test_output_directories_derive_from_package_name() {
        let config = test_config();
        assert_eq!(config.library_root, PathBuf::from("/data/itunes"));
        assert_eq!(config.m3u_dir, PathBuf::from("/data/itunes/_volumio-exporter"));
        assert_eq!(
            config.volumio_dir,
            PathBuf::from("/data/itunes/_volumio-exporter/volumio")
        );
    }

    #[test]
    fn test_media_relative_root() {
        let config = test_config();
        assert_eq!(config.media_relative_root(), "../Music/");
    }

    #[test]
    fn test_prefix_token_appends_underscore() {
        assert_eq!(test_config().prefix_token(), "sync_");
    }

    #[test]
    fn test_authorship_line() {
        assert_eq!(test_config().authorship, "volumio-exporter by Jane Doe");
    }
}
