//! Run orchestration
//!
//! Stages run strictly in order: prepare directories, load library, extract,
//! then the two serializer branches. The branches write to disjoint
//! directories and read the same immutable extraction result, so they run
//! concurrently; within each branch the stale-clear completes before any
//! write starts. Nothing is retried; the first failure aborts the run.

use super::config::ExportConfig;
use super::{extractor, m3u, volumio};
use crate::error::{Error, Result};
use crate::itunes;
use crate::model::{Playlist, Track};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BOM: &str = "\u{feff}";

/// Main export pipeline
pub struct ExportPipeline {
    config: ExportConfig,
}

impl ExportPipeline {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Run one full export pass
    pub fn run(&self) -> Result<()> {
        log::info!("Starting playlist export");
        log::info!("Library: {:?}", self.config.library_path);

        self.prepare_directories()?;

        let library = itunes::load_library(&self.config.library_path)?;
        let (playlists, tracks) = extractor::extract(&library, &self.config);

        log::info!(
            "Exporting {} playlist(s), {} distinct track(s)",
            playlists.len(),
            tracks.len()
        );

        let (m3u_result, volumio_result) = rayon::join(
            || self.write_m3u_playlists(&playlists, &tracks),
            || self.write_volumio_playlists(&playlists, &tracks),
        );
        m3u_result?;
        volumio_result?;

        log::info!("Export complete!");
        Ok(())
    }

    /// Create the output directories, idempotently
    fn prepare_directories(&self) -> Result<()> {
        for dir in [&self.config.m3u_dir, &self.config.volumio_dir] {
            fs::create_dir_all(dir).map_err(|source| Error::Directory {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn write_m3u_playlists(
        &self,
        playlists: &[Playlist],
        tracks: &HashMap<String, Track>,
    ) -> Result<()> {
        self.clear_directory(&self.config.m3u_dir, true)?;

        playlists.par_iter().try_for_each(|playlist| {
            let content = m3u::render_extended_m3u(playlist, tracks, &self.config.authorship);
            let path = self
                .config
                .m3u_dir
                .join(format!("{}.m3u", playlist.display_name));
            write_playlist_file(&path, &content, self.config.playlist_bom)
        })?;

        log::info!(
            "Wrote {} M3U playlist(s) to {:?}",
            playlists.len(),
            self.config.m3u_dir
        );
        Ok(())
    }

    fn write_volumio_playlists(
        &self,
        playlists: &[Playlist],
        tracks: &HashMap<String, Track>,
    ) -> Result<()> {
        self.clear_directory(&self.config.volumio_dir, false)?;

        playlists.par_iter().try_for_each(|playlist| {
            let content = volumio::render_volumio_playlist(playlist, tracks)?;
            let path = self.config.volumio_dir.join(&playlist.display_name);
            write_playlist_file(&path, &content, false)
        })?;

        log::info!(
            "Wrote {} Volumio playlist(s) to {:?}",
            playlists.len(),
            self.config.volumio_dir
        );
        Ok(())
    }

    /// Delete stale entries from an output directory
    ///
    /// The M3U directory is shared with the nested Volumio directory and may
    /// hold foreign files, so only `*.m3u` files are deleted there. The
    /// Volumio directory is exclusively owned by this pipeline and is
    /// cleared completely.
    fn clear_directory(&self, dir: &Path, m3u_only: bool) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|source| Error::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut stale = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::Directory {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            if m3u_only
                && !path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("m3u"))
            {
                continue;
            }
            stale.push(path);
        }

        if !stale.is_empty() {
            log::debug!("Clearing {} stale file(s) from {:?}", stale.len(), dir);
        }

        stale.par_iter().try_for_each(|path| {
            fs::remove_file(path).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })
        })
    }
}

fn write_playlist_file(path: &Path, content: &str, bom: bool) -> Result<()> {
    let payload = if bom {
        format!("{BOM}{content}")
    } else {
        content.to_string()
    };

    log::debug!("Writing {:?}", path);
    fs::write(path, payload).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
