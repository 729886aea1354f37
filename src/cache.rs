//! Persisted tag counts from a previous run.
//!
//! The cache is a single flat JSON object of tag to count. It carries no
//! fingerprint of the data directory, so once written it stays valid until
//! it's deleted or a refresh is forced.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::TagCounts;

pub const CACHE_FILE_NAME: &str = "cached.json";

/// Load cached counts from `path`.
///
/// Returns `None` if there's no usable cache for whatever reason, the caller
/// is expected to recompute the counts then.
pub fn load(path: impl AsRef<Path>) -> Option<TagCounts> {
    let path = path.as_ref();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("cache::load: no cache at {path:?}: {e}");
            return None;
        }
    };

    match serde_json::from_str::<TagCounts>(&text) {
        Ok(counts) => {
            log::info!(
                "cache::load: using {} cached tag counts from {path:?}",
                counts.len()
            );
            Some(counts)
        }
        Err(e) => {
            log::debug!("cache::load: ignoring malformed cache {path:?}: {e}");
            None
        }
    }
}

/// Write counts into [`CACHE_FILE_NAME`] under `dir`, replacing any earlier
/// cache. Returns the path of the written file.
pub fn persist(counts: &TagCounts, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("cannot create cache directory {dir:?}"))?;
    let path = dir.join(CACHE_FILE_NAME);

    // Write to a temp file first so a failed write never leaves a truncated
    // cache behind.
    let file = tempfile::NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, counts)?;
    writer.flush()?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;

    file.persist(&path)
        .map_err(|e| e.error)
        .with_context(|| format!("cannot write cache file {path:?}"))?;

    log::info!("cache::persist: wrote {} tag counts to {path:?}", counts.len());
    Ok(path)
}
