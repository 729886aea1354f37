//! Running a whole lookup, from cache or from a fresh scan.

use std::path::PathBuf;

use anyhow::Result;

use crate::{cache, extract, tally, RequestedTags, Report, TagCounts};

/// Where a run reads and writes its data, and what it looks up.
#[derive(Clone, Debug)]
pub struct Config {
    /// Tags given explicitly, overrides the tag list file.
    pub requested_tags: Option<Vec<String>>,
    /// Tag list file with one tag per line.
    pub tag_list_path: PathBuf,
    /// Directory of JSON documents to count tags from.
    pub data_dir: PathBuf,
    /// Directory that holds the cache file.
    pub cache_dir: PathBuf,
    /// Ignore any existing cache and rescan the data directory.
    pub refresh: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            requested_tags: None,
            tag_list_path: "tags.txt".into(),
            data_dir: "data".into(),
            cache_dir: "cached".into(),
            refresh: false,
        }
    }
}

impl Config {
    pub fn cache_path(&self) -> PathBuf {
        self.cache_dir.join(cache::CACHE_FILE_NAME)
    }
}

/// Produce the match report for a configuration.
///
/// Uses cached counts when available, otherwise scans the data directory
/// and caches the fresh counts.
pub fn run(config: &Config) -> Result<Report> {
    let cached = if config.refresh {
        None
    } else {
        cache::load(config.cache_path())
    };

    let counts = match cached {
        Some(counts) => counts,
        None => recompute(config)?,
    };

    let requested = RequestedTags::resolve(
        config.requested_tags.as_deref(),
        &config.tag_list_path,
    )?;

    Ok(Report::new(&requested, &counts))
}

/// Count tags from the data directory and write them to the cache.
///
/// Failing to write the cache is only a warning, the counts are still good.
pub fn recompute(config: &Config) -> Result<TagCounts> {
    let paths = extract::list_files(&config.data_dir)?;
    let counts = tally::count(extract::extract_tags(&paths));

    if let Err(e) = cache::persist(&counts, &config.cache_dir) {
        log::warn!("recompute: failed to cache tag counts: {e:#}");
    }

    Ok(counts)
}
