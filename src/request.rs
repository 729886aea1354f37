//! Working out which tags the user asked about.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Split a comma-separated command line tag list. Entries are not trimmed.
pub fn split_tag_arg(arg: &str) -> Vec<String> {
    arg.split(',').map(|s| s.to_string()).collect()
}

/// The requested tag list in request order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RequestedTags {
    pub tags: Vec<String>,
    /// Length in characters of the longest tag.
    pub longest: usize,
}

impl RequestedTags {
    /// Build from tags given verbatim, dropping empty ones.
    pub fn new<S: Into<String>>(tags: impl IntoIterator<Item = S>) -> Self {
        let tags: Vec<String> = tags
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.is_empty())
            .collect();
        let longest =
            tags.iter().map(|t| t.chars().count()).max().unwrap_or(0);

        RequestedTags { tags, longest }
    }

    /// Parse a tag list file's contents, one tag per line.
    pub fn from_list(text: &str) -> Self {
        RequestedTags::new(text.lines())
    }

    /// Read a tag list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read tag list {path:?}"))?;
        Ok(RequestedTags::from_list(&text))
    }

    /// Use `explicit` tags if given, otherwise fall back to the tag list
    /// file at `default_list`.
    pub fn resolve(
        explicit: Option<&[String]>,
        default_list: impl AsRef<Path>,
    ) -> Result<Self> {
        match explicit {
            Some(tags) => Ok(RequestedTags::new(tags.iter().cloned())),
            None => RequestedTags::load(default_list),
        }
    }
}
