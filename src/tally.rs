//! Counting tags and matching them against a request.

use std::{cmp::Reverse, fmt};

use itertools::Itertools;

use crate::{RequestedTags, TagCounts};

/// Count how many times each tag occurs.
pub fn count<I>(tags: I) -> TagCounts
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut counts = TagCounts::default();
    for tag in tags {
        *counts.entry(tag.into()).or_default() += 1;
    }
    counts
}

/// Look up the count of every requested tag and sort by descending count.
///
/// Tags with equal counts stay in their requested order.
pub fn match_sort(requested: &[String], counts: &TagCounts) -> Vec<MatchEntry> {
    requested
        .iter()
        .map(|tag| MatchEntry {
            tag: tag.clone(),
            count: counts.get(tag).copied().unwrap_or(0),
        })
        .sorted_by_key(|e| Reverse(e.count))
        .collect()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchEntry {
    pub tag: String,
    pub count: usize,
}

impl MatchEntry {
    pub fn new(tag: impl Into<String>, count: usize) -> Self {
        MatchEntry {
            tag: tag.into(),
            count,
        }
    }
}

/// Sorted matches for a request, ready to print.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    pub matches: Vec<MatchEntry>,

    /// Character length of the longest requested tag, used to align the
    /// count column.
    pub longest: usize,
}

impl Report {
    pub fn new(requested: &RequestedTags, counts: &TagCounts) -> Self {
        Report {
            matches: match_sort(&requested.tags, counts),
            longest: requested.longest,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for MatchEntry { tag, count } in &self.matches {
            writeln!(f, "{tag:<width$}\t{count}", width = self.longest)?;
        }
        Ok(())
    }
}
