use std::collections::BTreeMap;

use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

pub mod cache;
pub mod extract;
pub mod pipeline;
pub mod request;
mod tally;

pub use pipeline::{run, Config};
pub use request::RequestedTags;
pub use tally::{count, match_sort, MatchEntry, Report};

/// Number of occurrences for each tag seen in a data directory.
///
/// Serializes as a flat JSON object, which is also the on-disk cache format.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    Deref,
    DerefMut,
)]
#[serde(transparent)]
pub struct TagCounts(pub BTreeMap<String, usize>);

impl<S: Into<String>> FromIterator<(S, usize)> for TagCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        TagCounts(iter.into_iter().map(|(k, n)| (k.into(), n)).collect())
    }
}
