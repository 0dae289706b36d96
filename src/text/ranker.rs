//! Frequency ranking.

use super::frequency::FrequencyMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A word and its count, in final report order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The word
    pub word: String,
    /// How often it occurred
    pub count: usize,
}

impl RankedEntry {
    /// Create a new entry.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Order of entries that share a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Ascending by word
    #[default]
    Alphabetical,
    /// Order in which the words first appeared in the text
    FirstSeen,
}

/// Sort a frequency map by descending count.
pub fn rank(map: &FrequencyMap, tie_break: TieBreak) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = map
        .iter()
        .map(|(word, count)| RankedEntry::new(word, count))
        .collect();
    sort_entries(&mut entries, tie_break);
    entries
}

/// Sort entries in place by descending count.
///
/// The sort is stable, so with [`TieBreak::FirstSeen`] the incoming order
/// of equal counts is kept.
pub fn sort_entries(entries: &mut [RankedEntry], tie_break: TieBreak) {
    entries.sort_by(|a, b| compare(a, b, tie_break));
}

fn compare(a: &RankedEntry, b: &RankedEntry, tie_break: TieBreak) -> Ordering {
    let by_count = b.count.cmp(&a.count);
    match tie_break {
        TieBreak::Alphabetical => by_count.then_with(|| a.word.cmp(&b.word)),
        TieBreak::FirstSeen => by_count,
    }
}
