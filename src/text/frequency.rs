//! Word frequency aggregation.

use indexmap::IndexMap;

/// Occurrence count per distinct token.
///
/// Keys are kept in order of first occurrence. That order only matters to
/// [`TieBreak::FirstSeen`](crate::text::TieBreak::FirstSeen); everything else
/// treats the map as unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: IndexMap<String, usize>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token in `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for token in tokens {
            map.add(token.as_ref());
        }
        map
    }

    /// Record one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(token.to_string(), 1);
        }
    }

    /// Occurrences of `token` (0 when absent).
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no token was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of tokens aggregated.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(token, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

/// Count token occurrences.
pub fn count_words<S: AsRef<str>>(tokens: &[S]) -> FrequencyMap {
    FrequencyMap::from_tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let map = count_words::<&str>(&[]);
        assert!(map.is_empty());
        assert_eq!(map.total(), 0);
    }

    #[test]
    fn test_counts() {
        let tokens = ["the", "cat", "sat", "on", "the", "mat", "are", "not"];
        let map = count_words(&tokens);
        assert_eq!(map.get("the"), 2);
        assert_eq!(map.get("cat"), 1);
        assert_eq!(map.get("dog"), 0);
        assert_eq!(map.len(), 7);
        assert_eq!(map.total(), tokens.len());
    }

    #[test]
    fn test_first_occurrence_order() {
        let map: FrequencyMap = ["b", "a", "b", "c"].into_iter().collect();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
