//! Word tokenization and normalization.
//!
//! Turns raw page text into the candidate words that end up in the frequency
//! list. Only runs of ASCII letters that stand on their own between word
//! boundaries survive, so `"123cats"`, `"cats2"` and `"café"` contribute
//! nothing rather than a trimmed fragment.
//!
//! # Example
//!
//! ```
//! use book_words::text::tokenize;
//!
//! let tokens = tokenize("The cat sat on the mat. 123cats are not cats2.");
//! assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat", "are", "not"]);
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    /// Lowercase ASCII letter runs between Unicode word boundaries.
    ///
    /// Digits, `_` and non-ASCII letters are word characters, so a run that
    /// touches any of them has no boundary on that side and never matches.
    static ref RE_WORD_RUN: Regex = Regex::new(r"\b[a-z]+\b").unwrap();
}

/// Single letters that are never counted as words.
pub const DEFAULT_EXCLUDED_LETTERS: [&str; 20] = [
    "w", "j", "x", "q", "r", "s", "t", "v", "z", "k", "l", "m", "n", "p", "b", "c", "d", "f", "g",
    "h",
];

/// Default minimum token length.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;

/// The default excluded-letter set as owned strings.
pub fn default_excluded_letters() -> BTreeSet<String> {
    DEFAULT_EXCLUDED_LETTERS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Tokenizer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Candidates equal to one of these are dropped
    pub excluded_letters: BTreeSet<String>,
    /// Candidates shorter than this are dropped
    pub min_token_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            excluded_letters: default_excluded_letters(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
        }
    }
}

impl TokenizerConfig {
    /// Replace the excluded-letter set.
    pub fn with_excluded_letters<I, S>(mut self, letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_letters = letters.into_iter().map(|s| s.into().to_lowercase()).collect();
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_length(mut self, min: usize) -> Self {
        self.min_token_length = min;
        self
    }
}

/// Splits text into normalized word tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with custom settings.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize `text`.
    ///
    /// Never fails: malformed input only yields fewer tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        RE_WORD_RUN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| !self.config.excluded_letters.contains(*word))
            .filter(|word| word.chars().count() >= self.config.min_token_length)
            .filter(|word| !word.chars().any(|c| c.is_numeric()))
            .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check whether `token` could have been produced by this tokenizer.
    pub fn is_valid_token(&self, token: &str) -> bool {
        token.chars().count() >= self.config.min_token_length.max(1)
            && token.chars().all(|c| c.is_ascii_lowercase())
            && !self.config.excluded_letters.contains(token)
    }
}

/// Tokenize with the default policy.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sentence() {
        let tokens = tokenize("The cat sat on the mat. 123cats are not cats2.");
        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat", "are", "not"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_runs_touching_digits_are_rejected_whole() {
        assert!(tokenize("abc1").is_empty());
        assert!(tokenize("1abc").is_empty());
        assert!(tokenize("a1b2c3").is_empty());
        assert_eq!(tokenize("page 12 of book"), vec!["page", "of", "book"]);
    }

    #[test]
    fn test_non_ascii_letters_reject_run() {
        assert!(tokenize("café").is_empty());
        assert!(tokenize("naïve").is_empty());
        assert_eq!(tokenize("über alles"), vec!["alles"]);
    }

    #[test]
    fn test_underscore_joins_words() {
        assert!(tokenize("snake_case").is_empty());
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(tokenize("don't stop-gap"), vec!["don", "stop", "gap"]);
        assert_eq!(tokenize("(hello), [world]!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_excluded_letters_dropped() {
        assert!(tokenize("b c d f g h j k l m n p q r s t v w x z").is_empty());
    }

    #[test]
    fn test_single_vowels_dropped_by_length() {
        // "a", "e", "i", "o", "u", "y" are not excluded letters but are too short
        assert!(tokenize("a e i o u y").is_empty());
    }

    #[test]
    fn test_lowercases_input() {
        assert_eq!(tokenize("HELLO World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_custom_min_length() {
        let tokenizer =
            Tokenizer::with_config(TokenizerConfig::default().with_min_token_length(4));
        assert_eq!(tokenizer.tokenize("the quick fox jumps"), vec!["quick", "jumps"]);
    }

    #[test]
    fn test_custom_excluded_letters() {
        let config = TokenizerConfig::default()
            .with_excluded_letters(["of", "the"])
            .with_min_token_length(1);
        let tokenizer = Tokenizer::with_config(config);
        assert_eq!(tokenizer.tokenize("the end of a story"), vec!["end", "a", "story"]);
    }

    #[test]
    fn test_is_valid_token() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.is_valid_token("cat"));
        assert!(!tokenizer.is_valid_token("x"));
        assert!(!tokenizer.is_valid_token("Cat"));
        assert!(!tokenizer.is_valid_token("ca1"));
        assert!(!tokenizer.is_valid_token(""));
    }
}
