//! Text-to-frequency-list processing.
//!
//! ```text
//! raw text ─▶ Tokenizer ─▶ tokens ─▶ FrequencyMap ─▶ rank ─▶ Vec<RankedEntry>
//! ```

pub mod frequency;
pub mod ranker;
pub mod tokenizer;

pub use frequency::{count_words, FrequencyMap};
pub use ranker::{rank, sort_entries, RankedEntry, TieBreak};
pub use tokenizer::{
    default_excluded_letters, tokenize, Tokenizer, TokenizerConfig, DEFAULT_EXCLUDED_LETTERS,
    DEFAULT_MIN_TOKEN_LENGTH,
};
