//! Text processing for gutenprep
//!
//! This module contains the pure, synchronous part of the service:
//! - Removing Project Gutenberg boilerplate and normalizing whitespace
//! - Word and sentence tokenization
//! - Text statistics and word frequency ranking
//! - First-N-sentences summaries
//! - N-gram frequency tables

mod cleaner;
pub mod ngrams;
mod stats;
mod summary;
mod tokenizer;

pub use cleaner::clean_gutenberg_text;
pub use stats::{compute_statistics, compute_statistics_with, rank_words, StatisticsReport, WordCount};
pub use summary::create_summary;
pub use tokenizer::{normalize_text, split_sentences, tokenize_chars, tokenize_words, Sentence};

/// Number of sentences in a summary when none is requested
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Length of the most-common-words list when none is requested
pub const DEFAULT_TOP_WORDS: usize = 10;
