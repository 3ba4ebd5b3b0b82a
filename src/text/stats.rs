//! Text statistics
//!
//! A single pass over the text produces character, word and sentence counts,
//! average word and sentence lengths, and the most frequent words.

use crate::text::tokenizer::{split_sentences, tokenize_words};
use crate::text::DEFAULT_TOP_WORDS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed-shape statistics for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Length of the text in characters, whitespace included
    pub total_characters: usize,

    /// Number of word tokens
    pub total_words: usize,

    /// Number of non-empty sentences
    pub total_sentences: usize,

    /// Mean word length in characters, one decimal
    pub avg_word_length: f64,

    /// Mean number of words per sentence, one decimal
    pub avg_sentence_length: f64,

    /// Most frequent lower-cased words, most frequent first
    pub most_common_words: Vec<String>,
}

/// A word and how many times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Computes statistics with the default most-common-words length
///
/// # Example
///
/// ```
/// use gutenprep::text::compute_statistics;
///
/// let report = compute_statistics("Hello world. Hello again!");
/// assert_eq!(report.total_words, 4);
/// assert_eq!(report.total_sentences, 2);
/// assert_eq!(report.most_common_words[0], "hello");
/// ```
pub fn compute_statistics(text: &str) -> StatisticsReport {
    compute_statistics_with(text, DEFAULT_TOP_WORDS)
}

/// Computes statistics, keeping the `top_words` most frequent words
pub fn compute_statistics_with(text: &str, top_words: usize) -> StatisticsReport {
    let words: Vec<&str> = tokenize_words(text).collect();
    let total_sentences = split_sentences(text).len();

    let total_words = words.len();
    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    let avg_word_length = if total_words > 0 {
        total_word_chars as f64 / total_words as f64
    } else {
        0.0
    };

    let avg_sentence_length = if total_sentences > 0 {
        total_words as f64 / total_sentences as f64
    } else {
        0.0
    };

    let most_common_words = rank_words(words.iter().copied(), top_words)
        .into_iter()
        .map(|wc| wc.word)
        .collect();

    StatisticsReport {
        total_characters: text.chars().count(),
        total_words,
        total_sentences,
        avg_word_length: round_to_tenth(avg_word_length),
        avg_sentence_length: round_to_tenth(avg_sentence_length),
        most_common_words,
    }
}

/// Ranks tokens by lower-cased frequency and keeps the first `limit`
///
/// Ties keep the order in which the words were first seen.
pub fn rank_words<'a, I>(tokens: I, limit: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for token in tokens {
        let word = token.to_lowercase();
        match positions.get(&word) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(word.clone(), counts.len());
                counts.push(WordCount { word, count: 1 });
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
