//! Word, sentence and character tokenization
//!
//! Words are maximal runs of alphabetic characters. Sentences end at `.`, `!`
//! or `?`; a run of terminal punctuation closes a single sentence, and
//! fragments with no visible content are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Alphabetic}+").expect("word pattern is valid"));

static SENTENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^.!?]+)([.!?]*)").expect("sentence pattern is valid"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A sentence borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Sentence content, trimmed, without its terminal punctuation
    pub body: &'a str,

    /// The terminal punctuation run (`"."`, `"?!"`, ...), empty for a
    /// trailing fragment that never ended
    pub terminator: &'a str,
}

impl Sentence<'_> {
    /// Renders the sentence on one line with its punctuation restored
    pub fn to_single_line(&self) -> String {
        let mut line = self.body.split_whitespace().collect::<Vec<_>>().join(" ");
        line.push_str(self.terminator);
        line
    }

    /// Number of word tokens in the sentence
    pub fn word_count(&self) -> usize {
        tokenize_words(self.body).count()
    }
}

/// Iterates over the word tokens of `text`, in order, with original casing
pub fn tokenize_words(text: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Splits `text` into sentences on terminal punctuation
///
/// # Example
///
/// ```
/// use gutenprep::text::split_sentences;
///
/// let sentences = split_sentences("Hello world. Hello again!");
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[1].body, "Hello again");
/// assert_eq!(sentences[1].terminator, "!");
/// ```
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    SENTENCE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let body = caps.get(1)?.as_str().trim();
            if body.is_empty() {
                return None;
            }
            Some(Sentence {
                body,
                terminator: caps.get(2).map_or("", |m| m.as_str()),
            })
        })
        .collect()
}

/// Normalizes text for frequency work: line breaks and tabs become spaces,
/// everything is lower-cased, only alphanumerics and spaces are kept, and
/// space runs collapse to one
pub fn normalize_text(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits text into characters
///
/// With `include_space`, whitespace runs are first collapsed to a single
/// space and kept as tokens; without it, spaces are dropped.
pub fn tokenize_chars(text: &str, include_space: bool) -> Vec<char> {
    if include_space {
        WHITESPACE_RUN.replace_all(text, " ").chars().collect()
    } else {
        text.chars().filter(|c| *c != ' ').collect()
    }
}
