//! N-gram frequency tables
//!
//! Counts contiguous token windows (words or characters), turns counts into
//! probabilities with optional Laplace smoothing, and stores tables as JSON.
//! On disk an n-gram key is its tokens joined with `||`.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::path::Path;

/// Separator between tokens of an n-gram in saved frequency files
pub const KEY_SEPARATOR: &str = "||";

/// Counts every contiguous window of `n` tokens
///
/// `n == 0` or fewer than `n` tokens yields an empty table.
///
/// # Example
///
/// ```
/// use gutenprep::text::ngrams::ngram_counts;
///
/// let tokens = ["to", "be", "or", "not", "to", "be"];
/// let bigrams = ngram_counts(&tokens, 2);
/// assert_eq!(bigrams[&vec!["to", "be"]], 2);
/// ```
pub fn ngram_counts<T>(tokens: &[T], n: usize) -> HashMap<Vec<T>, usize>
where
    T: Clone + Eq + Hash,
{
    let mut counts = HashMap::new();
    if n == 0 {
        return counts;
    }

    for window in tokens.windows(n) {
        *counts.entry(window.to_vec()).or_insert(0) += 1;
    }
    counts
}

/// Converts counts to probabilities
///
/// With smoothing `s`, each entry becomes `(count + s) / (total + s * distinct)`.
pub fn probabilities<K>(counts: &HashMap<K, usize>, smoothing: f64) -> HashMap<K, f64>
where
    K: Clone + Eq + Hash,
{
    let total = counts.values().sum::<usize>() as f64 + smoothing * counts.len() as f64;
    if total <= 0.0 {
        return HashMap::new();
    }

    counts
        .iter()
        .map(|(key, &count)| (key.clone(), (count as f64 + smoothing) / total))
        .collect()
}

/// Returns the `limit` most frequent entries, most frequent first
///
/// Equal counts are ordered by key so the output is deterministic.
pub fn most_frequent<T>(counts: &HashMap<Vec<T>, usize>, limit: usize) -> Vec<(Vec<T>, usize)>
where
    T: Clone + Ord,
{
    let mut entries: Vec<_> = counts.iter().map(|(k, &v)| (k.clone(), v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

/// Joins the tokens of an n-gram into its on-disk key
pub fn join_key<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// Writes a frequency table to `path` as pretty-printed JSON
pub fn save_frequencies<V: Serialize>(path: &Path, table: &HashMap<Vec<String>, V>) -> Result<()> {
    let json_friendly: BTreeMap<String, &V> = table
        .iter()
        .map(|(key, value)| (join_key(key), value))
        .collect();

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &json_friendly)?;
    tracing::debug!("Saved {} n-grams to {}", table.len(), path.display());
    Ok(())
}

/// Reads a frequency table written by [`save_frequencies`]
pub fn load_frequencies<V: DeserializeOwned>(path: &Path) -> Result<HashMap<Vec<String>, V>> {
    let file = std::fs::File::open(path)?;
    let json_data: HashMap<String, V> = serde_json::from_reader(std::io::BufReader::new(file))?;

    Ok(json_data
        .into_iter()
        .map(|(key, value)| {
            let tokens = key.split(KEY_SEPARATOR).map(str::to_string).collect();
            (tokens, value)
        })
        .collect())
}
