use crate::text::tokenizer::split_sentences;

/// Creates an extractive summary from the first `num_sentences` sentences
///
/// Each sentence is flattened onto one line with its terminal punctuation
/// kept, and the sentences are joined with single spaces. Asking for more
/// sentences than exist returns all of them.
///
/// # Example
///
/// ```
/// use gutenprep::text::create_summary;
///
/// assert_eq!(create_summary("A. B. C.", 1), "A.");
/// assert_eq!(create_summary("A. B. C.", 10), "A. B. C.");
/// ```
pub fn create_summary(text: &str, num_sentences: usize) -> String {
    split_sentences(text)
        .iter()
        .take(num_sentences)
        .map(|sentence| sentence.to_single_line())
        .collect::<Vec<_>>()
        .join(" ")
}
