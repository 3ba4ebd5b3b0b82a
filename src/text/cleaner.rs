//! Project Gutenberg boilerplate removal
//!
//! Gutenberg plain-text books wrap the actual work between a start line such
//! as `*** START OF THE PROJECT GUTENBERG EBOOK ... ***` and an end line
//! `*** END OF THE PROJECT GUTENBERG EBOOK ... ***`. Older files use
//! `*END*THE SMALL PRINT` to close the legal header instead.

use once_cell::sync::Lazy;
use regex::Regex;

static START_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^.*(?:START[^\S\n]+OF[^\S\n]+(?:THE|THIS)[^\S\n]+PROJECT[^\S\n]+GUTENBERG|\*END\*THE[^\S\n]+SMALL[^\S\n]+PRINT).*$",
    )
        .expect("start marker pattern is valid")
});

static END_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^.*END[^\S\n]+OF[^\S\n]+(?:THE|THIS)[^\S\n]+PROJECT[^\S\n]+GUTENBERG.*$")
        .expect("end marker pattern is valid")
});

static ILLUSTRATION_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[Illustration[^\]]*\]").expect("illustration pattern is valid")
});

static HORIZONTAL_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\S\n]+").expect("whitespace pattern is valid"));

static SPACE_AROUND_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ?\n ?").expect("newline pattern is valid"));

static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank line pattern is valid"));

/// Removes Gutenberg header/footer boilerplate and normalizes whitespace
///
/// Missing markers are tolerated: the text is kept from the beginning (or to
/// the end) and a warning is logged. Marker lines left inside the book body
/// are dropped along with illustration tags, so cleaning an already-cleaned
/// text returns it unchanged.
///
/// # Example
///
/// ```
/// use gutenprep::text::clean_gutenberg_text;
///
/// let raw = "License blah\r\n*** START OF THE PROJECT GUTENBERG EBOOK X ***\r\n\
///            Call me   Ishmael.\r\n*** END OF THE PROJECT GUTENBERG EBOOK X ***\r\nMore license";
/// assert_eq!(clean_gutenberg_text(raw), "Call me Ishmael.");
/// ```
pub fn clean_gutenberg_text(raw_text: &str) -> String {
    let text = raw_text.replace("\r\n", "\n").replace('\r', "\n");
    let mut body = book_body(&text).to_string();

    // Removing a tag or line can splice a new one together
    loop {
        let stripped = strip_embedded_markup(&body);
        if stripped == body {
            break;
        }
        body = stripped;
    }

    let body = HORIZONTAL_WHITESPACE.replace_all(&body, " ");
    let body = SPACE_AROUND_NEWLINE.replace_all(&body, "\n");
    let body = BLANK_LINE_RUN.replace_all(&body, "\n\n");

    body.trim().to_string()
}

/// Drops illustration tags and any stray marker lines
fn strip_embedded_markup(text: &str) -> String {
    let text = ILLUSTRATION_TAG.replace_all(text, "");
    let text = START_MARKER.replace_all(&text, "");
    END_MARKER.replace_all(&text, "").into_owned()
}

/// Slices out the text between the start and end marker lines
fn book_body(text: &str) -> &str {
    let start = match START_MARKER.find(text) {
        Some(m) => m.end(),
        None => {
            tracing::warn!("No start-of-book marker found, keeping text from the beginning");
            0
        }
    };

    let end = match END_MARKER.find_at(text, start) {
        Some(m) => m.start(),
        None => {
            tracing::warn!("No end-of-book marker found, keeping text to the end");
            text.len()
        }
    };

    &text[start..end]
}
