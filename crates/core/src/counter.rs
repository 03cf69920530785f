// crates/core/src/counter.rs
use crate::stats::Report;

/// `true` for characters that separate words: Unicode whitespace plus the
/// ASCII information separators U+001C..=U+001F.
#[must_use]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Count tokens between runs of [`is_word_separator`] characters.
///
/// Punctuation-only tokens such as `---` count as words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|token| !token.is_empty())
        .count()
}

/// Count logical lines: every `\n` ends a line, and a trailing segment
/// without a terminator is one more.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let newlines = bytecount::count(text.as_bytes(), b'\n');
    if text.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

/// Count Unicode scalar values, whitespace included.
#[must_use]
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Compute all three counts for `text`.
#[must_use]
pub fn analyze(text: &str) -> Report {
    let report = Report::new(count_words(text), count_lines(text), count_characters(text));
    log::trace!("analyzed {} bytes: {report:?}", text.len());
    report
}
