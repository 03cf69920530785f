// crates/core/src/stats.rs

/// Word, line and character counts for one piece of text.
///
/// Built by [`crate::analyze`]; the fields are never touched afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Report {
    pub words: usize,
    pub lines: usize,
    pub characters: usize,
}

impl Report {
    #[must_use]
    pub const fn new(words: usize, lines: usize, characters: usize) -> Self {
        Self {
            words,
            lines,
            characters,
        }
    }
}
