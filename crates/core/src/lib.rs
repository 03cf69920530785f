// crates/core/src/lib.rs
pub mod counter;
pub mod error;
pub mod reader;
pub mod stats;

pub use counter::{analyze, count_characters, count_lines, count_words, is_word_separator};
pub use error::{LoadError, Result};
pub use reader::{analyze_file, read_file};
pub use stats::Report;
