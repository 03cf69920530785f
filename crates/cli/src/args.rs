// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "text_analyser",
    version = crate::VERSION,
    about = "Analyse text files for word, line, and character counts"
)]
pub struct Args {
    /// Path to the text file to analyse
    #[arg(value_hint = ValueHint::FilePath)]
    pub filename: PathBuf,
}
