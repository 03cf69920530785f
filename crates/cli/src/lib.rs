// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod logging;
pub mod presentation;

use crate::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load and count the configured file, returning the rendered report.
///
/// Nothing is printed here; the caller writes the result once.
///
/// # Errors
///
/// Returns the loader error if the file cannot be read or decoded.
pub fn run(config: &Config) -> text_analyser_core::Result<String> {
    log::debug!("config: {config:?}");
    let report = text_analyser_core::analyze_file(&config.path)?;
    Ok(presentation::render_report(&config.path, &report))
}
