// crates/cli/src/config.rs
use crate::args::Args;
use std::path::PathBuf;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            path: args.filename,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn keeps_path_as_given() {
        let args = Args::try_parse_from(["text_analyser", "./dir/../a b.txt"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.path, PathBuf::from("./dir/../a b.txt"));
    }
}
