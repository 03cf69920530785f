// crates/cli/src/logging.rs
use env_logger::{Env, Target};

/// Install the stderr logger. `RUST_LOG` overrides the `warn` default.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
