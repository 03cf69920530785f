use clap::Parser;
use std::process::ExitCode;
use text_analyser_cli::args::Args;
use text_analyser_cli::config::Config;
use text_analyser_cli::logging;

fn main() -> ExitCode {
    // 引数エラーは clap が exit 2 で処理する
    let args = Args::parse();
    logging::init();
    let config = Config::from(args);

    match text_analyser_cli::run(&config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("load failed: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
