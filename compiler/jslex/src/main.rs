//! `jslex` binary.

use std::process::ExitCode;

use jslex::{logging, CliOptions, USAGE};

fn main() -> ExitCode {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match CliOptions::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Try 'jslex --help' for more information.");
            return ExitCode::from(err.exit_code());
        }
    };

    let result = if options.help {
        jslex::print_text(USAGE)
    } else if options.version {
        jslex::print_text(&format!("jslex {}\n", env!("CARGO_PKG_VERSION")))
    } else {
        jslex::run(&options)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
