//! Synonymous CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use synonymous::cli::args::*;
use synonymous::cli::commands::*;
use synonymous::error::ErrorKind;

fn main() {
    // Parse command line arguments using clap
    let args = SynonymousArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        let code = match e.kind() {
            ErrorKind::InvalidWord
            | ErrorKind::BlacklistedWord
            | ErrorKind::SameWord
            | ErrorKind::EmptyInput => 2,
            ErrorKind::AccessDenied => 3,
            _ => 1,
        };
        process::exit(code);
    }
}
