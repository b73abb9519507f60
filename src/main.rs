use org2anki::cli::args::Args;
// src/main.rs
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let directive = format!("org2anki={}", level)
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::from_level(level).into());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    match org2anki::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(org2anki::exit_code(&err))
        }
    }
}
