// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Location of the org-mode file to consume
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file for the Anki import lines (default: input with a .txt extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Append to the output file rather than overwriting it
    #[arg(short, long)]
    pub append: bool,

    /// Also convert the last note of the file, which is dropped by default
    #[arg(long)]
    pub keep_last: bool,

    /// Escape &, < and > in note text
    #[arg(long)]
    pub escape_html: bool,

    /// Print the conversion report as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML config file (default: <config dir>/org2anki/config.toml if present)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
