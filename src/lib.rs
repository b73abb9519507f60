// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use application::{CardConverter, ConversionReport, ConvertOptions};
use domain::ConvertError;
use infrastructure::org::TrailingNote;
use infrastructure::{Config, FileStore};
use tracing::debug;
use crate::cli::args::Args;

pub fn run(args: Args) -> Result<()> {
    let json = args.json;
    let report = convert(args)?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        println!(
            "Wrote {} cards to {}",
            report.cards_written,
            report.output.display()
        );
        if !report.malformed.is_empty() {
            println!(
                "{} malformed notes were left blank",
                report.malformed.len()
            );
        }
    }

    Ok(())
}

/// Resolve config and paths from `args`, then convert the input file.
pub fn convert(args: Args) -> Result<ConversionReport> {
    debug!(?args, "Starting org2anki with arguments");

    let config = Config::resolve(args.config.as_deref())?;
    debug!(?config, "Resolved configuration");

    let options = ConvertOptions {
        append: args.append || config.output.append,
        trailing_note: TrailingNote::from_keep(args.keep_last || config.notes.keep_trailing_note),
        escape_html: args.escape_html || config.format.escape_html,
    };

    let output = match args.output {
        Some(path) => path,
        None => default_output_path(&args.input, &config.output.extension),
    };
    if is_same_file(&output, &args.input) {
        bail!(
            "Output path {} is the input file; pass --output",
            output.display()
        );
    }

    let mut converter = CardConverter::new(FileStore, FileStore, options);
    let report = converter.convert(&args.input, &output)?;
    Ok(report)
}

/// `input` with its extension replaced by `extension`.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Whether `a` and `b` name the same file, resolving `..`, `.` and links when both exist.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Process exit status for a failed run: the [`ConvertError`] code, or 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ConvertError>()
        .map_or(1, ConvertError::exit_code)
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use super::*;
    use crate::util::testing;
    use std::io;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_org_input_when_deriving_output_then_replaces_extension() {
        let output = default_output_path(Path::new("/notes/geo.org"), "txt");

        assert_eq!(output, PathBuf::from("/notes/geo.txt"));
    }

    #[test]
    fn given_input_without_extension_when_deriving_output_then_adds_extension() {
        let output = default_output_path(Path::new("notes/geo"), "txt");

        assert_eq!(output, PathBuf::from("notes/geo.txt"));
    }

    #[test]
    fn given_convert_error_when_mapping_exit_code_then_uses_error_code() {
        let err: anyhow::Error = ConvertError::Write {
            path: "out.txt".into(),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        }
        .into();

        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn given_other_error_when_mapping_exit_code_then_returns_one() {
        let err = anyhow::anyhow!("bad config");

        assert_eq!(exit_code(&err), 1);
    }
}
