// src/infrastructure/file_writer.rs
use crate::application::{CardSink, NoteSource};
use crate::domain::{Card, ConvertError};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Read an org file and require it to be valid UTF-8.
pub fn read_org_file(path: impl AsRef<Path>) -> Result<String, ConvertError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(?path, bytes = bytes.len(), "Read input file");

    String::from_utf8(bytes).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one line per card to `destination`.
///
/// Appends when `append` is set, otherwise truncates. The first failing
/// open or write stops the run; lines already written stay on disk.
/// Returns the number of lines written.
#[instrument(level = "debug", skip(cards), fields(cards = cards.len()))]
pub fn write_cards(
    cards: &[Card],
    destination: &Path,
    append: bool,
) -> Result<usize, ConvertError> {
    let write_error = |source: io::Error| ConvertError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(destination)
        .map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    let mut written = 0;
    for card in cards {
        writeln!(writer, "{card}").map_err(write_error)?;
        written += 1;
    }
    writer.flush().map_err(write_error)?;

    debug!(written, "Cards written");
    Ok(written)
}

/// Filesystem-backed note source and card sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl NoteSource for FileStore {
    fn read_source(&mut self, path: &Path) -> Result<String, ConvertError> {
        read_org_file(path)
    }
}

impl CardSink for FileStore {
    fn write_cards(
        &mut self,
        cards: &[Card],
        destination: &Path,
        append: bool,
    ) -> Result<usize, ConvertError> {
        write_cards(cards, destination, append)
    }
}
