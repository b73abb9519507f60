// src/application/card_converter.rs
use crate::domain::{Card, ConvertError};
use crate::infrastructure::org::{CardFormatter, NoteSplitter, TrailingNote};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub trait NoteSource {
    /// Load the whole org document at `path` as UTF-8 text.
    fn read_source(&mut self, path: &Path) -> Result<String, ConvertError>;
}

pub trait CardSink {
    /// Write one line per card to `destination`.
    /// Returns the number of lines written.
    fn write_cards(
        &mut self,
        cards: &[Card],
        destination: &Path,
        append: bool,
    ) -> Result<usize, ConvertError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub append: bool,
    pub trailing_note: TrailingNote,
    pub escape_html: bool,
}

/// A note left blank in the output because its heading is not `"* "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedNote {
    pub line: usize,
    pub heading: String,
}

/// Summary of one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub append: bool,
    pub trailing_note: TrailingNote,
    pub notes: usize,
    pub cards_written: usize,
    pub malformed: Vec<MalformedNote>,
    pub preamble_lines: usize,
    pub dropped_trailing_note: bool,
}

/// Main use case: org file in, Anki import file out.
pub struct CardConverter<S: NoteSource, W: CardSink> {
    source: S,
    sink: W,
    splitter: NoteSplitter,
    formatter: CardFormatter,
    options: ConvertOptions,
}

impl<S: NoteSource, W: CardSink> CardConverter<S, W> {
    pub fn new(source: S, sink: W, options: ConvertOptions) -> Self {
        Self {
            source,
            sink,
            splitter: NoteSplitter::new(options.trailing_note),
            formatter: CardFormatter::new(options.escape_html),
            options,
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Convert `input` and write the cards to `output`.
    ///
    /// Malformed notes do not fail the run: each becomes a blank line and is
    /// listed in the report. Read, decode and write failures abort it, and a
    /// read or decode failure leaves `output` untouched.
    #[instrument(level = "debug", skip(self), fields(append = self.options.append))]
    pub fn convert(&mut self, input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
        let content = self.source.read_source(input)?;

        let split = self.splitter.split(&content);
        debug!(notes = split.notes.len(), "Split input into notes");

        let mut malformed = Vec::new();
        let mut cards = Vec::with_capacity(split.notes.len());
        for note in &split.notes {
            match self.formatter.format(note) {
                Ok(card) => cards.push(card),
                Err(ConvertError::MalformedNote { line, heading }) => {
                    warn!(line, %heading, "Received an incorrectly formatted note");
                    malformed.push(MalformedNote { line, heading });
                    cards.push(Card::empty());
                }
                Err(e) => return Err(e),
            }
        }

        let cards_written = self
            .sink
            .write_cards(&cards, output, self.options.append)?;
        info!(cards_written, ?output, "Conversion complete");

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            append: self.options.append,
            trailing_note: self.options.trailing_note,
            notes: split.notes.len(),
            cards_written,
            malformed,
            preamble_lines: split.preamble_lines,
            dropped_trailing_note: split.dropped.is_some(),
        })
    }
}
