// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{CardSink, NoteSource};
use crate::domain::{Card, ConvertError};

enum SourceEntry {
    Bytes(Vec<u8>),
    Unreadable,
}

/// In-memory note source for testing the converter without touching disk.
///
/// Paths that were never configured fail like a missing file.
///
/// # Examples
///
/// ```
/// use org2anki::util::testing::MockNoteSource;
/// use org2anki::application::NoteSource;
/// use std::path::Path;
///
/// let mut source = MockNoteSource::builder()
///     .with_file("deck.org", "* Q\nA\n")
///     .with_invalid_utf8("latin1.org")
///     .build();
///
/// assert_eq!(source.read_source(Path::new("deck.org")).unwrap(), "* Q\nA\n");
/// assert!(source.read_source(Path::new("latin1.org")).is_err());
/// ```
pub struct MockNoteSource {
    files: HashMap<PathBuf, SourceEntry>,
}

impl MockNoteSource {
    pub fn builder() -> MockNoteSourceBuilder {
        MockNoteSourceBuilder::new()
    }
}

impl NoteSource for MockNoteSource {
    fn read_source(&mut self, path: &Path) -> Result<String, ConvertError> {
        let read_error = |kind: io::ErrorKind| ConvertError::Read {
            path: path.to_path_buf(),
            source: io::Error::new(kind, "mock read failure"),
        };
        match self.files.get(path) {
            Some(SourceEntry::Bytes(bytes)) => {
                String::from_utf8(bytes.clone()).map_err(|source| ConvertError::Decode {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Some(SourceEntry::Unreadable) => Err(read_error(io::ErrorKind::PermissionDenied)),
            None => Err(read_error(io::ErrorKind::NotFound)),
        }
    }
}

/// Builder for MockNoteSource
pub struct MockNoteSourceBuilder {
    files: HashMap<PathBuf, SourceEntry>,
}

impl MockNoteSourceBuilder {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Serve `content` for `path`
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .insert(path.into(), SourceEntry::Bytes(content.as_bytes().to_vec()));
        self
    }

    /// Serve bytes that are not valid UTF-8 for `path`
    pub fn with_invalid_utf8(mut self, path: impl Into<PathBuf>) -> Self {
        self.files
            .insert(path.into(), SourceEntry::Bytes(b"* Caf\xe9\n".to_vec()));
        self
    }

    /// Fail reads of `path` with a permission error
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into(), SourceEntry::Unreadable);
        self
    }

    pub fn build(self) -> MockNoteSource {
        MockNoteSource { files: self.files }
    }
}

impl Default for MockNoteSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One call to [`CardSink::write_cards`] seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    pub destination: PathBuf,
    pub lines: Vec<String>,
    pub append: bool,
}

/// In-memory card sink that keeps per-path file contents with append/overwrite semantics.
#[derive(Default)]
pub struct MockCardSink {
    files: HashMap<PathBuf, Vec<String>>,
    writes: Vec<RecordedWrite>,
    failing: HashSet<PathBuf>,
}

impl MockCardSink {
    pub fn builder() -> MockCardSinkBuilder {
        MockCardSinkBuilder::new()
    }

    pub fn writes(&self) -> &[RecordedWrite] {
        &self.writes
    }

    /// Current lines of the in-memory file at `path`
    pub fn lines(&self, path: impl AsRef<Path>) -> Vec<String> {
        self.files.get(path.as_ref()).cloned().unwrap_or_default()
    }
}

impl CardSink for MockCardSink {
    fn write_cards(
        &mut self,
        cards: &[Card],
        destination: &Path,
        append: bool,
    ) -> Result<usize, ConvertError> {
        if self.failing.contains(destination) {
            return Err(ConvertError::Write {
                path: destination.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock write failure"),
            });
        }

        let lines: Vec<String> = cards.iter().map(Card::to_string).collect();
        let file = self.files.entry(destination.to_path_buf()).or_default();
        if !append {
            file.clear();
        }
        file.extend(lines.iter().cloned());

        self.writes.push(RecordedWrite {
            destination: destination.to_path_buf(),
            lines,
            append,
        });
        Ok(cards.len())
    }
}

/// Builder for MockCardSink
pub struct MockCardSinkBuilder {
    files: HashMap<PathBuf, Vec<String>>,
    failing: HashSet<PathBuf>,
}

impl MockCardSinkBuilder {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    /// Pre-populate the in-memory file at `path`
    pub fn with_existing(mut self, path: impl Into<PathBuf>, lines: &[&str]) -> Self {
        self.files
            .insert(path.into(), lines.iter().map(|l| l.to_string()).collect());
        self
    }

    /// Fail every write to `path`
    pub fn with_write_error(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    pub fn build(self) -> MockCardSink {
        MockCardSink {
            files: self.files,
            writes: Vec::new(),
            failing: self.failing,
        }
    }
}

impl Default for MockCardSinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
