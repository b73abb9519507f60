// src/domain/error.rs
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Input file {} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("Malformed note at line {line}: {heading:?}")]
    MalformedNote { line: usize, heading: String },
    #[error("Failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Process exit status for a run aborted by this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::Read { .. } => 2,
            ConvertError::Decode { .. } => 3,
            ConvertError::Write { .. } => 4,
            // recovered per note, never aborts a run on its own
            ConvertError::MalformedNote { .. } => 1,
        }
    }
}
