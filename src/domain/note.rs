// src/domain/note.rs
use serde::Serialize;

/// A block of org-mode source lines opened by a heading line.
///
/// Lines are stored without their terminators. `line` is the 1-based
/// position of the heading in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub line: usize,
    pub lines: Vec<String>,
}

impl Note {
    pub fn new(line: usize, heading: impl Into<String>) -> Self {
        Self {
            line,
            lines: vec![heading.into()],
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn heading(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    pub fn body(&self) -> &[String] {
        self.lines.get(1..).unwrap_or(&[])
    }
}
