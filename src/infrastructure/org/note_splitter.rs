use crate::constants::HEADING_MARKER;
use crate::domain::Note;
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// What happens to the note still open when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingNote {
    /// The last note is discarded. Matches the behavior of the original org-to-anki script.
    #[default]
    Drop,
    /// The last note is emitted like every other note.
    Keep,
}

impl TrailingNote {
    pub fn from_keep(keep: bool) -> Self {
        if keep {
            TrailingNote::Keep
        } else {
            TrailingNote::Drop
        }
    }
}

/// Result of splitting one document.
#[derive(Debug, Default, PartialEq)]
pub struct Split {
    pub notes: Vec<Note>,
    /// Lines before the first heading, which belong to no note.
    pub preamble_lines: usize,
    /// The last note when it was discarded under [`TrailingNote::Drop`].
    pub dropped: Option<Note>,
}

pub struct NoteSplitter {
    trailing: TrailingNote,
}

impl NoteSplitter {
    pub fn new(trailing: TrailingNote) -> Self {
        Self { trailing }
    }

    pub fn split(&self, content: &str) -> Split {
        self.split_lines(content.lines())
    }

    #[instrument(level = "debug", skip_all, fields(trailing = ?self.trailing))]
    pub fn split_lines<'a, I>(&self, lines: I) -> Split
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut split = Split::default();
        let mut current: Option<Note> = None;

        for (idx, line) in lines.into_iter().enumerate() {
            if line.starts_with(HEADING_MARKER) {
                if let Some(done) = current.replace(Note::new(idx + 1, line)) {
                    trace!(line = done.line, "Note complete");
                    split.notes.push(done);
                }
            } else if let Some(note) = current.as_mut() {
                note.push_line(line);
            } else {
                split.preamble_lines += 1;
            }
        }

        if let Some(last) = current {
            match self.trailing {
                TrailingNote::Keep => split.notes.push(last),
                TrailingNote::Drop => {
                    debug!(line = last.line, heading = last.heading(), "Dropping trailing note");
                    split.dropped = Some(last);
                }
            }
        }

        if split.preamble_lines > 0 {
            debug!(count = split.preamble_lines, "Discarded lines before first heading");
        }
        split
    }
}

impl Default for NoteSplitter {
    fn default() -> Self {
        Self::new(TrailingNote::default())
    }
}

/// Split `lines` into notes, each opened by a line starting with `*`.
pub fn split_into_notes<'a, I>(lines: I, trailing: TrailingNote) -> Vec<Note>
where
    I: IntoIterator<Item = &'a str>,
{
    NoteSplitter::new(trailing).split_lines(lines).notes
}
