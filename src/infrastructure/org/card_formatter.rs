use crate::constants::{FIELD_SEPARATOR, HEADING_PREFIX, LINE_BREAK, TAB_ENTITY};
use crate::domain::{Card, ConvertError, Note};
use crate::util::text::escape_field;
use std::borrow::Cow;
use tracing::instrument;

/// Turns notes into cards: heading on the front, body lines on the back.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardFormatter {
    escape_html: bool,
}

impl CardFormatter {
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    /// Format a note whose heading line starts with `"* "`.
    ///
    /// The front is the heading text framed by line breaks, the back is the
    /// remaining lines joined by line breaks. Any other heading yields
    /// [`ConvertError::MalformedNote`].
    #[instrument(level = "trace", skip(self), fields(line = note.line))]
    pub fn format(&self, note: &Note) -> Result<Card, ConvertError> {
        let heading = note
            .heading()
            .strip_prefix(HEADING_PREFIX)
            .ok_or_else(|| ConvertError::MalformedNote {
                line: note.line,
                heading: note.heading().to_string(),
            })?;

        let front = format!("{LINE_BREAK}{}{LINE_BREAK}", self.field_text(heading));
        let back = note
            .body()
            .iter()
            .map(|line| self.field_text(line))
            .collect::<Vec<_>>()
            .join(LINE_BREAK);

        Ok(Card::new(front, back))
    }

    /// Note text as it may appear inside a field. Tabs become an entity so
    /// the field separator stays unique on the line.
    fn field_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let text = if self.escape_html {
            escape_field(text)
        } else {
            Cow::Borrowed(text)
        };
        if text.contains(FIELD_SEPARATOR) {
            Cow::Owned(text.replace(FIELD_SEPARATOR, TAB_ENTITY))
        } else {
            text
        }
    }
}

/// Format `note` without HTML escaping.
pub fn format_card(note: &Note) -> Result<Card, ConvertError> {
    CardFormatter::default().format(note)
}
