// src/constants.rs
//
// Format constants shared by the splitter, formatter and writer.

/// First character of every org-mode heading line. A line starting with it opens a new note.
pub const HEADING_MARKER: char = '*';

/// Prefix a heading line must carry to be formatted into a card.
///
/// Only top-level headings followed by a space qualify; `*Heading` and
/// `** Subheading` start a note but fail formatting.
///
/// Used in: `infrastructure/org/card_formatter.rs`
pub const HEADING_PREFIX: &str = "* ";

/// HTML line break Anki renders inside a field.
pub const LINE_BREAK: &str = "<br />";

/// Separator between the front and back field of an import line.
pub const FIELD_SEPARATOR: char = '\t';

/// Replacement for a tab inside note text, which would otherwise split the fields.
pub const TAB_ENTITY: &str = "&#9;";

/// Extension given to the output file when no output path is provided.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";

/// Directory below the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "org2anki";
pub const CONFIG_FILE_NAME: &str = "config.toml";
