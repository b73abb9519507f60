pub mod card_formatter;
pub mod note_splitter;

pub use card_formatter::{format_card, CardFormatter};
pub use note_splitter::{split_into_notes, NoteSplitter, Split, TrailingNote};
