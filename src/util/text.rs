// src/util/text.rs
use html_escape::encode_text;
use std::borrow::Cow;

/// Escape `&`, `<` and `>` so org text shows up literally in an Anki field.
///
/// # Examples
///
/// ```
/// use org2anki::util::text::escape_field;
///
/// assert_eq!(escape_field("a < b"), "a &lt; b");
/// ```
pub fn escape_field(text: &str) -> Cow<'_, str> {
    encode_text(text)
}
