// src/domain/card.rs
use crate::constants::FIELD_SEPARATOR;
use serde::Serialize;
use std::fmt;

/// One Anki import record: an HTML front and back field.
///
/// The empty card stands in for a note that could not be formatted and
/// renders as a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    front: String,
    back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}{}{}", self.front, FIELD_SEPARATOR, self.back)
    }
}
