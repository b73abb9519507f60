// src/domain/mod.rs
pub mod card;
pub mod error;
pub mod note;

pub use card::Card;
pub use error::ConvertError;
pub use note::Note;
