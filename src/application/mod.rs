// src/application/mod.rs
pub mod card_converter;

pub use card_converter::{
    CardConverter, CardSink, ConversionReport, ConvertOptions, MalformedNote, NoteSource,
};
