// src/infrastructure/mod.rs
pub mod config;
pub mod file_writer;
pub mod org;

pub use config::Config;
pub use file_writer::FileStore;
