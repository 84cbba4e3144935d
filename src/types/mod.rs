//! Core types for chunking.

mod budget;
mod config;

pub use budget::MaxLength;
pub use config::{ChunkOptions, ChunkingConfig};
