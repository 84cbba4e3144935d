//! Untyped entry points: JSON values and JSON request documents.

pub mod handlers;
pub mod json;

pub use handlers::{handle_request, ChunkResponse};
pub use json::{chunk_json, parse_max_length, parse_options, parse_sequence};
