//! Chunking strategies for string sequences.

mod base;
mod greedy_chunker;

pub use base::{Chunker, LengthMetric};
pub use greedy_chunker::{chunk, GreedyChunker};
