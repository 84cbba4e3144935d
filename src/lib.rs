//! String Chunker Library
//!
//! Greedily partitions an ordered list of strings into contiguous groups
//! whose summed length stays within a budget. Order is preserved and no
//! string is ever split across groups.
//!
//! ```
//! use chunker::{chunk, ChunkOptions};
//!
//! let groups = chunk(&["beep", "bop", "bow-wow", "bap"], 7, &ChunkOptions::default())?;
//! assert_eq!(groups, vec![vec!["beep", "bop"], vec!["bow-wow"], vec!["bap"]]);
//! # Ok::<(), chunker::ChunkError>(())
//! ```

pub mod api;
pub mod chunkers;
pub mod error;
pub mod types;

pub use api::{chunk_json, handle_request, ChunkResponse};
pub use chunkers::{chunk, Chunker, GreedyChunker, LengthMetric};
pub use error::{Argument, ChunkError, Result};
pub use types::{ChunkOptions, ChunkingConfig, MaxLength};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::chunkers::*;
    pub use crate::error::*;
    pub use crate::types::*;
}

/// Default length budget per group
pub const DEFAULT_MAX_LENGTH: usize = 40;
