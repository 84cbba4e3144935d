//! Greedy chunker that packs strings into groups under a length budget.

use tracing::{debug, trace};

use super::base::{Chunker, LengthMetric};
use crate::error::{Argument, ChunkError, Result};
use crate::types::{ChunkOptions, MaxLength};

/// Greedy left-to-right chunker.
///
/// Each element is appended to the current group while the group's summed
/// length stays within the budget; otherwise the group is closed and a new
/// one starts. An element longer than the budget on its own ends up alone in
/// its group, or fails the call in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyChunker {
    max_length: MaxLength,
    options: ChunkOptions,
}

impl GreedyChunker {
    /// Create a new greedy chunker with default options.
    pub fn new(max_length: MaxLength) -> Self {
        Self {
            max_length,
            options: ChunkOptions::default(),
        }
    }

    /// Replace all options.
    pub fn with_options(mut self, options: ChunkOptions) -> Self {
        self.options = options;
        self
    }

    /// Set strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Set the length metric.
    pub fn metric(mut self, metric: LengthMetric) -> Self {
        self.options.metric = metric;
        self
    }

    pub fn max_length(&self) -> MaxLength {
        self.max_length
    }

    pub fn options(&self) -> &ChunkOptions {
        &self.options
    }

    /// Partition `items` into groups, cloning each element into its group.
    pub fn chunk<S>(&self, items: &[S]) -> Result<Vec<Vec<S>>>
    where
        S: AsRef<str> + Clone,
    {
        let sizes = self.group_sizes(items)?;

        let mut groups = Vec::with_capacity(sizes.len());
        let mut rest = items;
        for size in sizes {
            let (group, tail) = rest.split_at(size);
            groups.push(group.to_vec());
            rest = tail;
        }

        Ok(groups)
    }

    /// Compute the number of elements in each group without building them.
    pub fn group_sizes<S: AsRef<str>>(&self, items: &[S]) -> Result<Vec<usize>> {
        if items.is_empty() {
            return Err(ChunkError::invalid(
                Argument::Sequence,
                "must contain at least one string",
            ));
        }

        let max_length = self.max_length.get();
        let mut sizes = Vec::new();
        let mut current_len = 0usize;
        let mut current_sum = 0usize;

        for (index, item) in items.iter().enumerate() {
            let length = self.options.metric.measure(item.as_ref());

            if self.options.strict && length > max_length {
                return Err(ChunkError::LengthExceeded {
                    index,
                    length,
                    max_length,
                });
            }

            if current_len > 0 && current_sum.saturating_add(length) > max_length {
                trace!(size = current_len, length = current_sum, "Closing group");
                sizes.push(current_len);
                current_len = 0;
                current_sum = 0;
            }

            current_len += 1;
            current_sum = current_sum.saturating_add(length);
        }

        trace!(size = current_len, length = current_sum, "Closing group");
        sizes.push(current_len);

        debug!(
            items = items.len(),
            groups = sizes.len(),
            max_length,
            strict = self.options.strict,
            metric = %self.options.metric,
            "Chunked strings"
        );

        Ok(sizes)
    }
}

impl Chunker for GreedyChunker {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn description(&self) -> &'static str {
        "Packs consecutive strings into groups whose summed length stays within a budget"
    }

    fn partition(&self, items: &[&str]) -> Result<Vec<usize>> {
        self.group_sizes(items)
    }
}

/// Chunk `sequence` into groups whose summed length is at most `max_length`.
///
/// Fails with [`ChunkError::InvalidInputType`] when `sequence` is empty or
/// `max_length` is zero, and with [`ChunkError::LengthExceeded`] when
/// `options.strict` is set and some element is longer than `max_length`.
pub fn chunk<S>(sequence: &[S], max_length: usize, options: &ChunkOptions) -> Result<Vec<Vec<S>>>
where
    S: AsRef<str> + Clone,
{
    let max_length = MaxLength::new(max_length)?;
    GreedyChunker::new(max_length)
        .with_options(*options)
        .chunk(sequence)
}
