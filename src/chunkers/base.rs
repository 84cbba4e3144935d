//! Base trait for chunkers and the length metric they account with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Argument, ChunkError, Result};

/// The core trait that string chunkers implement.
///
/// A chunker partitions an ordered list of strings into contiguous groups
/// without reordering, dropping, or splitting any element.
pub trait Chunker: Send + Sync {
    /// Get the name of this chunker.
    fn name(&self) -> &'static str;

    /// Compute the number of elements in each consecutive group of `items`.
    fn partition(&self, items: &[&str]) -> Result<Vec<usize>>;

    /// Partition `items` into owned groups.
    fn chunk_strings(&self, items: &[&str]) -> Result<Vec<Vec<String>>> {
        let sizes = self.partition(items)?;

        let mut groups = Vec::with_capacity(sizes.len());
        let mut rest = items;
        for size in sizes {
            let (group, tail) = rest.split_at(size);
            groups.push(group.iter().map(|s| s.to_string()).collect());
            rest = tail;
        }

        Ok(groups)
    }

    /// Get the description of this chunker.
    fn description(&self) -> &'static str {
        "A string chunker"
    }
}

/// How the length of a single string is measured against the budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMetric {
    /// UTF-8 byte length (`str::len`)
    Bytes,
    /// Unicode scalar values
    Chars,
    /// UTF-16 code units, the metric of JavaScript's `String.length`
    #[default]
    Utf16,
}

impl LengthMetric {
    /// Measure the length of `text`.
    pub fn measure(&self, text: &str) -> usize {
        match self {
            LengthMetric::Bytes => text.len(),
            LengthMetric::Chars => text.chars().count(),
            LengthMetric::Utf16 => text.encode_utf16().count(),
        }
    }

    /// All supported metric names.
    pub fn names() -> &'static [&'static str] {
        &["bytes", "chars", "utf16"]
    }
}

impl fmt::Display for LengthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthMetric::Bytes => write!(f, "bytes"),
            LengthMetric::Chars => write!(f, "chars"),
            LengthMetric::Utf16 => write!(f, "utf16"),
        }
    }
}

impl FromStr for LengthMetric {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bytes" => Ok(LengthMetric::Bytes),
            "chars" => Ok(LengthMetric::Chars),
            "utf16" => Ok(LengthMetric::Utf16),
            other => Err(ChunkError::invalid(
                Argument::Metric,
                format!(
                    "unknown length metric '{}', expected one of: {}",
                    other,
                    LengthMetric::names().join(", ")
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_ascii() {
        for metric in [LengthMetric::Bytes, LengthMetric::Chars, LengthMetric::Utf16] {
            assert_eq!(metric.measure("bow-wow"), 7);
            assert_eq!(metric.measure(""), 0);
        }
    }

    #[test]
    fn test_measure_multibyte() {
        // "é" is 2 bytes, 1 char, 1 UTF-16 unit; the crab is 4 bytes, 1 char, 2 units
        let text = "é🦀";
        assert_eq!(LengthMetric::Bytes.measure(text), 6);
        assert_eq!(LengthMetric::Chars.measure(text), 2);
        assert_eq!(LengthMetric::Utf16.measure(text), 3);
    }

    #[test]
    fn test_parse_metric() {
        assert_eq!("utf16".parse::<LengthMetric>().unwrap(), LengthMetric::Utf16);
        assert_eq!("Chars".parse::<LengthMetric>().unwrap(), LengthMetric::Chars);
        let err = "graphemes".parse::<LengthMetric>().unwrap_err();
        assert_eq!(err.argument(), Some(Argument::Metric));
    }
}
