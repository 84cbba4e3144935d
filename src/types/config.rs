//! Configuration types for chunking.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chunkers::LengthMetric;
use crate::DEFAULT_MAX_LENGTH;

/// Options for individual chunk operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkOptions {
    /// Fail on any element longer than the budget instead of isolating it
    pub strict: bool,

    /// How element lengths are measured, UTF-16 code units unless set
    pub metric: LengthMetric,
}

impl ChunkOptions {
    /// Options with strict mode enabled.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the length metric.
    pub fn with_metric(mut self, metric: LengthMetric) -> Self {
        self.metric = metric;
        self
    }
}

/// Process-level configuration for the `chunker` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Length budget per group
    pub max_length: usize,

    /// Default options for every call
    pub options: ChunkOptions,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            options: ChunkOptions::default(),
        }
    }
}

impl ChunkingConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_length = lookup("MAX_LENGTH")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_MAX_LENGTH);

        let strict = lookup("STRICT")
            .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        let metric = match lookup("LENGTH_METRIC") {
            Some(name) => name.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring LENGTH_METRIC");
                LengthMetric::default()
            }),
            None => LengthMetric::default(),
        };

        Self {
            max_length,
            options: ChunkOptions { strict, metric },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ChunkingConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ChunkingConfig::default());
        assert_eq!(config.max_length, 40);
        assert!(!config.options.strict);
    }

    #[test]
    fn test_reads_variables() {
        let config = ChunkingConfig::from_lookup(lookup_from(&[
            ("MAX_LENGTH", "12"),
            ("STRICT", "true"),
            ("LENGTH_METRIC", "utf16"),
        ]));
        assert_eq!(config.max_length, 12);
        assert!(config.options.strict);
        assert_eq!(config.options.metric, LengthMetric::Utf16);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ChunkingConfig::from_lookup(lookup_from(&[
            ("MAX_LENGTH", "0"),
            ("LENGTH_METRIC", "graphemes"),
        ]));
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.options.metric, LengthMetric::Utf16);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ChunkOptions = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert_eq!(options, ChunkOptions::strict());

        let options: ChunkOptions = serde_json::from_str(r#"{"metric": "chars"}"#).unwrap();
        assert!(!options.strict);
        assert_eq!(options.metric, LengthMetric::Chars);
    }
}
