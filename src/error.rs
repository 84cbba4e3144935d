//! Error types for chunking.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`ChunkError`].
pub type Result<T> = std::result::Result<T, ChunkError>;

/// The argument that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The input sequence of strings
    Sequence,
    /// The length budget
    MaxLength,
    /// The options record
    Options,
    /// The `strict` option
    Strict,
    /// The `metric` option
    Metric,
    /// A whole JSON request document
    Request,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Sequence => write!(f, "sequence"),
            Argument::MaxLength => write!(f, "max_length"),
            Argument::Options => write!(f, "options"),
            Argument::Strict => write!(f, "options.strict"),
            Argument::Metric => write!(f, "options.metric"),
            Argument::Request => write!(f, "request"),
        }
    }
}

/// Errors returned by the chunker.
///
/// `InvalidInputType` means the caller broke the calling contract.
/// `LengthExceeded` means the data violates the strict policy the caller asked for.
/// `Internal` is a failure of this crate, never of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("invalid {argument}: {reason}")]
    InvalidInputType { argument: Argument, reason: String },

    #[error("element {index} has length {length}, which exceeds the maximum length {max_length}")]
    LengthExceeded {
        index: usize,
        length: usize,
        max_length: usize,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ChunkError {
    pub(crate) fn invalid(argument: Argument, reason: impl Into<String>) -> Self {
        ChunkError::InvalidInputType {
            argument,
            reason: reason.into(),
        }
    }

    /// The argument that failed validation, if this is a contract error.
    pub fn argument(&self) -> Option<Argument> {
        match self {
            ChunkError::InvalidInputType { argument, .. } => Some(*argument),
            ChunkError::LengthExceeded { .. } | ChunkError::Internal(_) => None,
        }
    }

    /// True when the call itself was malformed.
    pub fn is_contract_error(&self) -> bool {
        matches!(self, ChunkError::InvalidInputType { .. })
    }

    /// True when valid input was rejected by strict mode.
    pub fn is_policy_error(&self) -> bool {
        matches!(self, ChunkError::LengthExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let contract = ChunkError::invalid(Argument::MaxLength, "must be positive");
        assert!(contract.is_contract_error());
        assert!(!contract.is_policy_error());
        assert_eq!(contract.argument(), Some(Argument::MaxLength));

        let policy = ChunkError::LengthExceeded {
            index: 1,
            length: 6,
            max_length: 4,
        };
        assert!(policy.is_policy_error());
        assert_eq!(policy.argument(), None);
    }

    #[test]
    fn test_internal_error_is_neither_category() {
        let err = ChunkError::Internal("response encoding failed".to_string());
        assert!(!err.is_contract_error());
        assert!(!err.is_policy_error());
        assert_eq!(err.argument(), None);
        assert_eq!(err.to_string(), "internal error: response encoding failed");
    }

    #[test]
    fn test_error_messages() {
        let err = ChunkError::invalid(Argument::Strict, "expected a boolean, got null");
        assert_eq!(
            err.to_string(),
            "invalid options.strict: expected a boolean, got null"
        );

        let err = ChunkError::LengthExceeded {
            index: 1,
            length: 6,
            max_length: 4,
        };
        assert!(err.to_string().contains("exceeds the maximum length 4"));
    }
}
