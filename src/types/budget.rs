//! The length budget.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Argument, ChunkError};

/// Inclusive upper bound on the summed length of one group.
///
/// Always positive; construct it with [`MaxLength::new`] or `try_into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxLength(NonZeroUsize);

impl MaxLength {
    /// Create a budget, rejecting zero.
    pub fn new(value: usize) -> Result<Self, ChunkError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or_else(|| ChunkError::invalid(Argument::MaxLength, "must be a positive integer, got 0"))
    }

    /// Get the budget as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for MaxLength {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for MaxLength {
    type Error = ChunkError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MaxLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MaxLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.get() as u64)
    }
}

impl<'de> Deserialize<'de> for MaxLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = usize::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero() {
        let err = MaxLength::new(0).unwrap_err();
        assert_eq!(err.argument(), Some(Argument::MaxLength));
    }

    #[test]
    fn test_accepts_positive() {
        let max = MaxLength::try_from(40).unwrap();
        assert_eq!(max.get(), 40);
        assert_eq!(max.to_string(), "40");
    }

    #[test]
    fn test_deserialize_validates() {
        let max: MaxLength = serde_json::from_str("7").unwrap();
        assert_eq!(max.get(), 7);
        assert!(serde_json::from_str::<MaxLength>("0").is_err());
        assert!(serde_json::from_str::<MaxLength>("-3").is_err());
    }
}
