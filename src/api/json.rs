//! Runtime-validated entry point for untyped JSON input.
//!
//! The typed API makes most malformed calls unrepresentable. Callers that
//! hand over loosely typed data (other languages, config files, request
//! bodies) go through [`chunk_json`], which checks every argument before
//! any chunking happens.

use serde_json::{Map, Value};

use crate::chunkers::{GreedyChunker, LengthMetric};
use crate::error::{Argument, ChunkError, Result};
use crate::types::{ChunkOptions, MaxLength};

/// Chunk a JSON array of strings.
///
/// `options` is `None` when the caller supplied no options at all. A
/// supplied `null` is rejected like any other non-object value.
pub fn chunk_json(
    sequence: &Value,
    max_length: &Value,
    options: Option<&Value>,
) -> Result<Vec<Vec<String>>> {
    let items = parse_sequence(sequence)?;
    let max_length = parse_max_length(max_length)?;
    let options = match options {
        Some(value) => parse_options(value)?,
        None => ChunkOptions::default(),
    };

    GreedyChunker::new(max_length)
        .with_options(options)
        .chunk(&items)
}

/// Decode a non-empty array of strings.
pub fn parse_sequence(value: &Value) -> Result<Vec<String>> {
    let array = value.as_array().ok_or_else(|| {
        ChunkError::invalid(
            Argument::Sequence,
            format!("expected an array of strings, got {}", kind(value)),
        )
    })?;

    if array.is_empty() {
        return Err(ChunkError::invalid(
            Argument::Sequence,
            "must contain at least one string",
        ));
    }

    array
        .iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::String(s) => Ok(s.clone()),
            other => Err(ChunkError::invalid(
                Argument::Sequence,
                format!("element {} is {}, expected a string", index, kind(other)),
            )),
        })
        .collect()
}

/// Decode a positive whole number.
///
/// Integral floats such as `40.0` are accepted; fractions, zero, negatives
/// and non-numbers are not. Budgets beyond `usize::MAX` saturate, since no
/// input can be longer than that.
pub fn parse_max_length(value: &Value) -> Result<MaxLength> {
    let invalid = |reason: String| ChunkError::invalid(Argument::MaxLength, reason);

    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(invalid(format!(
                "expected a positive integer, got {}",
                kind(other)
            )))
        }
    };

    let parsed = if let Some(n) = number.as_u64() {
        Some(usize::try_from(n).unwrap_or(usize::MAX))
    } else if number.as_i64().is_some() {
        None
    } else {
        number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as usize)
    };

    match parsed {
        Some(n) if n > 0 => MaxLength::new(n),
        _ => Err(invalid(format!("expected a positive integer, got {}", number))),
    }
}

/// Decode an options object.
///
/// Unrecognized keys are ignored.
pub fn parse_options(value: &Value) -> Result<ChunkOptions> {
    let map: &Map<String, Value> = value.as_object().ok_or_else(|| {
        ChunkError::invalid(
            Argument::Options,
            format!("expected an object, got {}", kind(value)),
        )
    })?;

    let mut options = ChunkOptions::default();

    if let Some(strict) = map.get("strict") {
        options.strict = strict.as_bool().ok_or_else(|| {
            ChunkError::invalid(
                Argument::Strict,
                format!("expected a boolean, got {}", kind(strict)),
            )
        })?;
    }

    if let Some(metric) = map.get("metric") {
        let name = metric.as_str().ok_or_else(|| {
            ChunkError::invalid(
                Argument::Metric,
                format!("expected a metric name, got {}", kind(metric)),
            )
        })?;
        options.metric = name.parse::<LengthMetric>()?;
    }

    Ok(options)
}

/// Human-readable JSON type name for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
