//! Request/response handling for JSON documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::json::{chunk_json, kind};
use crate::error::{Argument, ChunkError, Result};

/// Response body for a successful chunk request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkResponse {
    pub groups: Vec<Vec<String>>,
    pub group_count: usize,
}

impl ChunkResponse {
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        let group_count = groups.len();
        Self {
            groups,
            group_count,
        }
    }
}

/// Handle a request document of the form
/// `{"items": [...], "max_length": n, "options": {...}}`.
///
/// `options` may be omitted. The response is serialized [`ChunkResponse`].
pub fn handle_request(body: &str) -> Result<String> {
    let request: Value = serde_json::from_str(body)
        .map_err(|e| ChunkError::invalid(Argument::Request, format!("malformed JSON: {}", e)))?;

    let fields = request.as_object().ok_or_else(|| {
        ChunkError::invalid(
            Argument::Request,
            format!("expected an object, got {}", kind(&request)),
        )
    })?;

    let items = fields.get("items").unwrap_or(&Value::Null);
    let max_length = fields.get("max_length").unwrap_or(&Value::Null);
    let options = fields.get("options");

    debug!(body_len = body.len(), "Received chunk request");

    let groups = chunk_json(items, max_length, options)?;
    let response = ChunkResponse::new(groups);

    info!(groups = response.group_count, "Chunk request complete");

    serde_json::to_string(&response)
        .map_err(|e| ChunkError::Internal(format!("failed to encode response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_handle_request() {
        let body = r#"{"items": ["a", "bc", "def", "ghij", "lmnop"], "max_length": 6}"#;
        let response: ChunkResponse = serde_json::from_str(&handle_request(body).unwrap()).unwrap();
        assert_eq!(response.group_count, 3);
        assert_eq!(response.groups[0], vec!["a", "bc", "def"]);
    }

    #[test]
    fn test_handle_request_with_options() {
        let body = r#"{"items": ["beep", "beboop", "bap"], "max_length": 4, "options": {"strict": true}}"#;
        let err = handle_request(body).unwrap_err();
        assert!(err.is_policy_error());
    }

    #[test]
    fn test_handle_request_counts_utf16_units() {
        let body = r#"{"items": ["é", "🦀"], "max_length": 3, "options": {"strict": true}}"#;
        let encoded = handle_request(body).unwrap();
        let response: ChunkResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(response, ChunkResponse::new(vec![vec!["é".to_string(), "🦀".to_string()]]));
    }

    #[test]
    fn test_malformed_body() {
        let err = handle_request("{not json").unwrap_err();
        assert_eq!(err.argument(), Some(Argument::Request));

        let err = handle_request("[1, 2]").unwrap_err();
        assert_eq!(err.argument(), Some(Argument::Request));
    }

    #[test]
    fn test_missing_fields() {
        let err = handle_request(r#"{"max_length": 4}"#).unwrap_err();
        assert_eq!(err.argument(), Some(Argument::Sequence));

        let err = handle_request(r#"{"items": ["a"]}"#).unwrap_err();
        assert_eq!(err.argument(), Some(Argument::MaxLength));

        let err = handle_request(r#"{"items": ["a"], "max_length": 4, "options": null}"#).unwrap_err();
        assert_eq!(err.argument(), Some(Argument::Options));
    }
}
