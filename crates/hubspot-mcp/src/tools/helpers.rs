//! Shared helper functions for MCP tool implementations.

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use hubspot_client::is_known_object_type;
use serde::Serialize;

/// Build a structured error JSON string that LLMs can parse.
pub fn error_json(error_code: &str, message: &str) -> String {
    serde_json::json!({
        "error": error_code,
        "message": message,
    })
    .to_string()
}

/// Pretty-print a successful payload, degrading to an error result if the
/// value itself cannot be serialized.
pub fn json_text<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| error_json("serialization_error", &e.to_string()))
}

/// Reject empty identifiers before they reach the remote API.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(error_json(
            "validation_error",
            &format!("{field} must not be empty"),
        ));
    }
    Ok(())
}

/// Reject object type names outside the fixed standard set.
pub fn require_known_object_type(field: &str, value: &str) -> Result<(), String> {
    if !is_known_object_type(value) {
        return Err(error_json(
            "validation_error",
            &format!("{field} '{value}' is not a recognized object type"),
        ));
    }
    Ok(())
}

/// Flatten a typed property struct into the string map the objects API
/// expects. Unset optional fields are skipped by serde and never reach the
/// wire.
pub fn properties_map<T: Serialize>(properties: &T) -> Result<HashMap<String, String>, String> {
    let value = serde_json::to_value(properties)
        .map_err(|e| error_json("serialization_error", &e.to_string()))?;
    let object = value.as_object().ok_or_else(|| {
        error_json("serialization_error", "properties did not serialize to an object")
    })?;
    Ok(object
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect())
}

/// Default `hs_timestamp` to the current instant when the caller omitted it,
/// matching what the HubSpot UI does for newly logged engagements.
pub fn ensure_timestamp(properties: &mut HashMap<String, String>) {
    properties
        .entry("hs_timestamp".to_string())
        .or_insert_with(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Props {
        hs_note_body: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hs_note_status: Option<String>,
    }

    #[test]
    fn test_error_json_shape() {
        let text = error_json("validation_error", "from_object_id must not be empty");
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["error"], "validation_error");
        assert_eq!(parsed["message"], "from_object_id must not be empty");
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("object_id", "42").is_ok());
        let err = require_non_empty("object_id", "  ").unwrap_err();
        assert!(err.contains("validation_error"));
        assert!(err.contains("object_id"));
    }

    #[test]
    fn test_require_known_object_type() {
        assert!(require_known_object_type("from_object_type", "deals").is_ok());
        let err = require_known_object_type("from_object_type", "dealz").unwrap_err();
        assert!(err.contains("validation_error"));
        assert!(err.contains("dealz"));
    }

    #[test]
    fn test_properties_map_skips_unset_fields() {
        let props = Props {
            hs_note_body: "call back tuesday".to_string(),
            hs_note_status: None,
        };
        let map = properties_map(&props).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["hs_note_body"], "call back tuesday");
    }

    #[test]
    fn test_ensure_timestamp_fills_only_when_missing() {
        let mut map = HashMap::new();
        ensure_timestamp(&mut map);
        assert!(map.contains_key("hs_timestamp"));

        let mut map: HashMap<String, String> =
            [("hs_timestamp".to_string(), "2024-01-01T00:00:00.000Z".to_string())].into();
        ensure_timestamp(&mut map);
        assert_eq!(map["hs_timestamp"], "2024-01-01T00:00:00.000Z");
    }
}
