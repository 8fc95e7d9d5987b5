//! # Client Error Types
//!
//! Unified error handling for hubspot-client library operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Comprehensive error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HubSpot API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No association type defined for {from_type} -> {to_type}")]
    UnresolvedAssociationType { from_type: String, to_type: String },
}

impl ClientError {
    /// Create an API error from an HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an unresolved association type error for an ordered type pair
    pub fn unresolved_association_type(
        from_type: impl Into<String>,
        to_type: impl Into<String>,
    ) -> Self {
        Self::UnresolvedAssociationType {
            from_type: from_type.into(),
            to_type: to_type.into(),
        }
    }

    /// Check if error is recoverable (worth retrying)
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Http(e) => e.is_timeout() || e.is_connect(),
            ClientError::Api { status, .. } => *status >= 500 || *status == 429,
            // Resolution failures are deterministic - retrying cannot help
            ClientError::UnresolvedAssociationType { .. } => false,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Constructor tests ----

    #[test]
    fn test_api_error_constructor() {
        let err = ClientError::api_error(404, "not found");
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            _ => panic!("Expected Api variant"),
        }
    }

    #[test]
    fn test_config_error_constructor() {
        let err = ClientError::config_error("bad config");
        match err {
            ClientError::Config(msg) => assert_eq!(msg, "bad config"),
            _ => panic!("Expected Config variant"),
        }
    }

    #[test]
    fn test_unresolved_association_type_constructor() {
        let err = ClientError::unresolved_association_type("contacts", "goals");
        match err {
            ClientError::UnresolvedAssociationType { from_type, to_type } => {
                assert_eq!(from_type, "contacts");
                assert_eq!(to_type, "goals");
            }
            _ => panic!("Expected UnresolvedAssociationType variant"),
        }
    }

    // ---- is_recoverable tests ----

    #[test]
    fn test_api_error_500_is_recoverable() {
        let err = ClientError::api_error(500, "internal server error");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_api_error_429_is_recoverable() {
        let err = ClientError::api_error(429, "rate limited");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_api_error_400_not_recoverable() {
        let err = ClientError::api_error(400, "bad request");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_api_error_404_not_recoverable() {
        let err = ClientError::api_error(404, "not found");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_unresolved_association_type_not_recoverable() {
        let err = ClientError::unresolved_association_type("carts", "goals");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_config_error_not_recoverable() {
        let err = ClientError::config_error("bad");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_input_not_recoverable() {
        let err = ClientError::invalid_input("empty id");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_serialization_error_not_recoverable() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = ClientError::Serialization(json_err);
        assert!(!err.is_recoverable());
    }

    // ---- Display tests ----

    #[test]
    fn test_display_api_error() {
        let err = ClientError::api_error(503, "service down");
        assert_eq!(format!("{err}"), "HubSpot API error: 503 - service down");
    }

    #[test]
    fn test_display_config_error() {
        let err = ClientError::config_error("missing field");
        assert_eq!(format!("{err}"), "Configuration error: missing field");
    }

    #[test]
    fn test_display_invalid_input() {
        let err = ClientError::invalid_input("empty name");
        assert_eq!(format!("{err}"), "Invalid input: empty name");
    }

    #[test]
    fn test_display_unresolved_association_type() {
        let err = ClientError::unresolved_association_type("carts", "goals");
        assert_eq!(
            format!("{err}"),
            "No association type defined for carts -> goals"
        );
    }

    // ---- From impls ----

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_debug_impl() {
        let err = ClientError::api_error(500, "boom");
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Api"));
    }
}
