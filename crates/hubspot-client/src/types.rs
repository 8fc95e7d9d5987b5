//! Request types shared across API groups.
//!
//! Responses are deliberately untyped (`serde_json::Value`): every tool is a
//! pass-through and returns the remote payload verbatim, so decoding into
//! structs would only add a place for the mapping to drift.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Comparison operator accepted by the CRM search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Between,
    In,
    NotIn,
    HasProperty,
    NotHasProperty,
    ContainsToken,
    NotContainsToken,
}

/// A single property filter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub property_name: String,
    pub operator: FilterOperator,
    pub value: String,
}

/// Filters combined with AND semantics by the remote API.
#[derive(Debug, Clone, Serialize)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

/// Body of a `POST .../search` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub filter_groups: Vec<FilterGroup>,
    pub sorts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl SearchRequest {
    /// One filter group with one filter - the shape every search tool uses.
    pub fn single_filter(
        property_name: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
        limit: u32,
        after: Option<String>,
        properties: Option<Vec<String>>,
    ) -> Self {
        Self {
            filter_groups: vec![FilterGroup {
                filters: vec![Filter {
                    property_name: property_name.into(),
                    operator,
                    value: value.into(),
                }],
            }],
            sorts: Vec::new(),
            properties,
            limit,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_operator_wire_format() {
        assert_eq!(
            serde_json::to_string(&FilterOperator::ContainsToken).unwrap(),
            "\"CONTAINS_TOKEN\""
        );
        assert_eq!(
            serde_json::to_string(&FilterOperator::Neq).unwrap(),
            "\"NEQ\""
        );
    }

    #[test]
    fn test_single_filter_request_shape() {
        let request = SearchRequest::single_filter(
            "email",
            FilterOperator::Eq,
            "ada@example.com",
            10,
            None,
            None,
        );
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["limit"], 10);
        assert_eq!(json["sorts"], serde_json::json!([]));
        assert_eq!(
            json["filterGroups"][0]["filters"][0],
            serde_json::json!({
                "propertyName": "email",
                "operator": "EQ",
                "value": "ada@example.com"
            })
        );
        // Optional fields stay off the wire entirely when unset
        assert!(json.get("after").is_none());
        assert!(json.get("properties").is_none());
    }

    #[test]
    fn test_search_request_carries_cursor_and_projection() {
        let request = SearchRequest::single_filter(
            "dealname",
            FilterOperator::ContainsToken,
            "renewal",
            25,
            Some("NTI1Cg".to_string()),
            Some(vec!["dealname".to_string(), "amount".to_string()]),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["after"], "NTI1Cg");
        assert_eq!(json["properties"], serde_json::json!(["dealname", "amount"]));
    }
}
