//! Associations (v4): typed directional links between CRM records.
//!
//! Point operations address one `(fromType, fromId, toType, toId)` tuple;
//! batch operations are scoped to a single `{fromType}/{toType}` pair in the
//! URL and carry one sub-record per link (create) or per source (archive).
//! The numeric association type ids the API expects come from
//! [`resolver::resolve_association_type`].

pub mod resolver;

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::HubSpotClient;
use crate::error::ClientResult;
use self::resolver::{AssociationCategory, AssociationTypeId};

/// A (category, type id) label attached to an association write.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationSpec {
    pub association_category: AssociationCategory,
    pub association_type_id: AssociationTypeId,
}

/// Object reference inside batch bodies.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectRef {
    pub id: String,
}

/// One record of a batch-create body.
#[derive(Debug, Clone, Serialize)]
pub struct BatchCreateInput {
    pub from: ObjectRef,
    pub to: ObjectRef,
    pub types: Vec<AssociationSpec>,
}

/// One record of a batch-archive body: one source, all its targets.
#[derive(Debug, Clone, Serialize)]
pub struct BatchArchiveInput {
    pub from: ObjectRef,
    pub to: Vec<ObjectRef>,
}

impl HubSpotClient {
    /// `PUT /crm/v4/objects/{fromType}/{fromId}/associations/{toType}/{toId}`
    pub async fn create_association(
        &self,
        from_type: &str,
        from_id: &str,
        to_type: &str,
        to_id: &str,
        types: &[AssociationSpec],
    ) -> ClientResult<Value> {
        self.put_json(
            &format!("/crm/v4/objects/{from_type}/{from_id}/associations/{to_type}/{to_id}"),
            types,
        )
        .await
    }

    /// `GET /crm/v4/objects/{fromType}/{fromId}/associations/{toType}`
    ///
    /// Returns one page plus the `paging.next.after` cursor when more
    /// results exist. Reads are idempotent; replaying a cursor returns the
    /// same page.
    pub async fn get_associations_page(
        &self,
        from_type: &str,
        from_id: &str,
        to_type: &str,
        limit: u32,
        after: Option<&str>,
    ) -> ClientResult<Value> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }
        self.get_json(
            &format!("/crm/v4/objects/{from_type}/{from_id}/associations/{to_type}"),
            &query,
        )
        .await
    }

    /// `DELETE /crm/v4/objects/{fromType}/{fromId}/associations/{toType}/{toId}`
    pub async fn archive_association(
        &self,
        from_type: &str,
        from_id: &str,
        to_type: &str,
        to_id: &str,
    ) -> ClientResult<()> {
        self.delete_json(&format!(
            "/crm/v4/objects/{from_type}/{from_id}/associations/{to_type}/{to_id}"
        ))
        .await?;
        Ok(())
    }

    /// `POST /crm/v4/associations/{fromType}/{toType}/batch/create`
    ///
    /// The remote result carries per-item success/failure detail; it is
    /// returned verbatim so partial failures stay visible to the caller.
    pub async fn batch_create_associations(
        &self,
        from_type: &str,
        to_type: &str,
        inputs: &[BatchCreateInput],
    ) -> ClientResult<Value> {
        self.post_json(
            &format!("/crm/v4/associations/{from_type}/{to_type}/batch/create"),
            &json!({ "inputs": inputs }),
        )
        .await
    }

    /// `POST /crm/v4/associations/{fromType}/{toType}/batch/archive`
    pub async fn batch_archive_associations(
        &self,
        from_type: &str,
        to_type: &str,
        inputs: &[BatchArchiveInput],
    ) -> ClientResult<()> {
        self.post_json(
            &format!("/crm/v4/associations/{from_type}/{to_type}/batch/archive"),
            &json!({ "inputs": inputs }),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_association_spec_wire_format() {
        let spec = AssociationSpec {
            association_category: AssociationCategory::HubspotDefined,
            association_type_id: 2,
        };
        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({ "associationCategory": "HUBSPOT_DEFINED", "associationTypeId": 2 })
        );
    }

    #[test]
    fn test_batch_create_input_shape() {
        let input = BatchCreateInput {
            from: ObjectRef { id: "1".into() },
            to: ObjectRef { id: "9".into() },
            types: vec![AssociationSpec {
                association_category: AssociationCategory::UserDefined,
                association_type_id: 305,
            }],
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "from": { "id": "1" },
                "to": { "id": "9" },
                "types": [
                    { "associationCategory": "USER_DEFINED", "associationTypeId": 305 }
                ]
            })
        );
    }

    #[test]
    fn test_batch_archive_input_groups_targets_under_one_source() {
        let input = BatchArchiveInput {
            from: ObjectRef { id: "1".into() },
            to: vec![ObjectRef { id: "9".into() }, ObjectRef { id: "12".into() }],
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "from": { "id": "1" }, "to": [ { "id": "9" }, { "id": "12" } ] })
        );
    }
}
