//! CRM objects (v3), properties (v3) and custom object schemas (v3).
//!
//! Every standard and custom record type goes through the same five
//! endpoints, keyed by the object type segment in the path, so the methods
//! here are generic over `object_type` and the per-object tools stay thin.

use std::collections::HashMap;

use futures::future::try_join_all;
use serde::Serialize;
use serde_json::{json, Value};

use crate::associations::{AssociationSpec, ObjectRef};
use crate::client::HubSpotClient;
use crate::error::ClientResult;
use crate::types::SearchRequest;

/// An association attached to a record at create time.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAssociation {
    pub to: ObjectRef,
    pub types: Vec<AssociationSpec>,
}

impl HubSpotClient {
    /// `GET /crm/v3/objects/{objectType}/{objectId}`
    pub async fn get_object(&self, object_type: &str, object_id: &str) -> ClientResult<Value> {
        self.get_json(&format!("/crm/v3/objects/{object_type}/{object_id}"), &[])
            .await
    }

    /// Fetch several records of one type concurrently.
    ///
    /// The result preserves the order of `object_ids`; any individual
    /// failure fails the whole read.
    pub async fn get_objects(
        &self,
        object_type: &str,
        object_ids: &[String],
    ) -> ClientResult<Vec<Value>> {
        try_join_all(
            object_ids
                .iter()
                .map(|id| self.get_object(object_type, id)),
        )
        .await
    }

    /// `POST /crm/v3/objects/{objectType}`
    pub async fn create_object(
        &self,
        object_type: &str,
        properties: &HashMap<String, String>,
    ) -> ClientResult<Value> {
        self.create_object_with_associations(object_type, properties, &[])
            .await
    }

    /// `POST /crm/v3/objects/{objectType}` with associations attached to the
    /// new record in the same request.
    pub async fn create_object_with_associations(
        &self,
        object_type: &str,
        properties: &HashMap<String, String>,
        associations: &[CreateAssociation],
    ) -> ClientResult<Value> {
        let body = json!({ "properties": properties, "associations": associations });
        self.post_json(&format!("/crm/v3/objects/{object_type}"), &body)
            .await
    }

    /// `PATCH /crm/v3/objects/{objectType}/{objectId}`
    pub async fn update_object(
        &self,
        object_type: &str,
        object_id: &str,
        properties: &HashMap<String, String>,
    ) -> ClientResult<Value> {
        let body = json!({ "properties": properties });
        self.patch_json(&format!("/crm/v3/objects/{object_type}/{object_id}"), &body)
            .await
    }

    /// `DELETE /crm/v3/objects/{objectType}/{objectId}` (archive)
    pub async fn archive_object(&self, object_type: &str, object_id: &str) -> ClientResult<()> {
        self.delete_json(&format!("/crm/v3/objects/{object_type}/{object_id}"))
            .await?;
        Ok(())
    }

    /// `POST /crm/v3/objects/{objectType}/search`
    pub async fn search_objects(
        &self,
        object_type: &str,
        request: &SearchRequest,
    ) -> ClientResult<Value> {
        self.post_json(&format!("/crm/v3/objects/{object_type}/search"), request)
            .await
    }

    /// `GET /crm/v3/properties/{objectType}`
    pub async fn list_properties(&self, object_type: &str) -> ClientResult<Value> {
        self.get_json(&format!("/crm/v3/properties/{object_type}"), &[])
            .await
    }

    /// `GET /crm/v3/properties/{objectType}/{propertyName}`
    pub async fn get_property(
        &self,
        object_type: &str,
        property_name: &str,
    ) -> ClientResult<Value> {
        self.get_json(
            &format!("/crm/v3/properties/{object_type}/{property_name}"),
            &[],
        )
        .await
    }

    /// `GET /crm-object-schemas/v3/schemas`
    pub async fn list_schemas(&self) -> ClientResult<Value> {
        self.get_json("/crm-object-schemas/v3/schemas", &[]).await
    }

    /// `GET /crm-object-schemas/v3/schemas/{objectType}`
    pub async fn get_schema(&self, object_type: &str) -> ClientResult<Value> {
        self.get_json(&format!("/crm-object-schemas/v3/schemas/{object_type}"), &[])
            .await
    }
}
