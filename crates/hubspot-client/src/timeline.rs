//! Timeline events (v3) and integrator event templates.
//!
//! Timeline events are append-only: the remote API has no delete and no
//! search for them, which is why the MCP layer exposes those operations as
//! documented stubs instead of calls through here.

use std::collections::HashMap;

use futures::future::try_join_all;
use serde_json::{json, Value};

use crate::client::HubSpotClient;
use crate::error::ClientResult;

impl HubSpotClient {
    /// `GET /crm/v3/timeline/events/{eventTemplateId}/{eventId}`
    pub async fn get_timeline_event(
        &self,
        event_template_id: &str,
        event_id: &str,
    ) -> ClientResult<Value> {
        self.get_json(
            &format!("/crm/v3/timeline/events/{event_template_id}/{event_id}"),
            &[],
        )
        .await
    }

    /// Fetch several events of one template concurrently, preserving the
    /// order of `event_ids`.
    pub async fn get_timeline_events(
        &self,
        event_template_id: &str,
        event_ids: &[String],
    ) -> ClientResult<Vec<Value>> {
        try_join_all(
            event_ids
                .iter()
                .map(|id| self.get_timeline_event(event_template_id, id)),
        )
        .await
    }

    /// `POST /crm/v3/timeline/events`
    pub async fn create_timeline_event(
        &self,
        event_template_id: &str,
        object_id: &str,
        tokens: &HashMap<String, String>,
    ) -> ClientResult<Value> {
        let body = json!({
            "eventTemplateId": event_template_id,
            "objectId": object_id,
            "tokens": tokens,
        });
        self.post_json("/crm/v3/timeline/events", &body).await
    }

    /// `GET /integrators/timeline/v3/{appId}/event-templates`
    pub async fn list_event_templates(&self, app_id: u64) -> ClientResult<Value> {
        self.get_json(&format!("/integrators/timeline/v3/{app_id}/event-templates"), &[])
            .await
    }

    /// `GET /integrators/timeline/v3/{appId}/event-templates/{eventTemplateId}`
    pub async fn get_event_template(
        &self,
        app_id: u64,
        event_template_id: &str,
    ) -> ClientResult<Value> {
        self.get_json(
            &format!("/integrators/timeline/v3/{app_id}/event-templates/{event_template_id}"),
            &[],
        )
        .await
    }
}
