//! Parameter structs for all MCP tools.
//!
//! Record-shaped tools share the generic structs at the top; tools with a
//! typed property surface (engagements) or extra routing fields (custom
//! objects, associations, timeline events) get their own structs below.

use std::collections::HashMap;

use hubspot_client::{AssociationCategory, AssociationTypeId, FilterOperator};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ── shared record tools ──

/// Parameters for tools addressing one record by id.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ObjectIdParams {
    /// CRM object id.
    #[schemars(description = "The ID of the record")]
    pub id: String,
}

/// Parameters for tools fetching several records by id.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ObjectIdsParams {
    /// CRM object ids, fetched concurrently; results keep this order.
    #[schemars(description = "The IDs of the records to fetch")]
    pub ids: Vec<String>,
}

/// Parameters for creating a record from a free-form property map.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateRecordParams {
    /// Property name/value pairs for the new record.
    #[schemars(description = "Property name/value pairs for the new record")]
    pub properties: HashMap<String, String>,
}

/// Parameters for updating a record from a free-form property map.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateRecordParams {
    /// CRM object id.
    #[schemars(description = "The ID of the record to update")]
    pub id: String,
    /// Property name/value pairs to overwrite.
    #[schemars(description = "Property name/value pairs to overwrite")]
    pub properties: HashMap<String, String>,
}

/// Parameters for the single-filter search every search tool uses.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Value to match.
    #[schemars(description = "The value to match against the property")]
    pub search_term: String,
    /// Property the filter applies to.
    #[schemars(description = "The property name to filter on (e.g. 'email', 'dealname')")]
    pub property_name: String,
    /// Comparison operator.
    #[schemars(description = "Filter operator (EQ, NEQ, CONTAINS_TOKEN, ...)")]
    pub operator: FilterOperator,
    /// Maximum number of results (default 10).
    #[schemars(description = "Maximum number of results to return (default 10)")]
    pub limit: Option<u32>,
    /// Paging cursor from a previous page's `paging.next.after`.
    #[schemars(description = "Paging cursor token from a previous response")]
    pub after: Option<String>,
    /// Properties to include on each result.
    #[schemars(description = "Properties to include on each result")]
    pub properties: Option<Vec<String>>,
}

/// Parameters for fetching one property definition.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PropertyNameParams {
    /// Property name.
    #[schemars(description = "The name of the property")]
    pub property_name: String,
}

// ── custom objects ──

/// Parameters naming a custom object type.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ObjectTypeParams {
    /// Fully qualified custom object type (e.g. 'p12345_pets').
    #[schemars(description = "The custom object type (fully qualified name or object type id)")]
    pub object_type: String,
}

/// Parameters addressing one custom object.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomObjectIdParams {
    /// Custom object type.
    #[schemars(description = "The custom object type")]
    pub object_type: String,
    /// CRM object id.
    #[schemars(description = "The ID of the custom object")]
    pub object_id: String,
}

/// Parameters fetching several custom objects.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomObjectIdsParams {
    /// Custom object type.
    #[schemars(description = "The custom object type")]
    pub object_type: String,
    /// CRM object ids, fetched concurrently; results keep this order.
    #[schemars(description = "The IDs of the custom objects to fetch")]
    pub object_ids: Vec<String>,
}

/// Parameters for creating a custom object.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCustomObjectParams {
    /// Custom object type.
    #[schemars(description = "The custom object type")]
    pub object_type: String,
    /// Property name/value pairs for the new object.
    #[schemars(description = "Property name/value pairs for the new object")]
    pub properties: HashMap<String, String>,
}

/// Parameters for updating a custom object.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCustomObjectParams {
    /// Custom object type.
    #[schemars(description = "The custom object type")]
    pub object_type: String,
    /// CRM object id.
    #[schemars(description = "The ID of the custom object to update")]
    pub object_id: String,
    /// Property name/value pairs to overwrite.
    #[schemars(description = "Property name/value pairs to overwrite")]
    pub properties: HashMap<String, String>,
}

/// Parameters for searching custom objects.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchCustomObjectsParams {
    /// Custom object type.
    #[schemars(description = "The custom object type")]
    pub object_type: String,
    /// Value to match.
    #[schemars(description = "The value to match against the property")]
    pub search_term: String,
    /// Property the filter applies to.
    #[schemars(description = "The property name to filter on")]
    pub property_name: String,
    /// Comparison operator.
    #[schemars(description = "Filter operator (EQ, NEQ, CONTAINS_TOKEN, ...)")]
    pub operator: FilterOperator,
    /// Maximum number of results (default 10).
    #[schemars(description = "Maximum number of results to return (default 10)")]
    pub limit: Option<u32>,
    /// Paging cursor from a previous page.
    #[schemars(description = "Paging cursor token from a previous response")]
    pub after: Option<String>,
    /// Properties to include on each result.
    #[schemars(description = "Properties to include on each result")]
    pub properties: Option<Vec<String>>,
}

/// Parameters for fetching one custom object property definition.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomObjectPropertyParams {
    /// Custom object type.
    #[schemars(description = "The custom object type")]
    pub object_type: String,
    /// Property name.
    #[schemars(description = "The name of the property")]
    pub property_name: String,
}

// ── associations ──

/// Parameters for `hubspot-create-association`, and one item of the batch
/// create input.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAssociationParams {
    /// Source object type.
    #[schemars(description = "The type of the source object (e.g. 'contacts', 'companies', 'deals')")]
    pub from_object_type: String,
    /// Source object id.
    #[schemars(description = "The ID of the source object")]
    pub from_object_id: String,
    /// Target object type.
    #[schemars(description = "The type of the target object (e.g. 'contacts', 'companies', 'deals')")]
    pub to_object_type: String,
    /// Target object id.
    #[schemars(description = "The ID of the target object")]
    pub to_object_id: String,
    /// Who defined the association semantic.
    #[schemars(description = "The category of the association (HUBSPOT_DEFINED or USER_DEFINED)")]
    pub association_category: AssociationCategory,
}

/// Parameters for `hubspot-get-associations`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAssociationsParams {
    /// Source object type.
    #[schemars(description = "The type of the source object")]
    pub from_object_type: String,
    /// Source object id.
    #[schemars(description = "The ID of the source object")]
    pub from_object_id: String,
    /// Target object type.
    #[schemars(description = "The type of the target object")]
    pub to_object_type: String,
    /// Page size (default 100).
    #[schemars(description = "Maximum number of results to return (default 100)")]
    pub limit: Option<u32>,
    /// Paging cursor from a previous page's `paging.next.after`.
    #[schemars(description = "Paging cursor token from a previous response")]
    pub after: Option<String>,
}

/// Parameters for `hubspot-delete-association`, and one item of the batch
/// delete input.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteAssociationParams {
    /// Source object type.
    #[schemars(description = "The type of the source object")]
    pub from_object_type: String,
    /// Source object id.
    #[schemars(description = "The ID of the source object")]
    pub from_object_id: String,
    /// Target object type.
    #[schemars(description = "The type of the target object")]
    pub to_object_type: String,
    /// Target object id.
    #[schemars(description = "The ID of the target object")]
    pub to_object_id: String,
}

/// Parameters for `hubspot-batch-create-associations`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BatchCreateAssociationsParams {
    /// Associations to create; all items must share one type pair.
    #[schemars(description = "Array of association inputs to create (one type pair per batch)")]
    pub inputs: Vec<CreateAssociationParams>,
}

/// Parameters for `hubspot-batch-delete-associations`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BatchDeleteAssociationsParams {
    /// Associations to delete; all items must share one type pair.
    #[schemars(description = "Array of association inputs to delete (one type pair per batch)")]
    pub inputs: Vec<DeleteAssociationParams>,
}

// ── quotes ──

/// Parameters for the fixed quote association page reads.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct QuoteAssociationPageParams {
    /// Quote id.
    #[schemars(description = "The ID of the quote")]
    pub quote_id: String,
    /// Page size (default 10).
    #[schemars(description = "Maximum number of results to return (default 10)")]
    pub limit: Option<u32>,
    /// Paging cursor from a previous page.
    #[schemars(description = "Paging cursor token from a previous response")]
    pub after: Option<String>,
}

/// Parameters for `hubspot-create-quote-association`.
///
/// Unlike the generic association tool, the caller may pin the association
/// type id directly; omitted ids fall back to the generic default (1).
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateQuoteAssociationParams {
    /// Quote id.
    #[schemars(description = "The ID of the quote")]
    pub quote_id: String,
    /// Target object type (standard or custom).
    #[schemars(description = "The type of the object to associate the quote with")]
    pub to_object_type: String,
    /// Target object id.
    #[schemars(description = "The ID of the object to associate the quote with")]
    pub to_object_id: String,
    /// Explicit association type id (defaults to the generic id 1).
    #[schemars(description = "Association type id (defaults to 1, the generic association)")]
    pub association_type_id: Option<AssociationTypeId>,
}

// ── engagements ──

/// An association attached while creating an engagement record.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InlineAssociationParams {
    /// Target object type.
    #[schemars(description = "The type of object to associate with (e.g. 'contacts', 'companies', 'deals')")]
    pub to_object_type: String,
    /// Target object id.
    #[schemars(description = "The ID of the object to associate with")]
    pub to_object_id: String,
    /// Association type id (defaults to 1, the generic association).
    #[schemars(description = "The type of association (defaults to 1 for standard association)")]
    pub association_type_id: Option<AssociationTypeId>,
}

/// Typed properties for `hubspot-create-call`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CallProperties {
    pub hs_call_title: String,
    pub hs_call_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_call_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_call_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_call_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
}

/// Parameters for `hubspot-create-call`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCallParams {
    pub properties: CallProperties,
}

/// Typed properties for `hubspot-create-communication`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommunicationProperties {
    pub hs_communication_type: String,
    pub hs_communication_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_communication_status: Option<String>,
}

/// Parameters for `hubspot-create-communication`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCommunicationParams {
    pub properties: CommunicationProperties,
}

/// Typed properties for `hubspot-update-communication`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommunicationUpdateProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_communication_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_communication_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_communication_status: Option<String>,
}

/// Parameters for `hubspot-update-communication`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCommunicationParams {
    /// Communication id.
    #[schemars(description = "The ID of the communication to update")]
    pub id: String,
    pub properties: CommunicationUpdateProperties,
}

/// Typed properties for `hubspot-create-email`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmailProperties {
    pub hs_email_subject: String,
    pub hs_email_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_status: Option<String>,
    /// Defaults to "EMAIL" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
}

/// Parameters for `hubspot-create-email`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateEmailParams {
    pub properties: EmailProperties,
}

/// Typed properties for `hubspot-update-email`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmailUpdateProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_email_direction: Option<String>,
}

/// Parameters for `hubspot-update-email`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateEmailParams {
    /// Email engagement id.
    #[schemars(description = "The ID of the email to update")]
    pub id: String,
    pub properties: EmailUpdateProperties,
}

/// Typed properties for `hubspot-create-meeting`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MeetingProperties {
    pub hs_meeting_title: String,
    pub hs_meeting_start_time: String,
    pub hs_meeting_end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_meeting_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_communication_channel_type: Option<String>,
}

/// Parameters for `hubspot-create-meeting`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateMeetingParams {
    pub properties: MeetingProperties,
}

/// Typed properties for `hubspot-update-meeting`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MeetingUpdateProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_meeting_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_meeting_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_meeting_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_meeting_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_communication_channel_type: Option<String>,
}

/// Parameters for `hubspot-update-meeting`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateMeetingParams {
    /// Meeting id.
    #[schemars(description = "The ID of the meeting to update")]
    pub id: String,
    pub properties: MeetingUpdateProperties,
}

/// Typed properties for `hubspot-create-note`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NoteProperties {
    pub hs_note_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_note_status: Option<String>,
}

/// Parameters for `hubspot-create-note`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateNoteParams {
    pub properties: NoteProperties,
    /// Objects to associate the new note with.
    #[schemars(description = "Optional list of objects to associate this note with")]
    pub associations: Option<Vec<InlineAssociationParams>>,
}

/// Typed properties for `hubspot-update-note`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NoteUpdateProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_note_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_note_status: Option<String>,
}

/// Parameters for `hubspot-update-note`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateNoteParams {
    /// Note id.
    #[schemars(description = "The ID of the note to update")]
    pub id: String,
    pub properties: NoteUpdateProperties,
}

/// Typed properties for `hubspot-create-postal-mail`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PostalMailProperties {
    pub hs_postal_mail_subject: String,
    pub hs_postal_mail_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_postal_mail_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
}

/// Parameters for `hubspot-create-postal-mail`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreatePostalMailParams {
    pub properties: PostalMailProperties,
}

/// Typed properties for `hubspot-create-task`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskProperties {
    pub hs_task_subject: String,
    pub hs_task_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_task_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_task_priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_task_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_timestamp: Option<String>,
}

/// Parameters for `hubspot-create-task`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    pub properties: TaskProperties,
}

/// Typed properties for `hubspot-create-tax`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaxProperties {
    pub hs_tax_name: String,
    pub hs_tax_rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_tax_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_tax_status: Option<String>,
}

/// Parameters for `hubspot-create-tax`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTaxParams {
    pub properties: TaxProperties,
    /// Objects to associate the new tax with.
    #[schemars(description = "Optional list of objects to associate this tax with")]
    pub associations: Option<Vec<InlineAssociationParams>>,
}

/// Typed properties for `hubspot-create-lead`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LeadProperties {
    pub hs_lead_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lead_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_lead_owner: Option<String>,
}

/// Parameters for `hubspot-create-lead`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLeadParams {
    pub properties: LeadProperties,
    /// Objects to associate the new lead with.
    #[schemars(description = "Optional list of objects to associate this lead with")]
    pub associations: Option<Vec<InlineAssociationParams>>,
}

// ── timeline events ──

/// Parameters for `hubspot-get-timeline-event`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTimelineEventParams {
    /// Event template id.
    #[schemars(description = "The event template ID the event was created from")]
    pub event_template_id: String,
    /// Event id.
    #[schemars(description = "The ID of the timeline event")]
    pub event_id: String,
}

/// Parameters for `hubspot-get-timeline-events`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTimelineEventsParams {
    /// Event template id.
    #[schemars(description = "The event template ID the events were created from")]
    pub event_template_id: String,
    /// Event ids, fetched concurrently; results keep this order.
    #[schemars(description = "The IDs of the timeline events to fetch")]
    pub event_ids: Vec<String>,
}

/// Parameters for `hubspot-create-timeline-event`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTimelineEventParams {
    /// Event template id.
    #[schemars(description = "The event template ID to instantiate")]
    pub event_template_id: String,
    /// CRM object the event lands on.
    #[schemars(description = "The ID of the CRM object the event is attached to")]
    pub object_id: String,
    /// Token name/value pairs for the template.
    #[schemars(description = "Token name/value pairs filling the event template")]
    pub tokens: HashMap<String, String>,
}

/// Parameters for `hubspot-get-timeline-event-templates`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TimelineEventTemplatesParams {
    /// Private app id owning the templates.
    #[schemars(description = "The app ID the event templates belong to")]
    pub app_id: u64,
}

/// Parameters for `hubspot-get-timeline-event-template`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTimelineEventTemplateParams {
    /// Event template id.
    #[schemars(description = "The ID of the event template")]
    pub event_template_id: String,
    /// Private app id owning the template.
    #[schemars(description = "The app ID the event template belongs to")]
    pub app_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_association_category_deserializes_from_wire_names() {
        let params: CreateAssociationParams = serde_json::from_value(serde_json::json!({
            "from_object_type": "companies",
            "from_object_id": "1",
            "to_object_type": "contacts",
            "to_object_id": "2",
            "association_category": "HUBSPOT_DEFINED",
        }))
        .unwrap();
        assert_eq!(
            params.association_category,
            AssociationCategory::HubspotDefined
        );
    }

    #[test]
    fn test_quote_association_type_id_is_optional() {
        let params: CreateQuoteAssociationParams = serde_json::from_value(serde_json::json!({
            "quote_id": "q1",
            "to_object_type": "line_items",
            "to_object_id": "li1",
        }))
        .unwrap();
        assert_eq!(params.association_type_id, None);
    }

    #[test]
    fn test_engagement_properties_reject_missing_required_fields() {
        let result = serde_json::from_value::<CallProperties>(serde_json::json!({
            "hs_call_title": "intro call"
        }));
        assert!(result.is_err(), "hs_call_body is required");
    }

    #[test]
    fn test_search_params_optional_fields_default_to_none() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({
            "search_term": "acme",
            "property_name": "name",
            "operator": "CONTAINS_TOKEN",
        }))
        .unwrap();
        assert_eq!(params.limit, None);
        assert_eq!(params.after, None);
        assert_eq!(params.properties, None);
    }
}
