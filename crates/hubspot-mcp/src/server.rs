//! MCP ServerHandler implementation for HubSpot.
//!
//! One tool per operation of the HubSpot CRM surface, grouped the way the
//! API groups them:
//!
//! **Records** - contacts, companies, deals, tickets: get / get-many /
//! create / update / delete / search plus property metadata.
//!
//! **Commerce** - products, line items, quotes (including the fixed quote
//! association reads and the explicit-id quote association write).
//!
//! **Engagements** - calls, communications, emails, meetings, notes, tasks,
//! postal mail, taxes, leads, feedback submissions, goals.
//!
//! **Custom objects** - schema discovery plus the generic record operations
//! for caller-supplied object types.
//!
//! **Timeline** - events, event templates and their property metadata.
//!
//! **Associations** - typed directional links between any two records:
//! create / list / delete and the pair-scoped batch create / batch delete.
//! Association type ids are resolved from the ordered object type pair; an
//! unresolvable pair is reported as `unresolved_association_type` before
//! any remote call is made.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use hubspot_client::associations::{BatchArchiveInput, BatchCreateInput, ObjectRef};
use hubspot_client::{
    resolve_association_type, AssociationCategory, AssociationSpec, ClientResult,
    CreateAssociation, HubSpotClient, SearchRequest, DEFAULT_ASSOCIATION_TYPE_ID,
};

use crate::tools::helpers::{
    ensure_timestamp, error_json, json_text, properties_map, require_known_object_type,
    require_non_empty,
};
use crate::tools::*;

// Default search projections per engagement family, matching what the
// HubSpot UI shows for each record card.
const CALL_SEARCH_PROPERTIES: &[&str] = &[
    "hs_call_title",
    "hs_call_body",
    "hs_call_duration",
    "hs_call_direction",
    "hs_call_status",
    "hs_timestamp",
];
const COMMUNICATION_SEARCH_PROPERTIES: &[&str] = &[
    "hs_communication_type",
    "hs_communication_body",
    "hs_communication_status",
    "hs_communication_channel_type",
    "hs_timestamp",
];
const EMAIL_SEARCH_PROPERTIES: &[&str] = &[
    "hs_email_subject",
    "hs_email_body",
    "hs_email_status",
    "hs_email_direction",
    "hs_timestamp",
];
const MEETING_SEARCH_PROPERTIES: &[&str] = &[
    "hs_meeting_title",
    "hs_meeting_start_time",
    "hs_meeting_end_time",
    "hs_meeting_location",
    "hs_timestamp",
];
const POSTAL_MAIL_SEARCH_PROPERTIES: &[&str] = &[
    "hs_postal_mail_subject",
    "hs_postal_mail_body",
    "hs_postal_mail_status",
    "hs_postal_mail_sent_date",
    "hs_timestamp",
];
const TASK_SEARCH_PROPERTIES: &[&str] = &[
    "hs_task_subject",
    "hs_task_body",
    "hs_task_status",
    "hs_task_priority",
    "hs_task_due_date",
    "hs_timestamp",
];
const TAX_SEARCH_PROPERTIES: &[&str] = &[
    "hs_tax_name",
    "hs_tax_rate",
    "hs_tax_type",
    "hs_tax_status",
    "hs_timestamp",
];
const FEEDBACK_SEARCH_PROPERTIES: &[&str] = &[
    "hs_feedback_submission_status",
    "hs_feedback_submission_type",
    "hs_feedback_submission_rating",
    "hs_timestamp",
];
const GOAL_SEARCH_PROPERTIES: &[&str] = &[
    "hs_goal_name",
    "hs_goal_status",
    "hs_goal_type",
    "hs_goal_target",
    "hs_timestamp",
];

/// HubSpot MCP server handler.
#[derive(Debug, Clone)]
pub struct HubSpotMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<HubSpotClient>,
}

impl HubSpotMcpServer {
    /// Create a server around an existing client.
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client: Arc::new(client),
        }
    }

    /// Create a server configured from the environment.
    pub fn from_env() -> ClientResult<Self> {
        Ok(Self::new(HubSpotClient::from_env()?))
    }

    // ── generic result helpers shared by the uniform tools ──

    async fn get_object_result(&self, object_type: &str, object_id: &str) -> String {
        if let Err(e) = require_non_empty("id", object_id) {
            return e;
        }
        match self.client.get_object(object_type, object_id).await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn get_objects_result(&self, object_type: &str, object_ids: &[String]) -> String {
        if object_ids.is_empty() {
            return error_json("validation_error", "ids must not be empty");
        }
        match self.client.get_objects(object_type, object_ids).await {
            Ok(values) => json_text(&values),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn create_record_result(
        &self,
        object_type: &str,
        properties: &HashMap<String, String>,
    ) -> String {
        match self.client.create_object(object_type, properties).await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn update_record_result(
        &self,
        object_type: &str,
        object_id: &str,
        properties: &HashMap<String, String>,
    ) -> String {
        if let Err(e) = require_non_empty("id", object_id) {
            return e;
        }
        match self
            .client
            .update_object(object_type, object_id, properties)
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn delete_record_result(
        &self,
        object_type: &str,
        label: &str,
        object_id: &str,
    ) -> String {
        if let Err(e) = require_non_empty("id", object_id) {
            return e;
        }
        match self.client.archive_object(object_type, object_id).await {
            Ok(()) => format!("{label} deleted successfully"),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn search_result(
        &self,
        object_type: &str,
        params: SearchParams,
        default_properties: Option<&[&str]>,
    ) -> String {
        let properties = params.properties.or_else(|| {
            default_properties.map(|names| names.iter().map(|p| p.to_string()).collect())
        });
        let request = SearchRequest::single_filter(
            params.property_name,
            params.operator,
            params.search_term,
            params.limit.unwrap_or(10),
            params.after,
            properties,
        );
        match self.client.search_objects(object_type, &request).await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn list_properties_result(&self, object_type: &str) -> String {
        match self.client.list_properties(object_type).await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn get_property_result(&self, object_type: &str, property_name: &str) -> String {
        if let Err(e) = require_non_empty("property_name", property_name) {
            return e;
        }
        match self.client.get_property(object_type, property_name).await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn create_engagement_result(
        &self,
        object_type: &str,
        mut properties: HashMap<String, String>,
        with_timestamp: bool,
        associations: Option<Vec<InlineAssociationParams>>,
    ) -> String {
        if with_timestamp {
            ensure_timestamp(&mut properties);
        }
        let associations = inline_association_specs(associations.as_deref().unwrap_or(&[]));
        match self
            .client
            .create_object_with_associations(object_type, &properties, &associations)
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    async fn quote_associations_result(
        &self,
        params: QuoteAssociationPageParams,
        to_object_type: &str,
    ) -> String {
        if let Err(e) = require_non_empty("quote_id", &params.quote_id) {
            return e;
        }
        match self
            .client
            .get_associations_page(
                "quotes",
                &params.quote_id,
                to_object_type,
                params.limit.unwrap_or(10),
                params.after.as_deref(),
            )
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HubSpotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "hubspot-mcp".to_string(),
                title: Some("HubSpot MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing HubSpot CRM records, searches, property metadata, \
                     timeline events and typed associations"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "HubSpot CRM tools. Record tools follow one shape per object type: \
                 hubspot-get-<object>, hubspot-get-<object>s (many by id), hubspot-create-<object>, \
                 hubspot-update-<object>, hubspot-delete-<object>, hubspot-search-<object>s, and \
                 hubspot-get-<object>-properties / hubspot-get-<object>-property for metadata.\n\
                 Searches take one property filter (property_name + operator + search_term) and \
                 return a page plus a paging cursor; pass the cursor back via 'after'.\n\
                 Associations: hubspot-create-association / hubspot-get-associations / \
                 hubspot-delete-association link two records by type and id. The association \
                 type id is resolved automatically from the ordered type pair; an unresolvable \
                 pair fails with unresolved_association_type. Batch variants \
                 (hubspot-batch-create-associations, hubspot-batch-delete-associations) require \
                 every item to share one from/to type pair. Quote associations can pin an \
                 explicit association_type_id via hubspot-create-quote-association.\n\
                 Custom objects use hubspot-get-custom-object-schemas to discover types, then \
                 the hubspot-*-custom-object tools with object_type set.\n\
                 All results are raw HubSpot API payloads serialized as JSON; failures return \
                 {\"error\", \"message\"} objects instead of raising."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl HubSpotMcpServer {
    // ── associations ──

    /// Create one typed association, resolving the association type id from
    /// the ordered object type pair.
    #[tool(
        name = "hubspot-create-association",
        description = "Create a new association between two objects in HubSpot. The association type id is resolved from the (from, to) object type pair."
    )]
    pub async fn create_association(
        &self,
        Parameters(params): Parameters<CreateAssociationParams>,
    ) -> String {
        if let Err(e) = require_known_object_type("from_object_type", &params.from_object_type) {
            return e;
        }
        if let Err(e) = require_known_object_type("to_object_type", &params.to_object_type) {
            return e;
        }
        if let Err(e) = require_non_empty("from_object_id", &params.from_object_id) {
            return e;
        }
        if let Err(e) = require_non_empty("to_object_id", &params.to_object_id) {
            return e;
        }

        let type_id =
            match resolve_association_type(&params.from_object_type, &params.to_object_type) {
                Ok(id) => id,
                Err(e) => return error_json("unresolved_association_type", &e.to_string()),
            };

        let types = [AssociationSpec {
            association_category: params.association_category,
            association_type_id: type_id,
        }];
        match self
            .client
            .create_association(
                &params.from_object_type,
                &params.from_object_id,
                &params.to_object_type,
                &params.to_object_id,
                &types,
            )
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    /// Read one page of associations from a source object toward a target
    /// type. Reads are idempotent; replaying a cursor returns the same page.
    #[tool(
        name = "hubspot-get-associations",
        description = "Get all associations for a specific object in HubSpot, one page at a time (default page size 100)."
    )]
    pub async fn get_associations(
        &self,
        Parameters(params): Parameters<GetAssociationsParams>,
    ) -> String {
        if let Err(e) = require_known_object_type("from_object_type", &params.from_object_type) {
            return e;
        }
        if let Err(e) = require_known_object_type("to_object_type", &params.to_object_type) {
            return e;
        }
        if let Err(e) = require_non_empty("from_object_id", &params.from_object_id) {
            return e;
        }

        match self
            .client
            .get_associations_page(
                &params.from_object_type,
                &params.from_object_id,
                &params.to_object_type,
                params.limit.unwrap_or(100),
                params.after.as_deref(),
            )
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    /// Archive one association.
    #[tool(
        name = "hubspot-delete-association",
        description = "Delete an association between two objects in HubSpot"
    )]
    pub async fn delete_association(
        &self,
        Parameters(params): Parameters<DeleteAssociationParams>,
    ) -> String {
        if let Err(e) = validate_association_item(&params, None) {
            return e;
        }

        match self
            .client
            .archive_association(
                &params.from_object_type,
                &params.from_object_id,
                &params.to_object_type,
                &params.to_object_id,
            )
            .await
        {
            Ok(()) => "Association deleted successfully".to_string(),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    /// Create many associations in one pair-scoped remote call.
    ///
    /// Type ids are resolved per item before anything goes on the wire; a
    /// single unresolvable item aborts the batch and names the item, so no
    /// item is ever sent with another item's id.
    #[tool(
        name = "hubspot-batch-create-associations",
        description = "Create multiple associations in a single request. All items must share one (from, to) object type pair."
    )]
    pub async fn batch_create_associations(
        &self,
        Parameters(params): Parameters<BatchCreateAssociationsParams>,
    ) -> String {
        let Some(first) = params.inputs.first() else {
            return error_json("validation_error", "inputs must not be empty");
        };
        let (from_type, to_type) = (first.from_object_type.clone(), first.to_object_type.clone());

        let mut batch = Vec::with_capacity(params.inputs.len());
        for (index, input) in params.inputs.iter().enumerate() {
            if let Err(e) = require_known_object_type(
                &format!("inputs[{index}].from_object_type"),
                &input.from_object_type,
            ) {
                return e;
            }
            if let Err(e) = require_known_object_type(
                &format!("inputs[{index}].to_object_type"),
                &input.to_object_type,
            ) {
                return e;
            }
            if input.from_object_type != from_type || input.to_object_type != to_type {
                return error_json(
                    "validation_error",
                    &format!(
                        "inputs[{index}] pairs {} -> {} but the batch is scoped to {} -> {}",
                        input.from_object_type, input.to_object_type, from_type, to_type
                    ),
                );
            }
            if let Err(e) =
                require_non_empty(&format!("inputs[{index}].from_object_id"), &input.from_object_id)
            {
                return e;
            }
            if let Err(e) =
                require_non_empty(&format!("inputs[{index}].to_object_id"), &input.to_object_id)
            {
                return e;
            }

            // Resolved independently per item: a failure here names the item
            // instead of corrupting the rest of the batch.
            let type_id =
                match resolve_association_type(&input.from_object_type, &input.to_object_type) {
                    Ok(id) => id,
                    Err(e) => {
                        return error_json(
                            "unresolved_association_type",
                            &format!("inputs[{index}]: {e}"),
                        )
                    }
                };

            batch.push(BatchCreateInput {
                from: ObjectRef {
                    id: input.from_object_id.clone(),
                },
                to: ObjectRef {
                    id: input.to_object_id.clone(),
                },
                types: vec![AssociationSpec {
                    association_category: input.association_category,
                    association_type_id: type_id,
                }],
            });
        }

        match self
            .client
            .batch_create_associations(&from_type, &to_type, &batch)
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    /// Archive many associations in one pair-scoped remote call, grouping
    /// targets under each source id.
    #[tool(
        name = "hubspot-batch-delete-associations",
        description = "Delete multiple associations in a single request. All items must share one (from, to) object type pair."
    )]
    pub async fn batch_delete_associations(
        &self,
        Parameters(params): Parameters<BatchDeleteAssociationsParams>,
    ) -> String {
        let Some(first) = params.inputs.first() else {
            return error_json("validation_error", "inputs must not be empty");
        };
        let (from_type, to_type) = (first.from_object_type.clone(), first.to_object_type.clone());

        for (index, input) in params.inputs.iter().enumerate() {
            if let Err(e) = validate_association_item(input, Some(index)) {
                return e;
            }
            if input.from_object_type != from_type || input.to_object_type != to_type {
                return error_json(
                    "validation_error",
                    &format!(
                        "inputs[{index}] pairs {} -> {} but the batch is scoped to {} -> {}",
                        input.from_object_type, input.to_object_type, from_type, to_type
                    ),
                );
            }
        }

        let batch = group_archive_inputs(&params.inputs);
        match self
            .client
            .batch_archive_associations(&from_type, &to_type, &batch)
            .await
        {
            Ok(()) => "Associations deleted successfully".to_string(),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    // ── contacts ──

    #[tool(
        name = "hubspot-get-contact",
        description = "Get a specific contact by ID from HubSpot"
    )]
    pub async fn get_contact(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("contacts", &params.id).await
    }

    #[tool(
        name = "hubspot-get-contacts",
        description = "Get all contacts by ID from HubSpot"
    )]
    pub async fn get_contacts(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("contacts", &params.ids).await
    }

    #[tool(
        name = "hubspot-create-contact",
        description = "Create a new contact in HubSpot"
    )]
    pub async fn create_contact(
        &self,
        Parameters(params): Parameters<CreateRecordParams>,
    ) -> String {
        self.create_record_result("contacts", &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-update-contact",
        description = "Update an existing contact in HubSpot"
    )]
    pub async fn update_contact(
        &self,
        Parameters(params): Parameters<UpdateRecordParams>,
    ) -> String {
        self.update_record_result("contacts", &params.id, &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-contact",
        description = "Delete a contact from HubSpot"
    )]
    pub async fn delete_contact(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("contacts", "Contact", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-contacts",
        description = "Search contacts in HubSpot using various criteria"
    )]
    pub async fn search_contacts(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("contacts", params, None).await
    }

    #[tool(
        name = "hubspot-get-contact-properties",
        description = "Get all contact properties from HubSpot"
    )]
    pub async fn get_contact_properties(&self) -> String {
        self.list_properties_result("contacts").await
    }

    #[tool(
        name = "hubspot-get-contact-property",
        description = "Get a specific contact property from HubSpot"
    )]
    pub async fn get_contact_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("contacts", &params.property_name)
            .await
    }

    // ── companies ──

    #[tool(
        name = "hubspot-get-company",
        description = "Get a specific company by ID from HubSpot"
    )]
    pub async fn get_company(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("companies", &params.id).await
    }

    #[tool(
        name = "hubspot-get-companies",
        description = "Get all companies by ID from HubSpot"
    )]
    pub async fn get_companies(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("companies", &params.ids).await
    }

    #[tool(
        name = "hubspot-create-company",
        description = "Create a new company in HubSpot"
    )]
    pub async fn create_company(
        &self,
        Parameters(params): Parameters<CreateRecordParams>,
    ) -> String {
        self.create_record_result("companies", &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-update-company",
        description = "Update an existing company in HubSpot"
    )]
    pub async fn update_company(
        &self,
        Parameters(params): Parameters<UpdateRecordParams>,
    ) -> String {
        self.update_record_result("companies", &params.id, &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-company",
        description = "Delete a company from HubSpot"
    )]
    pub async fn delete_company(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("companies", "Company", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-companies",
        description = "Search companies in HubSpot using various criteria"
    )]
    pub async fn search_companies(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("companies", params, None).await
    }

    #[tool(
        name = "hubspot-get-company-properties",
        description = "Get all company properties from HubSpot"
    )]
    pub async fn get_company_properties(&self) -> String {
        self.list_properties_result("companies").await
    }

    #[tool(
        name = "hubspot-get-company-property",
        description = "Get a specific company property from HubSpot"
    )]
    pub async fn get_company_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("companies", &params.property_name)
            .await
    }

    // ── deals ──

    #[tool(
        name = "hubspot-get-deal",
        description = "Get a specific deal by ID from HubSpot"
    )]
    pub async fn get_deal(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("deals", &params.id).await
    }

    #[tool(name = "hubspot-get-deals", description = "Get all deals by ID from HubSpot")]
    pub async fn get_deals(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("deals", &params.ids).await
    }

    #[tool(name = "hubspot-create-deal", description = "Create a new deal in HubSpot")]
    pub async fn create_deal(&self, Parameters(params): Parameters<CreateRecordParams>) -> String {
        self.create_record_result("deals", &params.properties).await
    }

    #[tool(
        name = "hubspot-update-deal",
        description = "Update an existing deal in HubSpot"
    )]
    pub async fn update_deal(&self, Parameters(params): Parameters<UpdateRecordParams>) -> String {
        self.update_record_result("deals", &params.id, &params.properties)
            .await
    }

    #[tool(name = "hubspot-delete-deal", description = "Delete a deal from HubSpot")]
    pub async fn delete_deal(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("deals", "Deal", &params.id).await
    }

    #[tool(
        name = "hubspot-search-deals",
        description = "Search deals in HubSpot using various criteria"
    )]
    pub async fn search_deals(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("deals", params, None).await
    }

    #[tool(
        name = "hubspot-get-deal-properties",
        description = "Get all deal properties from HubSpot"
    )]
    pub async fn get_deal_properties(&self) -> String {
        self.list_properties_result("deals").await
    }

    #[tool(
        name = "hubspot-get-deal-property",
        description = "Get a specific deal property from HubSpot"
    )]
    pub async fn get_deal_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("deals", &params.property_name)
            .await
    }

    // ── tickets ──

    #[tool(
        name = "hubspot-get-ticket",
        description = "Get a specific ticket by ID from HubSpot"
    )]
    pub async fn get_ticket(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("tickets", &params.id).await
    }

    #[tool(
        name = "hubspot-get-tickets",
        description = "Get all tickets by ID from HubSpot"
    )]
    pub async fn get_tickets(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("tickets", &params.ids).await
    }

    #[tool(
        name = "hubspot-create-ticket",
        description = "Create a new ticket in HubSpot"
    )]
    pub async fn create_ticket(
        &self,
        Parameters(params): Parameters<CreateRecordParams>,
    ) -> String {
        self.create_record_result("tickets", &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-update-ticket",
        description = "Update an existing ticket in HubSpot"
    )]
    pub async fn update_ticket(
        &self,
        Parameters(params): Parameters<UpdateRecordParams>,
    ) -> String {
        self.update_record_result("tickets", &params.id, &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-ticket",
        description = "Delete a ticket from HubSpot"
    )]
    pub async fn delete_ticket(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("tickets", "Ticket", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-tickets",
        description = "Search tickets in HubSpot using various criteria"
    )]
    pub async fn search_tickets(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("tickets", params, None).await
    }

    #[tool(
        name = "hubspot-get-ticket-properties",
        description = "Get all ticket properties from HubSpot"
    )]
    pub async fn get_ticket_properties(&self) -> String {
        self.list_properties_result("tickets").await
    }

    #[tool(
        name = "hubspot-get-ticket-property",
        description = "Get a specific ticket property from HubSpot"
    )]
    pub async fn get_ticket_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("tickets", &params.property_name)
            .await
    }

    // ── products ──

    #[tool(
        name = "hubspot-get-product",
        description = "Get a specific product by ID from HubSpot"
    )]
    pub async fn get_product(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("products", &params.id).await
    }

    #[tool(
        name = "hubspot-get-products",
        description = "Get all products by ID from HubSpot"
    )]
    pub async fn get_products(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("products", &params.ids).await
    }

    #[tool(
        name = "hubspot-create-product",
        description = "Create a new product in HubSpot"
    )]
    pub async fn create_product(
        &self,
        Parameters(params): Parameters<CreateRecordParams>,
    ) -> String {
        self.create_record_result("products", &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-update-product",
        description = "Update an existing product in HubSpot"
    )]
    pub async fn update_product(
        &self,
        Parameters(params): Parameters<UpdateRecordParams>,
    ) -> String {
        self.update_record_result("products", &params.id, &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-product",
        description = "Delete a product from HubSpot"
    )]
    pub async fn delete_product(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("products", "Product", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-products",
        description = "Search products in HubSpot using various criteria"
    )]
    pub async fn search_products(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("products", params, None).await
    }

    #[tool(
        name = "hubspot-get-product-properties",
        description = "Get all product properties from HubSpot"
    )]
    pub async fn get_product_properties(&self) -> String {
        self.list_properties_result("products").await
    }

    #[tool(
        name = "hubspot-get-product-property",
        description = "Get a specific product property from HubSpot"
    )]
    pub async fn get_product_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("products", &params.property_name)
            .await
    }

    // ── line items ──

    #[tool(
        name = "hubspot-get-line-item",
        description = "Get a specific line item by ID from HubSpot"
    )]
    pub async fn get_line_item(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("line_items", &params.id).await
    }

    #[tool(
        name = "hubspot-get-line-items",
        description = "Get all line items by ID from HubSpot"
    )]
    pub async fn get_line_items(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("line_items", &params.ids).await
    }

    #[tool(
        name = "hubspot-create-line-item",
        description = "Create a new line item in HubSpot"
    )]
    pub async fn create_line_item(
        &self,
        Parameters(params): Parameters<CreateRecordParams>,
    ) -> String {
        self.create_record_result("line_items", &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-update-line-item",
        description = "Update an existing line item in HubSpot"
    )]
    pub async fn update_line_item(
        &self,
        Parameters(params): Parameters<UpdateRecordParams>,
    ) -> String {
        self.update_record_result("line_items", &params.id, &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-line-item",
        description = "Delete a line item from HubSpot"
    )]
    pub async fn delete_line_item(
        &self,
        Parameters(params): Parameters<ObjectIdParams>,
    ) -> String {
        self.delete_record_result("line_items", "Line item", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-line-items",
        description = "Search line items in HubSpot using various criteria"
    )]
    pub async fn search_line_items(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("line_items", params, None).await
    }

    #[tool(
        name = "hubspot-get-line-item-properties",
        description = "Get all line item properties from HubSpot"
    )]
    pub async fn get_line_item_properties(&self) -> String {
        self.list_properties_result("line_items").await
    }

    #[tool(
        name = "hubspot-get-line-item-property",
        description = "Get a specific line item property from HubSpot"
    )]
    pub async fn get_line_item_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("line_items", &params.property_name)
            .await
    }

    // ── quotes ──

    #[tool(
        name = "hubspot-get-quote",
        description = "Get a specific quote by ID from HubSpot"
    )]
    pub async fn get_quote(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("quotes", &params.id).await
    }

    #[tool(name = "hubspot-get-quotes", description = "Get all quotes by ID from HubSpot")]
    pub async fn get_quotes(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("quotes", &params.ids).await
    }

    #[tool(name = "hubspot-create-quote", description = "Create a new quote in HubSpot")]
    pub async fn create_quote(
        &self,
        Parameters(params): Parameters<CreateRecordParams>,
    ) -> String {
        self.create_record_result("quotes", &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-update-quote",
        description = "Update an existing quote in HubSpot"
    )]
    pub async fn update_quote(&self, Parameters(params): Parameters<UpdateRecordParams>) -> String {
        self.update_record_result("quotes", &params.id, &params.properties)
            .await
    }

    #[tool(name = "hubspot-delete-quote", description = "Delete a quote from HubSpot")]
    pub async fn delete_quote(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("quotes", "Quote", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-quotes",
        description = "Search quotes in HubSpot using various criteria"
    )]
    pub async fn search_quotes(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("quotes", params, None).await
    }

    #[tool(
        name = "hubspot-get-quote-contact-associations",
        description = "Get associations between quotes and contacts"
    )]
    pub async fn get_quote_contact_associations(
        &self,
        Parameters(params): Parameters<QuoteAssociationPageParams>,
    ) -> String {
        self.quote_associations_result(params, "contacts").await
    }

    #[tool(
        name = "hubspot-get-quote-company-associations",
        description = "Get associations between quotes and companies"
    )]
    pub async fn get_quote_company_associations(
        &self,
        Parameters(params): Parameters<QuoteAssociationPageParams>,
    ) -> String {
        self.quote_associations_result(params, "companies").await
    }

    #[tool(
        name = "hubspot-get-quote-deal-associations",
        description = "Get associations between quotes and deals"
    )]
    pub async fn get_quote_deal_associations(
        &self,
        Parameters(params): Parameters<QuoteAssociationPageParams>,
    ) -> String {
        self.quote_associations_result(params, "deals").await
    }

    #[tool(
        name = "hubspot-get-quote-line-item-associations",
        description = "Get associations between quotes and line items"
    )]
    pub async fn get_quote_line_item_associations(
        &self,
        Parameters(params): Parameters<QuoteAssociationPageParams>,
    ) -> String {
        self.quote_associations_result(params, "line_items").await
    }

    /// Associate a quote with any object, pinning the association type id
    /// explicitly instead of going through pair resolution.
    #[tool(
        name = "hubspot-create-quote-association",
        description = "Create an association between a quote and another object. Accepts an explicit association_type_id (default 1)."
    )]
    pub async fn create_quote_association(
        &self,
        Parameters(params): Parameters<CreateQuoteAssociationParams>,
    ) -> String {
        if let Err(e) = require_non_empty("quote_id", &params.quote_id) {
            return e;
        }
        if let Err(e) = require_non_empty("to_object_type", &params.to_object_type) {
            return e;
        }
        if let Err(e) = require_non_empty("to_object_id", &params.to_object_id) {
            return e;
        }

        let types = [AssociationSpec {
            association_category: AssociationCategory::HubspotDefined,
            association_type_id: params
                .association_type_id
                .unwrap_or(DEFAULT_ASSOCIATION_TYPE_ID),
        }];
        match self
            .client
            .create_association(
                "quotes",
                &params.quote_id,
                &params.to_object_type,
                &params.to_object_id,
                &types,
            )
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    #[tool(
        name = "hubspot-get-quote-properties",
        description = "Get all quote properties from HubSpot"
    )]
    pub async fn get_quote_properties(&self) -> String {
        self.list_properties_result("quotes").await
    }

    #[tool(
        name = "hubspot-get-quote-property",
        description = "Get a specific quote property from HubSpot"
    )]
    pub async fn get_quote_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("quotes", &params.property_name)
            .await
    }

    // ── custom objects ──

    #[tool(
        name = "hubspot-get-custom-object-schemas",
        description = "Get all custom object schemas from HubSpot"
    )]
    pub async fn get_custom_object_schemas(&self) -> String {
        match self.client.list_schemas().await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    #[tool(
        name = "hubspot-get-custom-object-schema",
        description = "Get a specific custom object schema from HubSpot"
    )]
    pub async fn get_custom_object_schema(
        &self,
        Parameters(params): Parameters<ObjectTypeParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        match self.client.get_schema(&params.object_type).await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    #[tool(
        name = "hubspot-get-custom-object",
        description = "Get a specific custom object by ID from HubSpot"
    )]
    pub async fn get_custom_object(
        &self,
        Parameters(params): Parameters<CustomObjectIdParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        self.get_object_result(&params.object_type, &params.object_id)
            .await
    }

    #[tool(
        name = "hubspot-get-custom-objects",
        description = "Get all custom objects by ID from HubSpot"
    )]
    pub async fn get_custom_objects(
        &self,
        Parameters(params): Parameters<CustomObjectIdsParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        self.get_objects_result(&params.object_type, &params.object_ids)
            .await
    }

    #[tool(
        name = "hubspot-create-custom-object",
        description = "Create a new custom object in HubSpot"
    )]
    pub async fn create_custom_object(
        &self,
        Parameters(params): Parameters<CreateCustomObjectParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        self.create_record_result(&params.object_type, &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-update-custom-object",
        description = "Update an existing custom object in HubSpot"
    )]
    pub async fn update_custom_object(
        &self,
        Parameters(params): Parameters<UpdateCustomObjectParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        self.update_record_result(&params.object_type, &params.object_id, &params.properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-custom-object",
        description = "Delete a custom object from HubSpot"
    )]
    pub async fn delete_custom_object(
        &self,
        Parameters(params): Parameters<CustomObjectIdParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        self.delete_record_result(&params.object_type, "Custom object", &params.object_id)
            .await
    }

    #[tool(
        name = "hubspot-search-custom-objects",
        description = "Search custom objects in HubSpot using various criteria"
    )]
    pub async fn search_custom_objects(
        &self,
        Parameters(params): Parameters<SearchCustomObjectsParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        let search = SearchParams {
            search_term: params.search_term,
            property_name: params.property_name,
            operator: params.operator,
            limit: params.limit,
            after: params.after,
            properties: params.properties,
        };
        self.search_result(&params.object_type, search, None).await
    }

    #[tool(
        name = "hubspot-get-custom-object-properties",
        description = "Get all custom object properties from HubSpot"
    )]
    pub async fn get_custom_object_properties(
        &self,
        Parameters(params): Parameters<ObjectTypeParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        self.list_properties_result(&params.object_type).await
    }

    #[tool(
        name = "hubspot-get-custom-object-property",
        description = "Get a specific custom object property from HubSpot"
    )]
    pub async fn get_custom_object_property(
        &self,
        Parameters(params): Parameters<CustomObjectPropertyParams>,
    ) -> String {
        if let Err(e) = require_non_empty("object_type", &params.object_type) {
            return e;
        }
        self.get_property_result(&params.object_type, &params.property_name)
            .await
    }

    // ── calls ──

    #[tool(
        name = "hubspot-get-call",
        description = "Get a specific call by ID from HubSpot"
    )]
    pub async fn get_call(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("calls", &params.id).await
    }

    #[tool(name = "hubspot-create-call", description = "Create a new call in HubSpot")]
    pub async fn create_call(&self, Parameters(params): Parameters<CreateCallParams>) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("calls", properties, true, None)
            .await
    }

    #[tool(name = "hubspot-delete-call", description = "Delete a call from HubSpot")]
    pub async fn delete_call(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("calls", "Call", &params.id).await
    }

    #[tool(
        name = "hubspot-search-calls",
        description = "Search calls in HubSpot using various criteria"
    )]
    pub async fn search_calls(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("calls", params, Some(CALL_SEARCH_PROPERTIES))
            .await
    }

    // ── communications ──

    #[tool(
        name = "hubspot-get-communication",
        description = "Get a specific communication by ID from HubSpot"
    )]
    pub async fn get_communication(
        &self,
        Parameters(params): Parameters<ObjectIdParams>,
    ) -> String {
        self.get_object_result("communications", &params.id).await
    }

    #[tool(
        name = "hubspot-create-communication",
        description = "Create a new communication in HubSpot"
    )]
    pub async fn create_communication(
        &self,
        Parameters(params): Parameters<CreateCommunicationParams>,
    ) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("communications", properties, false, None)
            .await
    }

    #[tool(
        name = "hubspot-update-communication",
        description = "Update an existing communication in HubSpot"
    )]
    pub async fn update_communication(
        &self,
        Parameters(params): Parameters<UpdateCommunicationParams>,
    ) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.update_record_result("communications", &params.id, &properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-communication",
        description = "Delete a communication from HubSpot"
    )]
    pub async fn delete_communication(
        &self,
        Parameters(params): Parameters<ObjectIdParams>,
    ) -> String {
        self.delete_record_result("communications", "Communication", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-communications",
        description = "Search communications in HubSpot using various criteria"
    )]
    pub async fn search_communications(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> String {
        self.search_result("communications", params, Some(COMMUNICATION_SEARCH_PROPERTIES))
            .await
    }

    // ── emails ──

    #[tool(
        name = "hubspot-get-email",
        description = "Get a specific email by ID from HubSpot"
    )]
    pub async fn get_email(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("emails", &params.id).await
    }

    #[tool(name = "hubspot-create-email", description = "Create a new email in HubSpot")]
    pub async fn create_email(&self, Parameters(params): Parameters<CreateEmailParams>) -> String {
        let mut properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        properties
            .entry("hs_email_direction".to_string())
            .or_insert_with(|| "EMAIL".to_string());
        self.create_engagement_result("emails", properties, true, None)
            .await
    }

    #[tool(
        name = "hubspot-update-email",
        description = "Update an existing email in HubSpot"
    )]
    pub async fn update_email(&self, Parameters(params): Parameters<UpdateEmailParams>) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.update_record_result("emails", &params.id, &properties)
            .await
    }

    #[tool(name = "hubspot-delete-email", description = "Delete an email from HubSpot")]
    pub async fn delete_email(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("emails", "Email", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-emails",
        description = "Search emails in HubSpot using various criteria"
    )]
    pub async fn search_emails(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("emails", params, Some(EMAIL_SEARCH_PROPERTIES))
            .await
    }

    // ── meetings ──

    #[tool(
        name = "hubspot-get-meeting",
        description = "Get a specific meeting by ID from HubSpot"
    )]
    pub async fn get_meeting(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("meetings", &params.id).await
    }

    #[tool(
        name = "hubspot-create-meeting",
        description = "Create a new meeting in HubSpot"
    )]
    pub async fn create_meeting(
        &self,
        Parameters(params): Parameters<CreateMeetingParams>,
    ) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("meetings", properties, true, None)
            .await
    }

    #[tool(
        name = "hubspot-update-meeting",
        description = "Update an existing meeting in HubSpot"
    )]
    pub async fn update_meeting(
        &self,
        Parameters(params): Parameters<UpdateMeetingParams>,
    ) -> String {
        let mut properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        ensure_timestamp(&mut properties);
        self.update_record_result("meetings", &params.id, &properties)
            .await
    }

    #[tool(
        name = "hubspot-delete-meeting",
        description = "Delete a meeting from HubSpot"
    )]
    pub async fn delete_meeting(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("meetings", "Meeting", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-meetings",
        description = "Search meetings in HubSpot using various criteria"
    )]
    pub async fn search_meetings(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("meetings", params, Some(MEETING_SEARCH_PROPERTIES))
            .await
    }

    // ── notes ──

    #[tool(
        name = "hubspot-get-note",
        description = "Get a specific note by ID from HubSpot"
    )]
    pub async fn get_note(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("notes", &params.id).await
    }

    #[tool(name = "hubspot-get-notes", description = "Get all notes by ID from HubSpot")]
    pub async fn get_notes(&self, Parameters(params): Parameters<ObjectIdsParams>) -> String {
        self.get_objects_result("notes", &params.ids).await
    }

    #[tool(name = "hubspot-create-note", description = "Create a new note in HubSpot")]
    pub async fn create_note(&self, Parameters(params): Parameters<CreateNoteParams>) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("notes", properties, true, params.associations)
            .await
    }

    #[tool(
        name = "hubspot-update-note",
        description = "Update an existing note in HubSpot"
    )]
    pub async fn update_note(&self, Parameters(params): Parameters<UpdateNoteParams>) -> String {
        let mut properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        ensure_timestamp(&mut properties);
        self.update_record_result("notes", &params.id, &properties)
            .await
    }

    #[tool(name = "hubspot-delete-note", description = "Delete a note from HubSpot")]
    pub async fn delete_note(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("notes", "Note", &params.id).await
    }

    #[tool(
        name = "hubspot-search-notes",
        description = "Search notes in HubSpot using various criteria"
    )]
    pub async fn search_notes(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("notes", params, None).await
    }

    #[tool(
        name = "hubspot-get-note-properties",
        description = "Get all note properties from HubSpot"
    )]
    pub async fn get_note_properties(&self) -> String {
        self.list_properties_result("notes").await
    }

    #[tool(
        name = "hubspot-get-note-property",
        description = "Get a specific note property from HubSpot"
    )]
    pub async fn get_note_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("notes", &params.property_name)
            .await
    }

    // ── tasks ──

    #[tool(
        name = "hubspot-get-task",
        description = "Get a specific task by ID from HubSpot"
    )]
    pub async fn get_task(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("tasks", &params.id).await
    }

    #[tool(name = "hubspot-create-task", description = "Create a new task in HubSpot")]
    pub async fn create_task(&self, Parameters(params): Parameters<CreateTaskParams>) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("tasks", properties, true, None)
            .await
    }

    #[tool(name = "hubspot-delete-task", description = "Delete a task from HubSpot")]
    pub async fn delete_task(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("tasks", "Task", &params.id).await
    }

    #[tool(
        name = "hubspot-search-tasks",
        description = "Search tasks in HubSpot using various criteria"
    )]
    pub async fn search_tasks(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("tasks", params, Some(TASK_SEARCH_PROPERTIES))
            .await
    }

    // ── postal mail ──

    #[tool(
        name = "hubspot-get-postal-mail",
        description = "Get a specific postal mail by ID from HubSpot"
    )]
    pub async fn get_postal_mail(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("postal_mail", &params.id).await
    }

    #[tool(
        name = "hubspot-create-postal-mail",
        description = "Create a new postal mail in HubSpot"
    )]
    pub async fn create_postal_mail(
        &self,
        Parameters(params): Parameters<CreatePostalMailParams>,
    ) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("postal_mail", properties, true, None)
            .await
    }

    #[tool(
        name = "hubspot-delete-postal-mail",
        description = "Delete a postal mail from HubSpot"
    )]
    pub async fn delete_postal_mail(
        &self,
        Parameters(params): Parameters<ObjectIdParams>,
    ) -> String {
        self.delete_record_result("postal_mail", "Postal mail", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-postal-mail",
        description = "Search postal mail in HubSpot using various criteria"
    )]
    pub async fn search_postal_mail(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("postal_mail", params, Some(POSTAL_MAIL_SEARCH_PROPERTIES))
            .await
    }

    // ── taxes ──

    #[tool(
        name = "hubspot-get-tax",
        description = "Get a specific tax by ID from HubSpot"
    )]
    pub async fn get_tax(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("taxes", &params.id).await
    }

    #[tool(name = "hubspot-create-tax", description = "Create a new tax in HubSpot")]
    pub async fn create_tax(&self, Parameters(params): Parameters<CreateTaxParams>) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("taxes", properties, false, params.associations)
            .await
    }

    #[tool(name = "hubspot-delete-tax", description = "Delete a tax from HubSpot")]
    pub async fn delete_tax(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("taxes", "Tax", &params.id).await
    }

    #[tool(
        name = "hubspot-search-tax",
        description = "Search taxes in HubSpot using various criteria"
    )]
    pub async fn search_tax(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("taxes", params, Some(TAX_SEARCH_PROPERTIES))
            .await
    }

    // ── leads ──

    #[tool(
        name = "hubspot-get-lead",
        description = "Get a specific lead by ID from HubSpot"
    )]
    pub async fn get_lead(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("leads", &params.id).await
    }

    #[tool(name = "hubspot-create-lead", description = "Create a new lead in HubSpot")]
    pub async fn create_lead(&self, Parameters(params): Parameters<CreateLeadParams>) -> String {
        let properties = match properties_map(&params.properties) {
            Ok(p) => p,
            Err(e) => return e,
        };
        self.create_engagement_result("leads", properties, false, params.associations)
            .await
    }

    #[tool(
        name = "hubspot-update-lead",
        description = "Update an existing lead in HubSpot"
    )]
    pub async fn update_lead(&self, Parameters(params): Parameters<UpdateRecordParams>) -> String {
        self.update_record_result("leads", &params.id, &params.properties)
            .await
    }

    #[tool(name = "hubspot-delete-lead", description = "Delete a lead from HubSpot")]
    pub async fn delete_lead(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.delete_record_result("leads", "Lead", &params.id).await
    }

    #[tool(
        name = "hubspot-search-leads",
        description = "Search leads in HubSpot using various criteria"
    )]
    pub async fn search_leads(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("leads", params, None).await
    }

    #[tool(
        name = "hubspot-get-lead-properties",
        description = "Get all lead properties from HubSpot"
    )]
    pub async fn get_lead_properties(&self) -> String {
        self.list_properties_result("leads").await
    }

    // ── feedback submissions ──

    #[tool(
        name = "hubspot-get-feedback-submission",
        description = "Get a specific feedback submission by ID from HubSpot"
    )]
    pub async fn get_feedback_submission(
        &self,
        Parameters(params): Parameters<ObjectIdParams>,
    ) -> String {
        self.get_object_result("feedback_submissions", &params.id)
            .await
    }

    #[tool(
        name = "hubspot-search-feedback-submissions",
        description = "Search feedback submissions in HubSpot using various criteria"
    )]
    pub async fn search_feedback_submissions(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> String {
        self.search_result("feedback_submissions", params, Some(FEEDBACK_SEARCH_PROPERTIES))
            .await
    }

    // ── goals ──

    #[tool(
        name = "hubspot-get-goal",
        description = "Get a specific goal by ID from HubSpot"
    )]
    pub async fn get_goal(&self, Parameters(params): Parameters<ObjectIdParams>) -> String {
        self.get_object_result("goals", &params.id).await
    }

    #[tool(
        name = "hubspot-search-goals",
        description = "Search goals in HubSpot using various criteria"
    )]
    pub async fn search_goals(&self, Parameters(params): Parameters<SearchParams>) -> String {
        self.search_result("goals", params, Some(GOAL_SEARCH_PROPERTIES))
            .await
    }

    // ── timeline events ──

    #[tool(
        name = "hubspot-get-timeline-event",
        description = "Get a specific timeline event by ID from HubSpot"
    )]
    pub async fn get_timeline_event(
        &self,
        Parameters(params): Parameters<GetTimelineEventParams>,
    ) -> String {
        if let Err(e) = require_non_empty("event_template_id", &params.event_template_id) {
            return e;
        }
        if let Err(e) = require_non_empty("event_id", &params.event_id) {
            return e;
        }
        match self
            .client
            .get_timeline_event(&params.event_template_id, &params.event_id)
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    #[tool(
        name = "hubspot-get-timeline-events",
        description = "Get all timeline events by ID from HubSpot"
    )]
    pub async fn get_timeline_events(
        &self,
        Parameters(params): Parameters<GetTimelineEventsParams>,
    ) -> String {
        if let Err(e) = require_non_empty("event_template_id", &params.event_template_id) {
            return e;
        }
        if params.event_ids.is_empty() {
            return error_json("validation_error", "event_ids must not be empty");
        }
        match self
            .client
            .get_timeline_events(&params.event_template_id, &params.event_ids)
            .await
        {
            Ok(values) => json_text(&values),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    #[tool(
        name = "hubspot-create-timeline-event",
        description = "Create a new timeline event in HubSpot"
    )]
    pub async fn create_timeline_event(
        &self,
        Parameters(params): Parameters<CreateTimelineEventParams>,
    ) -> String {
        if let Err(e) = require_non_empty("event_template_id", &params.event_template_id) {
            return e;
        }
        if let Err(e) = require_non_empty("object_id", &params.object_id) {
            return e;
        }
        match self
            .client
            .create_timeline_event(&params.event_template_id, &params.object_id, &params.tokens)
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    /// The remote API has no update for timeline events; the tool documents
    /// that instead of faking one.
    #[tool(
        name = "hubspot-update-timeline-event",
        description = "Update an existing timeline event in HubSpot (not supported by the HubSpot API)"
    )]
    pub async fn update_timeline_event(
        &self,
        Parameters(_params): Parameters<ObjectIdParams>,
    ) -> String {
        "Timeline events cannot be updated in HubSpot; create a new event instead".to_string()
    }

    /// Timeline events are append-only; deletion is not supported remotely.
    #[tool(
        name = "hubspot-delete-timeline-event",
        description = "Delete a timeline event from HubSpot (not supported by the HubSpot API)"
    )]
    pub async fn delete_timeline_event(
        &self,
        Parameters(_params): Parameters<ObjectIdParams>,
    ) -> String {
        "Timeline events cannot be deleted in HubSpot".to_string()
    }

    /// Timeline events are not indexed by the CRM search API.
    #[tool(
        name = "hubspot-search-timeline-events",
        description = "Search timeline events in HubSpot (not supported by the HubSpot API)"
    )]
    pub async fn search_timeline_events(
        &self,
        Parameters(_params): Parameters<SearchParams>,
    ) -> String {
        "Timeline events cannot be searched directly in HubSpot".to_string()
    }

    #[tool(
        name = "hubspot-get-timeline-event-templates",
        description = "Get all timeline event templates from HubSpot"
    )]
    pub async fn get_timeline_event_templates(
        &self,
        Parameters(params): Parameters<TimelineEventTemplatesParams>,
    ) -> String {
        match self.client.list_event_templates(params.app_id).await {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    #[tool(
        name = "hubspot-get-timeline-event-template",
        description = "Get a specific timeline event template from HubSpot"
    )]
    pub async fn get_timeline_event_template(
        &self,
        Parameters(params): Parameters<GetTimelineEventTemplateParams>,
    ) -> String {
        if let Err(e) = require_non_empty("event_template_id", &params.event_template_id) {
            return e;
        }
        match self
            .client
            .get_event_template(params.app_id, &params.event_template_id)
            .await
        {
            Ok(value) => json_text(&value),
            Err(e) => error_json("api_error", &e.to_string()),
        }
    }

    #[tool(
        name = "hubspot-get-timeline-event-properties",
        description = "Get all timeline event properties from HubSpot"
    )]
    pub async fn get_timeline_event_properties(&self) -> String {
        self.list_properties_result("timeline_events").await
    }

    #[tool(
        name = "hubspot-get-timeline-event-property",
        description = "Get a specific timeline event property from HubSpot"
    )]
    pub async fn get_timeline_event_property(
        &self,
        Parameters(params): Parameters<PropertyNameParams>,
    ) -> String {
        self.get_property_result("timeline_events", &params.property_name)
            .await
    }
}

/// Validate one association tuple, optionally prefixing field names with the
/// batch item index.
fn validate_association_item(
    item: &DeleteAssociationParams,
    index: Option<usize>,
) -> Result<(), String> {
    let field = |name: &str| match index {
        Some(i) => format!("inputs[{i}].{name}"),
        None => name.to_string(),
    };
    require_known_object_type(&field("from_object_type"), &item.from_object_type)?;
    require_known_object_type(&field("to_object_type"), &item.to_object_type)?;
    require_non_empty(&field("from_object_id"), &item.from_object_id)?;
    require_non_empty(&field("to_object_id"), &item.to_object_id)?;
    Ok(())
}

/// Group batch-delete inputs by source id, preserving first-seen order, so
/// the remote call carries one record per source with all its targets.
fn group_archive_inputs(inputs: &[DeleteAssociationParams]) -> Vec<BatchArchiveInput> {
    let mut grouped: Vec<BatchArchiveInput> = Vec::new();
    for input in inputs {
        match grouped
            .iter_mut()
            .find(|record| record.from.id == input.from_object_id)
        {
            Some(record) => record.to.push(ObjectRef {
                id: input.to_object_id.clone(),
            }),
            None => grouped.push(BatchArchiveInput {
                from: ObjectRef {
                    id: input.from_object_id.clone(),
                },
                to: vec![ObjectRef {
                    id: input.to_object_id.clone(),
                }],
            }),
        }
    }
    grouped
}

/// Convert inline association inputs to the create-body shape, defaulting
/// omitted type ids to the generic association.
fn inline_association_specs(associations: &[InlineAssociationParams]) -> Vec<CreateAssociation> {
    associations
        .iter()
        .map(|assoc| CreateAssociation {
            to: ObjectRef {
                id: assoc.to_object_id.clone(),
            },
            types: vec![AssociationSpec {
                association_category: AssociationCategory::HubspotDefined,
                association_type_id: assoc
                    .association_type_id
                    .unwrap_or(DEFAULT_ASSOCIATION_TYPE_ID),
            }],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubspot_client::HubSpotConfig;

    // All tests here stay on the validation/resolution paths that return
    // before any request is issued; the client never sees the network.
    fn test_server() -> HubSpotMcpServer {
        let config = HubSpotConfig::new("pat-na1-test").unwrap();
        HubSpotMcpServer::new(HubSpotClient::new(config).unwrap())
    }

    fn parsed(result: &str) -> serde_json::Value {
        serde_json::from_str(result).unwrap()
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "hubspot-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains("hubspot-create-association"));
        assert!(instructions.contains("unresolved_association_type"));
    }

    #[tokio::test]
    async fn test_create_association_rejects_unknown_object_type() {
        let server = test_server();
        let result = server
            .create_association(Parameters(CreateAssociationParams {
                from_object_type: "widgets".to_string(),
                from_object_id: "1".to_string(),
                to_object_type: "contacts".to_string(),
                to_object_id: "2".to_string(),
                association_category: AssociationCategory::HubspotDefined,
            }))
            .await;
        let parsed = parsed(&result);
        assert_eq!(parsed["error"], "validation_error");
        assert!(parsed["message"].as_str().unwrap().contains("widgets"));
    }

    #[tokio::test]
    async fn test_create_association_rejects_empty_id() {
        let server = test_server();
        let result = server
            .create_association(Parameters(CreateAssociationParams {
                from_object_type: "companies".to_string(),
                from_object_id: "".to_string(),
                to_object_type: "contacts".to_string(),
                to_object_id: "2".to_string(),
                association_category: AssociationCategory::HubspotDefined,
            }))
            .await;
        let parsed = parsed(&result);
        assert_eq!(parsed["error"], "validation_error");
        assert!(parsed["message"]
            .as_str()
            .unwrap()
            .contains("from_object_id"));
    }

    #[tokio::test]
    async fn test_create_association_unresolvable_pair() {
        let server = test_server();
        // Both types are valid; the pair has no table or catalog entry.
        let result = server
            .create_association(Parameters(CreateAssociationParams {
                from_object_type: "contacts".to_string(),
                from_object_id: "1".to_string(),
                to_object_type: "goals".to_string(),
                to_object_id: "2".to_string(),
                association_category: AssociationCategory::HubspotDefined,
            }))
            .await;
        let parsed = parsed(&result);
        assert_eq!(parsed["error"], "unresolved_association_type");
        assert!(parsed["message"]
            .as_str()
            .unwrap()
            .contains("contacts -> goals"));
    }

    #[tokio::test]
    async fn test_get_associations_rejects_empty_source_id() {
        let server = test_server();
        let result = server
            .get_associations(Parameters(GetAssociationsParams {
                from_object_type: "deals".to_string(),
                from_object_id: "  ".to_string(),
                to_object_type: "contacts".to_string(),
                limit: None,
                after: None,
            }))
            .await;
        assert_eq!(parsed(&result)["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_batch_create_rejects_empty_inputs() {
        let server = test_server();
        let result = server
            .batch_create_associations(Parameters(BatchCreateAssociationsParams {
                inputs: vec![],
            }))
            .await;
        assert_eq!(parsed(&result)["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_batch_create_rejects_mixed_type_pairs() {
        let server = test_server();
        let item = |from: &str, to: &str| CreateAssociationParams {
            from_object_type: from.to_string(),
            from_object_id: "1".to_string(),
            to_object_type: to.to_string(),
            to_object_id: "2".to_string(),
            association_category: AssociationCategory::HubspotDefined,
        };
        let result = server
            .batch_create_associations(Parameters(BatchCreateAssociationsParams {
                inputs: vec![item("deals", "contacts"), item("companies", "contacts")],
            }))
            .await;
        let parsed = parsed(&result);
        assert_eq!(parsed["error"], "validation_error");
        assert!(parsed["message"].as_str().unwrap().contains("inputs[1]"));
    }

    #[tokio::test]
    async fn test_batch_create_reports_unresolvable_item() {
        let server = test_server();
        // products -> goals is a valid type pair with no known association
        // type; the batch must abort naming the item, before any remote call.
        let result = server
            .batch_create_associations(Parameters(BatchCreateAssociationsParams {
                inputs: vec![CreateAssociationParams {
                    from_object_type: "products".to_string(),
                    from_object_id: "1".to_string(),
                    to_object_type: "goals".to_string(),
                    to_object_id: "2".to_string(),
                    association_category: AssociationCategory::UserDefined,
                }],
            }))
            .await;
        let parsed = parsed(&result);
        assert_eq!(parsed["error"], "unresolved_association_type");
        assert!(parsed["message"].as_str().unwrap().contains("inputs[0]"));
    }

    #[tokio::test]
    async fn test_batch_delete_rejects_mixed_type_pairs() {
        let server = test_server();
        let item = |from: &str| DeleteAssociationParams {
            from_object_type: from.to_string(),
            from_object_id: "1".to_string(),
            to_object_type: "contacts".to_string(),
            to_object_id: "9".to_string(),
        };
        let result = server
            .batch_delete_associations(Parameters(BatchDeleteAssociationsParams {
                inputs: vec![item("deals"), item("tickets")],
            }))
            .await;
        let parsed = parsed(&result);
        assert_eq!(parsed["error"], "validation_error");
        assert!(parsed["message"].as_str().unwrap().contains("inputs[1]"));
    }

    #[test]
    fn test_group_archive_inputs_single_item() {
        // One input produces exactly one record grouping target 9 under
        // source 1.
        let groups = group_archive_inputs(&[DeleteAssociationParams {
            from_object_type: "deals".to_string(),
            from_object_id: "1".to_string(),
            to_object_type: "contacts".to_string(),
            to_object_id: "9".to_string(),
        }]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].from.id, "1");
        assert_eq!(groups[0].to.len(), 1);
        assert_eq!(groups[0].to[0].id, "9");
    }

    #[test]
    fn test_group_archive_inputs_merges_sources_in_order() {
        let item = |from: &str, to: &str| DeleteAssociationParams {
            from_object_type: "deals".to_string(),
            from_object_id: from.to_string(),
            to_object_type: "contacts".to_string(),
            to_object_id: to.to_string(),
        };
        let groups = group_archive_inputs(&[
            item("1", "9"),
            item("2", "8"),
            item("1", "7"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].from.id, "1");
        assert_eq!(
            groups[0].to.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["9", "7"]
        );
        assert_eq!(groups[1].from.id, "2");
        assert_eq!(groups[1].to[0].id, "8");
    }

    #[test]
    fn test_inline_association_specs_default_to_generic_id() {
        let specs = inline_association_specs(&[InlineAssociationParams {
            to_object_type: "contacts".to_string(),
            to_object_id: "42".to_string(),
            association_type_id: None,
        }]);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].to.id, "42");
        assert_eq!(
            specs[0].types[0].association_type_id,
            DEFAULT_ASSOCIATION_TYPE_ID
        );
    }

    #[test]
    fn test_validate_association_item_names_batch_index() {
        let err = validate_association_item(
            &DeleteAssociationParams {
                from_object_type: "deals".to_string(),
                from_object_id: "1".to_string(),
                to_object_type: "contacts".to_string(),
                to_object_id: "".to_string(),
            },
            Some(3),
        )
        .unwrap_err();
        assert!(err.contains("inputs[3].to_object_id"));
    }

    #[tokio::test]
    async fn test_create_quote_association_requires_target() {
        let server = test_server();
        let result = server
            .create_quote_association(Parameters(CreateQuoteAssociationParams {
                quote_id: "q1".to_string(),
                to_object_type: "".to_string(),
                to_object_id: "9".to_string(),
                association_type_id: None,
            }))
            .await;
        assert_eq!(parsed(&result)["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_timeline_stub_tools() {
        let server = test_server();
        let deleted = server
            .delete_timeline_event(Parameters(ObjectIdParams {
                id: "evt".to_string(),
            }))
            .await;
        assert_eq!(deleted, "Timeline events cannot be deleted in HubSpot");

        let searched = server
            .search_timeline_events(Parameters(SearchParams {
                search_term: "x".to_string(),
                property_name: "y".to_string(),
                operator: hubspot_client::FilterOperator::Eq,
                limit: None,
                after: None,
                properties: None,
            }))
            .await;
        assert!(searched.contains("cannot be searched"));
    }

    #[tokio::test]
    async fn test_get_objects_rejects_empty_id_list() {
        let server = test_server();
        let result = server
            .get_contacts(Parameters(ObjectIdsParams { ids: vec![] }))
            .await;
        assert_eq!(parsed(&result)["error"], "validation_error");
    }
}
