//! # HubSpot Client
//!
//! Async client for the HubSpot CRM REST API: objects (v3), properties (v3),
//! custom object schemas (v3), associations (v4) and timeline events (v3).
//!
//! The crate also owns the association type resolution subsystem: the mapping
//! from ordered object-type pairs to the numeric association type ids the v4
//! associations API expects (see [`associations::resolver`]).

pub mod associations;
pub mod client;
pub mod config;
pub mod error;
pub mod objects;
pub mod timeline;
pub mod types;

pub use associations::resolver::{
    is_known_object_type, resolve_association_type, AssociationCategory, AssociationTypeId,
    DEFAULT_ASSOCIATION_TYPE_ID, OBJECT_TYPES,
};
pub use associations::AssociationSpec;
pub use client::HubSpotClient;
pub use objects::CreateAssociation;
pub use config::HubSpotConfig;
pub use error::{ClientError, ClientResult};
pub use types::{Filter, FilterGroup, FilterOperator, SearchRequest};
