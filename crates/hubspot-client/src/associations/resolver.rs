//! Association type resolution.
//!
//! The v4 associations API labels every link with a numeric association type
//! id, and the right id depends on the ordered pair of object types being
//! linked ("company has primary contact" is a different id than "contact has
//! company"). Resolution runs in two steps, first match wins:
//!
//! 1. **Resolution table** - a hand-maintained map of the common ordered
//!    pairs to their default id. Where a pair has both a primary and a
//!    generic variant, the table picks the primary one.
//! 2. **Derived-key catalog** - the full set of known association type
//!    constants, keyed by `"<FROM>_TO_<TO>"` with both type names
//!    upper-cased. This covers the long tail (commerce objects,
//!    engagement-to-engagement, cross-category pairs) the table does not
//!    enumerate.
//!
//! A pair found in neither is an [`ClientError::UnresolvedAssociationType`]
//! error; resolution never substitutes a generic id on its own. Both maps
//! are built once and never mutated, so lookups are lock-free and safe from
//! any number of threads.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Numeric identifier of a directional association semantic.
pub type AssociationTypeId = u32;

/// The generic catch-all association type id.
///
/// Resolution never falls back to this value; it exists as the documented
/// default for tools that accept an explicit caller-supplied id (the quote
/// association tool).
pub const DEFAULT_ASSOCIATION_TYPE_ID: AssociationTypeId = 1;

/// The fixed set of standard object type names accepted by the association
/// tools. Custom object types are caller-supplied strings outside this set
/// and are addressed through the custom-object tools instead.
pub const OBJECT_TYPES: [&str; 27] = [
    "contacts",
    "companies",
    "deals",
    "tickets",
    "quotes",
    "products",
    "line_items",
    "calls",
    "communications",
    "emails",
    "meetings",
    "notes",
    "tasks",
    "postal_mail",
    "feedback_submissions",
    "taxes",
    "goals",
    "appointments",
    "courses",
    "listings",
    "services",
    "leads",
    "invoices",
    "orders",
    "carts",
    "subscriptions",
    "payments",
];

/// Whether `object_type` is one of the standard object types.
pub fn is_known_object_type(object_type: &str) -> bool {
    OBJECT_TYPES.contains(&object_type)
}

/// Who defined the association semantic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssociationCategory {
    /// Platform-defined association type.
    HubspotDefined,
    /// Portal-specific association type created by the customer.
    UserDefined,
}

/// Hand-maintained defaults for the common ordered pairs. Asymmetric by
/// design: `(a, b)` and `(b, a)` are independent entries. Primary variants
/// win where one exists (e.g. companies -> contacts is id 2, the primary
/// contact label, not the generic 280).
const TABLE: &[(&str, &[(&str, AssociationTypeId)])] = &[
    (
        "companies",
        &[
            ("contacts", 2),
            ("deals", 6),
            ("tickets", 25),
            ("calls", 181),
            ("emails", 185),
            ("meetings", 187),
            ("notes", 189),
            ("tasks", 191),
            ("communications", 88),
            ("postal_mail", 460),
            ("invoices", 180),
            ("orders", 510),
            ("payments", 390),
            ("subscriptions", 298),
            ("appointments", 909),
            ("courses", 939),
            ("listings", 885),
            ("services", 793),
            ("companies", 450),
        ],
    ),
    (
        "contacts",
        &[
            ("companies", 1),
            ("deals", 4),
            ("tickets", 15),
            ("calls", 193),
            ("emails", 197),
            ("meetings", 199),
            ("notes", 201),
            ("tasks", 203),
            ("communications", 82),
            ("postal_mail", 454),
            ("carts", 587),
            ("orders", 508),
            ("invoices", 178),
            ("payments", 388),
            ("subscriptions", 296),
            ("appointments", 907),
            ("courses", 861),
            ("listings", 883),
            ("services", 799),
            ("contacts", 449),
        ],
    ),
    (
        "deals",
        &[
            ("contacts", 3),
            ("companies", 5),
            ("tickets", 27),
            ("calls", 205),
            ("emails", 209),
            ("meetings", 211),
            ("notes", 213),
            ("tasks", 215),
            ("communications", 86),
            ("postal_mail", 458),
            ("line_items", 19),
            ("invoices", 176),
            ("orders", 511),
            ("payments", 392),
            ("quotes", 63),
            ("subscriptions", 300),
            ("appointments", 945),
            ("courses", 863),
            ("listings", 887),
            ("services", 795),
            ("deals", 451),
        ],
    ),
    (
        "tickets",
        &[
            ("contacts", 16),
            ("companies", 26),
            ("deals", 28),
            ("calls", 219),
            ("emails", 223),
            ("meetings", 225),
            ("notes", 227),
            ("tasks", 229),
            ("communications", 84),
            ("postal_mail", 456),
            ("orders", 526),
            ("appointments", 947),
            ("courses", 941),
            ("listings", 943),
            ("services", 797),
            ("tickets", 452),
        ],
    ),
];

static RESOLUTION_TABLE: Lazy<HashMap<&'static str, HashMap<&'static str, AssociationTypeId>>> =
    Lazy::new(|| {
        TABLE
            .iter()
            .map(|(from, row)| (*from, row.iter().copied().collect()))
            .collect()
    });

/// Every known association type constant, keyed by the symbolic name derived
/// from the plural object type names. Entries whose target is not a standard
/// object type (threads, discounts, signer/template variants, ...) keep
/// their descriptive names and are only reachable for callers that derive
/// matching keys.
const CATALOG_ENTRIES: &[(&str, AssociationTypeId)] = &[
    // Company associations
    ("COMPANIES_TO_COMPANIES", 450),
    ("CHILD_TO_PARENT_COMPANY", 14),
    ("PARENT_TO_CHILD_COMPANY", 13),
    ("COMPANIES_TO_CONTACTS", 280),
    ("COMPANIES_TO_CONTACTS_PRIMARY", 2),
    ("COMPANIES_TO_DEALS", 342),
    ("COMPANIES_TO_DEALS_PRIMARY", 6),
    ("COMPANIES_TO_TICKETS", 340),
    ("COMPANIES_TO_TICKETS_PRIMARY", 25),
    ("COMPANIES_TO_CALLS", 181),
    ("COMPANIES_TO_EMAILS", 185),
    ("COMPANIES_TO_MEETINGS", 187),
    ("COMPANIES_TO_NOTES", 189),
    ("COMPANIES_TO_TASKS", 191),
    ("COMPANIES_TO_COMMUNICATIONS", 88),
    ("COMPANIES_TO_POSTAL_MAIL", 460),
    ("COMPANIES_TO_INVOICES", 180),
    ("COMPANIES_TO_ORDERS", 510),
    ("COMPANIES_TO_PAYMENTS", 390),
    ("COMPANIES_TO_SUBSCRIPTIONS", 298),
    ("COMPANIES_TO_APPOINTMENTS", 909),
    ("COMPANIES_TO_COURSES", 939),
    ("COMPANIES_TO_LISTINGS", 885),
    ("COMPANIES_TO_SERVICES", 793),
    // Contact associations
    ("CONTACTS_TO_CONTACTS", 449),
    ("CONTACTS_TO_COMPANIES", 279),
    ("CONTACTS_TO_COMPANIES_PRIMARY", 1),
    ("CONTACTS_TO_DEALS", 4),
    ("CONTACTS_TO_TICKETS", 15),
    ("CONTACTS_TO_CALLS", 193),
    ("CONTACTS_TO_EMAILS", 197),
    ("CONTACTS_TO_MEETINGS", 199),
    ("CONTACTS_TO_NOTES", 201),
    ("CONTACTS_TO_TASKS", 203),
    ("CONTACTS_TO_COMMUNICATIONS", 82),
    ("CONTACTS_TO_POSTAL_MAIL", 454),
    ("CONTACTS_TO_CARTS", 587),
    ("CONTACTS_TO_ORDERS", 508),
    ("CONTACTS_TO_INVOICES", 178),
    ("CONTACTS_TO_PAYMENTS", 388),
    ("CONTACTS_TO_SUBSCRIPTIONS", 296),
    ("CONTACTS_TO_APPOINTMENTS", 907),
    ("CONTACTS_TO_COURSES", 861),
    ("CONTACTS_TO_LISTINGS", 883),
    ("CONTACTS_TO_SERVICES", 799),
    // Deal associations
    ("DEALS_TO_DEALS", 451),
    ("DEALS_TO_CONTACTS", 3),
    ("DEALS_TO_COMPANIES", 341),
    ("DEALS_TO_COMPANIES_PRIMARY", 5),
    ("DEALS_TO_TICKETS", 27),
    ("DEALS_TO_CALLS", 205),
    ("DEALS_TO_EMAILS", 209),
    ("DEALS_TO_MEETINGS", 211),
    ("DEALS_TO_NOTES", 213),
    ("DEALS_TO_TASKS", 215),
    ("DEALS_TO_COMMUNICATIONS", 86),
    ("DEALS_TO_POSTAL_MAIL", 458),
    ("DEALS_TO_DEAL_SPLITS", 313),
    ("DEALS_TO_LINE_ITEMS", 19),
    ("DEALS_TO_INVOICES", 176),
    ("DEALS_TO_ORDERS", 511),
    ("DEALS_TO_PAYMENTS", 392),
    ("DEALS_TO_QUOTES", 63),
    ("DEALS_TO_SUBSCRIPTIONS", 300),
    ("DEALS_TO_APPOINTMENTS", 945),
    ("DEALS_TO_COURSES", 863),
    ("DEALS_TO_LISTINGS", 887),
    ("DEALS_TO_SERVICES", 795),
    // Ticket associations
    ("TICKETS_TO_TICKETS", 452),
    ("TICKETS_TO_CONTACTS", 16),
    ("TICKETS_TO_COMPANIES", 339),
    ("TICKETS_TO_COMPANIES_PRIMARY", 26),
    ("TICKETS_TO_DEALS", 28),
    ("TICKETS_TO_CALLS", 219),
    ("TICKETS_TO_EMAILS", 223),
    ("TICKETS_TO_MEETINGS", 225),
    ("TICKETS_TO_NOTES", 227),
    ("TICKETS_TO_TASKS", 229),
    ("TICKETS_TO_COMMUNICATIONS", 84),
    ("TICKETS_TO_POSTAL_MAIL", 456),
    ("TICKETS_TO_THREADS", 32),
    ("TICKETS_TO_CONVERSATIONS", 278),
    ("TICKETS_TO_ORDERS", 526),
    ("TICKETS_TO_APPOINTMENTS", 947),
    ("TICKETS_TO_COURSES", 941),
    ("TICKETS_TO_LISTINGS", 943),
    ("TICKETS_TO_SERVICES", 797),
    // Lead associations
    ("LEADS_TO_PRIMARY_CONTACTS", 578),
    ("LEADS_TO_CONTACTS", 608),
    ("LEADS_TO_COMPANIES", 610),
    ("LEADS_TO_CALLS", 596),
    ("LEADS_TO_EMAILS", 598),
    ("LEADS_TO_MEETINGS", 600),
    ("LEADS_TO_NOTES", 854),
    ("LEADS_TO_TASKS", 646),
    ("LEADS_TO_COMMUNICATIONS", 602),
    // Appointment associations
    ("APPOINTMENTS_TO_CONTACTS", 966),
    ("APPOINTMENTS_TO_COMPANIES", 908),
    ("APPOINTMENTS_TO_DEALS", 944),
    ("APPOINTMENTS_TO_TICKETS", 946),
    ("APPOINTMENTS_TO_CALLS", 912),
    ("APPOINTMENTS_TO_EMAILS", 916),
    ("APPOINTMENTS_TO_MEETINGS", 918),
    ("APPOINTMENTS_TO_NOTES", 920),
    ("APPOINTMENTS_TO_TASKS", 922),
    ("APPOINTMENTS_TO_COMMUNICATIONS", 924),
    ("APPOINTMENTS_TO_POSTAL_MAIL", 926),
    // Course associations
    ("COURSES_TO_CONTACTS", 860),
    ("COURSES_TO_COMPANIES", 938),
    ("COURSES_TO_DEALS", 862),
    ("COURSES_TO_TICKETS", 940),
    ("COURSES_TO_CALLS", 866),
    ("COURSES_TO_EMAILS", 870),
    ("COURSES_TO_MEETINGS", 872),
    ("COURSES_TO_NOTES", 874),
    ("COURSES_TO_TASKS", 876),
    ("COURSES_TO_COMMUNICATIONS", 878),
    ("COURSES_TO_POSTAL_MAIL", 880),
    // Listing associations
    ("LISTINGS_TO_CONTACTS", 882),
    ("LISTINGS_TO_COMPANIES", 884),
    ("LISTINGS_TO_DEALS", 886),
    ("LISTINGS_TO_TICKETS", 942),
    ("LISTINGS_TO_CALLS", 890),
    ("LISTINGS_TO_EMAILS", 894),
    ("LISTINGS_TO_MEETINGS", 896),
    ("LISTINGS_TO_NOTES", 898),
    ("LISTINGS_TO_TASKS", 900),
    ("LISTINGS_TO_COMMUNICATIONS", 902),
    ("LISTINGS_TO_POSTAL_MAIL", 904),
    // Service associations
    ("SERVICES_TO_CONTACTS", 798),
    ("SERVICES_TO_COMPANIES", 792),
    ("SERVICES_TO_DEALS", 794),
    ("SERVICES_TO_TICKETS", 796),
    ("SERVICES_TO_CALLS", 840),
    ("SERVICES_TO_EMAILS", 842),
    ("SERVICES_TO_MEETINGS", 838),
    ("SERVICES_TO_NOTES", 836),
    ("SERVICES_TO_TASKS", 852),
    ("SERVICES_TO_COMMUNICATIONS", 846),
    ("SERVICES_TO_POSTAL_MAIL", 848),
    // Call associations
    ("CALLS_TO_CONTACTS", 194),
    ("CALLS_TO_COMPANIES", 182),
    ("CALLS_TO_DEALS", 206),
    ("CALLS_TO_TICKETS", 220),
    ("CALLS_TO_APPOINTMENTS", 913),
    ("CALLS_TO_COURSES", 867),
    ("CALLS_TO_LISTINGS", 891),
    ("CALLS_TO_SERVICES", 841),
    // Email associations
    ("EMAILS_TO_CONTACTS", 198),
    ("EMAILS_TO_COMPANIES", 186),
    ("EMAILS_TO_DEALS", 210),
    ("EMAILS_TO_TICKETS", 224),
    ("EMAILS_TO_APPOINTMENTS", 917),
    ("EMAILS_TO_COURSES", 871),
    ("EMAILS_TO_LISTINGS", 895),
    ("EMAILS_TO_SERVICES", 843),
    // Meeting associations
    ("MEETINGS_TO_CONTACTS", 200),
    ("MEETINGS_TO_COMPANIES", 188),
    ("MEETINGS_TO_DEALS", 212),
    ("MEETINGS_TO_TICKETS", 226),
    ("MEETINGS_TO_APPOINTMENTS", 919),
    ("MEETINGS_TO_COURSES", 873),
    ("MEETINGS_TO_LISTINGS", 897),
    ("MEETINGS_TO_SERVICES", 839),
    // Note associations
    ("NOTES_TO_CONTACTS", 202),
    ("NOTES_TO_COMPANIES", 190),
    ("NOTES_TO_DEALS", 214),
    ("NOTES_TO_TICKETS", 228),
    ("NOTES_TO_APPOINTMENTS", 921),
    ("NOTES_TO_COURSES", 875),
    ("NOTES_TO_LISTINGS", 899),
    ("NOTES_TO_SERVICES", 837),
    // Postal mail associations
    ("POSTAL_MAIL_TO_CONTACTS", 453),
    ("POSTAL_MAIL_TO_COMPANIES", 459),
    ("POSTAL_MAIL_TO_DEALS", 457),
    ("POSTAL_MAIL_TO_TICKETS", 455),
    ("POSTAL_MAIL_TO_APPOINTMENTS", 927),
    ("POSTAL_MAIL_TO_COURSES", 881),
    ("POSTAL_MAIL_TO_LISTINGS", 905),
    ("POSTAL_MAIL_TO_SERVICES", 849),
    // Task associations
    ("TASKS_TO_CONTACTS", 204),
    ("TASKS_TO_COMPANIES", 192),
    ("TASKS_TO_DEALS", 216),
    ("TASKS_TO_TICKETS", 230),
    ("TASKS_TO_APPOINTMENTS", 923),
    ("TASKS_TO_COURSES", 877),
    ("TASKS_TO_LISTINGS", 901),
    ("TASKS_TO_SERVICES", 853),
    // Communication associations
    ("COMMUNICATIONS_TO_CONTACTS", 81),
    ("COMMUNICATIONS_TO_COMPANIES", 87),
    ("COMMUNICATIONS_TO_DEALS", 85),
    ("COMMUNICATIONS_TO_TICKETS", 83),
    ("COMMUNICATIONS_TO_APPOINTMENTS", 925),
    ("COMMUNICATIONS_TO_COURSES", 879),
    ("COMMUNICATIONS_TO_LISTINGS", 903),
    ("COMMUNICATIONS_TO_SERVICES", 847),
    // Invoice associations
    ("INVOICES_TO_CONTACTS", 177),
    ("INVOICES_TO_COMPANIES", 179),
    ("INVOICES_TO_DEALS", 175),
    ("INVOICES_TO_QUOTES", 407),
    ("INVOICES_TO_SUBSCRIPTIONS", 622),
    ("INVOICES_TO_PAYMENT_LINKS", 815),
    ("INVOICES_TO_ORDERS", 517),
    ("INVOICES_TO_TICKETS", 986),
    ("INVOICES_TO_LINE_ITEMS", 409),
    ("INVOICES_TO_DISCOUNTS", 411),
    ("INVOICES_TO_FEES", 413),
    ("INVOICES_TO_TAXES", 415),
    ("INVOICES_TO_COMMERCE_PAYMENTS", 541),
    ("INVOICES_TO_PAYMENT_SCHEDULE_INSTALLMENTS", 691),
    ("INVOICES_TO_DATA_SYNC_STATES", 679),
    // Quote associations
    ("QUOTES_TO_CONTACTS", 69),
    ("QUOTES_TO_COMPANIES", 71),
    ("QUOTES_TO_DEALS", 64),
    ("QUOTES_TO_LINE_ITEMS", 67),
    ("QUOTES_TO_QUOTE_TEMPLATES", 286),
    ("QUOTES_TO_DISCOUNTS", 362),
    ("QUOTES_TO_FEES", 364),
    ("QUOTES_TO_TAXES", 366),
    ("QUOTES_TO_CONTACT_SIGNERS", 702),
    ("QUOTES_TO_CARTS", 733),
    ("QUOTES_TO_INVOICES", 408),
    ("QUOTES_TO_ORDERS", 731),
    ("QUOTES_TO_PAYMENTS", 398),
    ("QUOTES_TO_SUBSCRIPTIONS", 304),
    // Line item associations
    ("LINE_ITEMS_TO_ABANDONED_CARTS", 571),
    ("LINE_ITEMS_TO_CARTS", 591),
    ("LINE_ITEMS_TO_COMMERCE_PAYMENTS", 396),
    ("LINE_ITEMS_TO_DEALS", 20),
    ("LINE_ITEMS_TO_DISCOUNTS", 368),
    ("LINE_ITEMS_TO_INVOICES", 410),
    ("LINE_ITEMS_TO_ORDERS", 514),
    ("LINE_ITEMS_TO_PAYMENT_LINKS", 759),
    ("LINE_ITEMS_TO_QUOTES", 68),
    ("LINE_ITEMS_TO_SUBSCRIPTIONS", 302),
    ("LINE_ITEMS_TO_UPCOMING_SUBSCRIPTIONS", 565),
    // Order associations
    ("ORDERS_TO_CARTS", 593),
    ("ORDERS_TO_CONTACTS", 507),
    ("ORDERS_TO_COMPANIES", 509),
    ("ORDERS_TO_DEALS", 512),
    ("ORDERS_TO_DISCOUNTS", 519),
    ("ORDERS_TO_DISCOUNT_CODES", 521),
    ("ORDERS_TO_INVOICES", 518),
    ("ORDERS_TO_LINE_ITEMS", 513),
    ("ORDERS_TO_PAYMENTS", 523),
    ("ORDERS_TO_QUOTES", 730),
    ("ORDERS_TO_SUBSCRIPTIONS", 516),
    ("ORDERS_TO_TASKS", 726),
    ("ORDERS_TO_TICKETS", 525),
    // Cart associations
    ("CARTS_TO_CONTACTS", 586),
    ("CARTS_TO_DISCOUNTS", 588),
    ("CARTS_TO_LINE_ITEMS", 590),
    ("CARTS_TO_ORDERS", 592),
    ("CARTS_TO_QUOTES", 732),
    ("CARTS_TO_TASKS", 728),
    ("CARTS_TO_TICKETS", 594),
];

static CATALOG: Lazy<HashMap<&'static str, AssociationTypeId>> =
    Lazy::new(|| CATALOG_ENTRIES.iter().copied().collect());

/// Resolve the default association type id for an ordered object type pair.
///
/// Table hit first, derived-key catalog second, error otherwise. The same
/// inputs always produce the same result.
pub fn resolve_association_type(
    from_type: &str,
    to_type: &str,
) -> ClientResult<AssociationTypeId> {
    if let Some(id) = RESOLUTION_TABLE
        .get(from_type)
        .and_then(|row| row.get(to_type))
    {
        return Ok(*id);
    }

    let derived = format!(
        "{}_TO_{}",
        from_type.to_uppercase(),
        to_type.to_uppercase()
    );
    if let Some(id) = CATALOG.get(derived.as_str()) {
        debug!(from_type, to_type, key = %derived, "association type resolved via catalog fallback");
        return Ok(*id);
    }

    Err(ClientError::unresolved_association_type(from_type, to_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_hit_returns_primary_variant() {
        // The table prefers the primary-contact label over the generic
        // COMPANIES_TO_CONTACTS (280) the catalog would produce.
        assert_eq!(resolve_association_type("companies", "contacts").unwrap(), 2);
        assert_eq!(resolve_association_type("contacts", "companies").unwrap(), 1);
    }

    #[test]
    fn test_table_hit_takes_precedence_over_catalog() {
        // Both sources know deals -> companies; the table's primary id (5)
        // must win over the catalog's generic 341.
        assert_eq!(resolve_association_type("deals", "companies").unwrap(), 5);
        assert_eq!(CATALOG["DEALS_TO_COMPANIES"], 341);
    }

    #[test]
    fn test_resolution_is_asymmetric() {
        assert_eq!(resolve_association_type("deals", "contacts").unwrap(), 3);
        assert_eq!(resolve_association_type("contacts", "deals").unwrap(), 4);
    }

    #[test]
    fn test_catalog_fallback_for_pairs_missing_from_table() {
        // carts has no table row at all
        assert_eq!(resolve_association_type("carts", "tickets").unwrap(), 594);
        // engagement-to-record pairs only exist in the catalog
        assert_eq!(resolve_association_type("calls", "contacts").unwrap(), 194);
        assert_eq!(resolve_association_type("notes", "deals").unwrap(), 214);
        // commerce pairs likewise
        assert_eq!(resolve_association_type("invoices", "taxes").unwrap(), 415);
        assert_eq!(
            resolve_association_type("line_items", "quotes").unwrap(),
            68
        );
    }

    #[test]
    fn test_unknown_pair_is_an_error() {
        let err = resolve_association_type("contacts", "goals").unwrap_err();
        match err {
            ClientError::UnresolvedAssociationType { from_type, to_type } => {
                assert_eq!(from_type, "contacts");
                assert_eq!(to_type, "goals");
            }
            other => panic!("Expected UnresolvedAssociationType, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_pair_fails_the_same_way_every_time() {
        for _ in 0..3 {
            assert!(resolve_association_type("products", "goals").is_err());
        }
    }

    #[test]
    fn test_table_only_references_known_object_types() {
        for &(from, row) in TABLE {
            assert!(is_known_object_type(from), "unknown from type {from}");
            for &(to, id) in row {
                assert!(is_known_object_type(to), "unknown to type {to}");
                assert!(id > 0, "{from} -> {to} has non-positive id");
            }
        }
    }

    #[test]
    fn test_catalog_has_no_duplicate_keys() {
        assert_eq!(CATALOG.len(), CATALOG_ENTRIES.len());
    }

    #[test]
    fn test_default_association_type_id_is_the_generic_one() {
        assert_eq!(DEFAULT_ASSOCIATION_TYPE_ID, 1);
    }

    #[test]
    fn test_object_type_membership() {
        assert!(is_known_object_type("contacts"));
        assert!(is_known_object_type("postal_mail"));
        assert!(!is_known_object_type("contact"));
        assert!(!is_known_object_type("p_custom_pets"));
        assert!(!is_known_object_type(""));
    }

    #[test]
    fn test_association_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&AssociationCategory::HubspotDefined).unwrap(),
            "\"HUBSPOT_DEFINED\""
        );
        assert_eq!(
            serde_json::to_string(&AssociationCategory::UserDefined).unwrap(),
            "\"USER_DEFINED\""
        );
    }
}
