use crate::domain::Listing;

/// One persisted row: the store's own record id plus the listing fields it
/// holds. Fields the store never saw come back as `Listing` defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRecord {
    pub record_id: String,
    pub fields: Listing,
}
