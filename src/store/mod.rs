mod airtable;
mod error;
mod records;

pub use airtable::AirtableStore;
pub use error::StoreError;
pub use records::StoreRecord;

use crate::domain::{Comment, Listing};

/// The external record store holding votes and comments, keyed by a
/// listing's external id.
///
/// Mutations are read-modify-write without locking: the backing store is a
/// last-write-wins spreadsheet, so concurrent writers to the same record can
/// lose updates. That is an accepted property of this design, not something
/// the adapter papers over.
pub trait RecordStore {
    /// First match wins if the store somehow holds more than one row for an
    /// id (treated as a data-integrity assumption, not enforced).
    fn find_by_external_id(&self, id: &str) -> Result<Option<StoreRecord>, StoreError>;

    /// Find-or-create. A concurrent create can race the existence check and
    /// leave a duplicate row; reads tolerate that via first-match-wins.
    fn create_if_absent(&self, listing: &Listing) -> Result<StoreRecord, StoreError>;

    /// Reads the current vote count and writes count+1, returning the new
    /// count.
    fn increment_vote(&self, record_id: &str) -> Result<i64, StoreError>;

    /// Appends to the serialized `comments`/`userRatings` arrays and writes
    /// both back whole.
    fn append_comment(&self, record_id: &str, comment: &Comment) -> Result<(), StoreError>;
}
