use crate::domain::{Comment, Listing};
use crate::geo::LongLat;
use crate::photos::PhotoSource;
use crate::places::{PlaceLookup, PlaceProperties, PlaceRecord, PlaceSearch, SearchError};
use crate::service::CoffeeService;
use crate::store::{RecordStore, StoreError, StoreRecord};
use std::sync::{Arc, Mutex};

/// Photo source returning a fixed list.
pub struct FixedPhotos(pub Vec<String>);

impl PhotoSource for FixedPhotos {
    fn fetch_photos(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Search backend scripted to either return records or fail outright.
pub enum SearchScript {
    Results(Vec<PlaceRecord>),
    Fail,
}

pub struct ScriptedSearch(pub SearchScript);

impl PlaceSearch for ScriptedSearch {
    fn search(&self, _coords: &LongLat, limit: usize) -> Result<Vec<PlaceRecord>, SearchError> {
        match &self.0 {
            SearchScript::Results(records) => {
                Ok(records.iter().take(limit).cloned().collect())
            }
            SearchScript::Fail => Err(SearchError::Network("connection refused".to_string())),
        }
    }
}

/// Lookup backend returning a fixed feature (or nothing).
pub struct ScriptedLookup(pub Option<PlaceRecord>);

impl PlaceLookup for ScriptedLookup {
    fn lookup(&self, _id: &str) -> Result<Option<PlaceRecord>, SearchError> {
        Ok(self.0.clone())
    }
}

/// Lookup backend that always fails, for the degradation path.
pub struct FailingLookup;

impl PlaceLookup for FailingLookup {
    fn lookup(&self, _id: &str) -> Result<Option<PlaceRecord>, SearchError> {
        Err(SearchError::Network("connection refused".to_string()))
    }
}

/// In-memory record store with the same read-modify-write semantics as the
/// real one.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<(String, Listing)>>,
}

impl RecordStore for MemoryStore {
    fn find_by_external_id(&self, id: &str) -> Result<Option<StoreRecord>, StoreError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|(_, fields)| fields.id == id)
            .map(|(record_id, fields)| StoreRecord {
                record_id: record_id.clone(),
                fields: fields.clone(),
            }))
    }

    fn create_if_absent(&self, listing: &Listing) -> Result<StoreRecord, StoreError> {
        if let Some(existing) = self.find_by_external_id(&listing.id)? {
            return Ok(existing);
        }

        let mut rows = self.rows.lock().unwrap();
        let record_id = format!("rec{}", rows.len());
        rows.push((record_id.clone(), listing.clone()));

        Ok(StoreRecord {
            record_id,
            fields: listing.clone(),
        })
    }

    fn increment_vote(&self, record_id: &str) -> Result<i64, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let (_, fields) = rows
            .iter_mut()
            .find(|(rid, _)| rid == record_id)
            .ok_or_else(|| StoreError::Api(404, "record not found".to_string()))?;

        fields.voting += 1;
        Ok(fields.voting)
    }

    fn append_comment(&self, record_id: &str, comment: &Comment) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let (_, fields) = rows
            .iter_mut()
            .find(|(rid, _)| rid == record_id)
            .ok_or_else(|| StoreError::Api(404, "record not found".to_string()))?;

        let mut comments: Vec<Comment> =
            serde_json::from_str(&fields.comments).unwrap_or_default();
        let mut ratings: Vec<i64> =
            serde_json::from_str(&fields.user_ratings).unwrap_or_default();

        comments.push(comment.clone());
        ratings.push(comment.rating);

        fields.comments = serde_json::to_string(&comments).unwrap();
        fields.user_ratings = serde_json::to_string(&ratings).unwrap();
        Ok(())
    }
}

pub fn make_service(
    photos: Vec<String>,
    search: SearchScript,
    lookup: Option<PlaceRecord>,
) -> (CoffeeService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = CoffeeService::new(
        Arc::new(FixedPhotos(photos)),
        Arc::new(ScriptedSearch(search)),
        Arc::new(ScriptedLookup(lookup)),
        store.clone(),
    );
    (service, store)
}

pub fn place(place_id: &str, title: &str, address: &str) -> PlaceRecord {
    PlaceRecord {
        place_id: Some(place_id.to_string()),
        title: Some(title.to_string()),
        address: Some(address.to_string()),
        ..PlaceRecord::default()
    }
}

pub fn geocoded_place(id: &str, text: &str, address: &str) -> PlaceRecord {
    PlaceRecord {
        id: Some(id.to_string()),
        text: Some(text.to_string()),
        properties: Some(PlaceProperties {
            address: Some(address.to_string()),
        }),
        ..PlaceRecord::default()
    }
}

pub fn listing(id: &str, name: &str, address: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        ..Listing::default()
    }
}
