use crate::domain::{fallback_places, normalize, Comment, Listing};
use crate::errors::ServerError;
use crate::geo::{parse_limit, parse_long_lat};
use crate::photos::PhotoSource;
use crate::places::{PlaceLookup, PlaceSearch};
use crate::store::{RecordStore, StoreRecord};
use serde::Serialize;
use std::sync::Arc;

/// The request pipeline: validation → external lookups → normalization →
/// fallback-on-failure, plus the vote/comment operations against the record
/// store. Adapters are trait objects so tests can substitute fakes; `Arc`
/// lets one service be cloned across server workers.
#[derive(Clone)]
pub struct CoffeeService {
    photos: Arc<dyn PhotoSource + Send + Sync>,
    search: Arc<dyn PlaceSearch + Send + Sync>,
    lookup: Arc<dyn PlaceLookup + Send + Sync>,
    store: Arc<dyn RecordStore + Send + Sync>,
}

/// Persisted comment data for one listing, in the serialized form the store
/// keeps it in.
#[derive(Debug, Serialize)]
pub struct CommentBundle {
    pub comments: String,
    #[serde(rename = "userRatings")]
    pub user_ratings: String,
    pub votes: i64,
}

impl CoffeeService {
    pub fn new(
        photos: Arc<dyn PhotoSource + Send + Sync>,
        search: Arc<dyn PlaceSearch + Send + Sync>,
        lookup: Arc<dyn PlaceLookup + Send + Sync>,
        store: Arc<dyn RecordStore + Send + Sync>,
    ) -> Self {
        Self {
            photos,
            search,
            lookup,
            store,
        }
    }

    /// Nearby listings for a validated coordinate pair. Only input
    /// validation can fail: a dead search backend is answered with the
    /// fixed fallback pair, and an empty search result stays empty.
    pub fn list_nearby(&self, long_lat: &str, limit_raw: &str) -> Result<Vec<Listing>, ServerError> {
        let coords = parse_long_lat(long_lat)?;
        let limit = parse_limit(limit_raw)?;

        let photos = self.photos.fetch_photos();

        let records = match self.search.search(&coords, limit) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("⚠️ Place search failed, serving fallback listings: {e}");
                fallback_places(limit)
            }
        };

        Ok(records
            .iter()
            .enumerate()
            .map(|(idx, record)| normalize(idx, record, &photos))
            .collect())
    }

    /// One listing by place id. The live geocoding lookup degrades to the
    /// persisted record when it fails; `Ok(None)` means not-found, never an
    /// error. Record-store failures still propagate.
    pub fn get_one(&self, id: &str, idx_raw: &str) -> Result<Option<Listing>, ServerError> {
        if id.trim().is_empty() {
            return Err(ServerError::BadRequest("Coffee shop ID required".to_string()));
        }

        let idx = idx_raw.trim().parse::<usize>().unwrap_or(0);

        let live = match self.lookup.lookup(id) {
            Ok(feature) => feature,
            Err(e) => {
                eprintln!("⚠️ Place lookup failed for {id}: {e}");
                None
            }
        };

        let persisted = self.store.find_by_external_id(id)?;

        match (live, persisted) {
            (Some(raw), persisted) => {
                let photos = self.photos.fetch_photos();
                let mut listing = normalize(idx, &raw, &photos);
                if let Some(record) = persisted {
                    listing.voting = record.fields.voting;
                    listing.comments = record.fields.comments;
                    listing.user_ratings = record.fields.user_ratings;
                }
                Ok(Some(listing))
            }
            (None, Some(record)) => Ok(Some(record.fields)),
            (None, None) => Ok(None),
        }
    }

    /// Find-or-create the persisted record backing a listing.
    pub fn ensure_persisted(&self, listing: &Listing) -> Result<StoreRecord, ServerError> {
        if listing.id.trim().is_empty() || listing.name.trim().is_empty() {
            return Err(ServerError::BadRequest(
                "Coffee shop ID and name required".to_string(),
            ));
        }
        Ok(self.store.create_if_absent(listing)?)
    }

    /// Upvote by external id. The listing must already be persisted.
    pub fn vote(&self, id: &str) -> Result<i64, ServerError> {
        if id.trim().is_empty() {
            return Err(ServerError::BadRequest("Coffee shop ID required".to_string()));
        }

        let record = self
            .store
            .find_by_external_id(id)?
            .ok_or(ServerError::NotFound)?;

        Ok(self.store.increment_vote(&record.record_id)?)
    }

    pub fn add_comment(
        &self,
        id: &str,
        author: &str,
        text: &str,
        rating: i64,
    ) -> Result<(), ServerError> {
        if id.trim().is_empty() {
            return Err(ServerError::BadRequest("Coffee shop ID required".to_string()));
        }
        if author.trim().is_empty() || text.trim().is_empty() {
            return Err(ServerError::BadRequest(
                "Comment author and text required".to_string(),
            ));
        }
        if !(1..=5).contains(&rating) {
            return Err(ServerError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let record = self
            .store
            .find_by_external_id(id)?
            .ok_or(ServerError::NotFound)?;

        let comment = Comment::new(author.trim(), text.trim(), rating);
        Ok(self.store.append_comment(&record.record_id, &comment)?)
    }

    pub fn comments(&self, id: &str) -> Result<CommentBundle, ServerError> {
        if id.trim().is_empty() {
            return Err(ServerError::BadRequest("Coffee shop ID required".to_string()));
        }

        let record = self
            .store
            .find_by_external_id(id)?
            .ok_or(ServerError::NotFound)?;

        Ok(CommentBundle {
            comments: record.fields.comments,
            user_ratings: record.fields.user_ratings,
            votes: record.fields.voting,
        })
    }
}
