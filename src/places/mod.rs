mod error;
mod mapbox;
mod models;
mod serp;

pub use error::SearchError;
pub use mapbox::MapboxLookup;
pub use models::{PlaceProperties, PlaceRecord};
pub use serp::SerpPlaceSearch;

#[cfg(test)]
pub(crate) use serp::ll_param;

use crate::geo::LongLat;

/// Nearby search over the primary places backend. Results keep the upstream
/// ordering (relevance/distance-ranked by the service, never re-ranked here)
/// and are capped at `limit`. Total failure propagates: the caller owns the
/// fallback decision, not the adapter.
pub trait PlaceSearch {
    fn search(&self, coords: &LongLat, limit: usize) -> Result<Vec<PlaceRecord>, SearchError>;
}

/// Single-place lookup keyed by a place id (geocoding backend).
/// `None` means the id matched nothing.
pub trait PlaceLookup {
    fn lookup(&self, id: &str) -> Result<Option<PlaceRecord>, SearchError>;
}
