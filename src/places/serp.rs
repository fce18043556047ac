use crate::geo::LongLat;
use crate::places::models::PlaceRecord;
use crate::places::{PlaceSearch, SearchError};
use reqwest::blocking::Client;
use serde::Deserialize;

const SERP_SEARCH_URL: &str = "https://serpapi.com/search.json";
const SEARCH_QUERY: &str = "coffee shop";

/// Maps-search backend. This is the primary place source: it takes a
/// coordinate pair plus a free-text query and returns relevance-ranked
/// local results.
pub struct SerpPlaceSearch {
    client: Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    local_results: Vec<PlaceRecord>,
}

impl SerpPlaceSearch {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

// Public input is "lng,lat" but this backend wants latitude first.
pub(crate) fn ll_param(coords: &LongLat) -> String {
    format!("@{},{},15z", coords.lat, coords.lng)
}

impl PlaceSearch for SerpPlaceSearch {
    fn search(&self, coords: &LongLat, limit: usize) -> Result<Vec<PlaceRecord>, SearchError> {
        let ll = ll_param(coords);

        let resp = self
            .client
            .get(SERP_SEARCH_URL)
            .query(&[
                ("engine", "google_maps"),
                ("q", SEARCH_QUERY),
                ("ll", ll.as_str()),
                ("type", "search"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(SearchError::BadStatus(status.as_u16(), text));
        }

        let body: SerpResponse = resp
            .json()
            .map_err(|e| SearchError::JsonParse(e.to_string()))?;

        let mut records = body.local_results;
        records.truncate(limit);
        Ok(records)
    }
}
