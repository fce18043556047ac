use serde::{Deserialize, Serialize};

/// The unified coffee-shop record: search-provider data blended with the
/// persisted vote/comment data. Every field is always populated — callers
/// never see a missing field, only a type-appropriate default.
///
/// `comments` and `userRatings` are serialized JSON arrays because that is
/// how the spreadsheet-backed record store holds them; they are only ever
/// rewritten by the append operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub address: String,
    pub img_url: String,
    pub voting: i64,

    pub description: String,
    pub rating: f64,
    pub total_reviews: i64,
    pub price_range: String,
    pub offerings: String,

    pub comments: String,
    pub user_ratings: String,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            address: String::new(),
            img_url: String::new(),
            voting: 0,
            description: String::new(),
            rating: 0.0,
            total_reviews: 0,
            price_range: String::new(),
            offerings: "[]".to_string(),
            comments: "[]".to_string(),
            user_ratings: "[]".to_string(),
        }
    }
}
