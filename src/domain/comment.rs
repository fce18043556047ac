use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One user comment as stored inside a listing's serialized `comments`
/// array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub name: String,
    pub comment: String,
    pub rating: i64,
    pub timestamp: String,
}

impl Comment {
    pub fn new(name: &str, comment: &str, rating: i64) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            name: name.to_string(),
            comment: comment.to_string(),
            rating,
            timestamp: now.to_rfc3339(),
        }
    }
}
