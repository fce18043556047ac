use crate::domain::{Comment, Listing};
use crate::store::records::StoreRecord;
use crate::store::{RecordStore, StoreError};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

const AIRTABLE_API_BASE: &str = "https://api.airtable.com/v0";

/// Airtable-backed record store. The client is injected so the whole store
/// can be swapped for an in-memory fake in tests.
pub struct AirtableStore {
    client: Client,
    token: String,
    base_id: String,
    table: String,
}

#[derive(Debug, Deserialize)]
struct RecordList {
    #[serde(default)]
    records: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    id: String,
    #[serde(default)]
    fields: Listing,
}

impl From<RawRecord> for StoreRecord {
    fn from(raw: RawRecord) -> Self {
        StoreRecord {
            record_id: raw.id,
            fields: raw.fields,
        }
    }
}

impl AirtableStore {
    pub fn new(client: Client, token: String, base_id: String, table: String) -> Self {
        Self {
            client,
            token,
            base_id,
            table,
        }
    }

    fn table_url(&self) -> Result<Url, StoreError> {
        let mut url =
            Url::parse(AIRTABLE_API_BASE).map_err(|e| StoreError::Malformed(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Malformed("store base URL is not a base".to_string()))?
            .push(&self.base_id)
            .push(&self.table);
        Ok(url)
    }

    fn record_url(&self, record_id: &str) -> Result<Url, StoreError> {
        let mut url = self.table_url()?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Malformed("store base URL is not a base".to_string()))?
            .push(record_id);
        Ok(url)
    }

    fn check_status(resp: Response) -> Result<Response, StoreError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            Err(StoreError::Api(status.as_u16(), text))
        }
    }

    fn get_record(&self, record_id: &str) -> Result<StoreRecord, StoreError> {
        let resp = self
            .client
            .get(self.record_url(record_id)?)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let raw: RawRecord = Self::check_status(resp)?
            .json()
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(raw.into())
    }

    fn patch_fields(&self, record_id: &str, fields: Value) -> Result<StoreRecord, StoreError> {
        let body = json!({
            "records": [
                {
                    "id": record_id,
                    "fields": fields,
                }
            ]
        });

        let resp = self
            .client
            .patch(self.table_url()?)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let list: RecordList = Self::check_status(resp)?
            .json()
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        list.records
            .into_iter()
            .next()
            .map(StoreRecord::from)
            .ok_or_else(|| StoreError::Malformed("no records updated".to_string()))
    }
}

impl RecordStore for AirtableStore {
    fn find_by_external_id(&self, id: &str) -> Result<Option<StoreRecord>, StoreError> {
        // The formula only supports exact equality; embedded quotes would
        // break out of the string literal, so they are stripped.
        let clean_id = id.replace('"', "");
        let formula = format!("{{id}} = \"{clean_id}\"");

        let resp = self
            .client
            .get(self.table_url()?)
            .query(&[("filterByFormula", formula.as_str())])
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let list: RecordList = Self::check_status(resp)?
            .json()
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        Ok(list.records.into_iter().next().map(StoreRecord::from))
    }

    fn create_if_absent(&self, listing: &Listing) -> Result<StoreRecord, StoreError> {
        if let Some(existing) = self.find_by_external_id(&listing.id)? {
            return Ok(existing);
        }

        let body = json!({
            "records": [
                { "fields": listing }
            ]
        });

        let resp = self
            .client
            .post(self.table_url()?)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let list: RecordList = Self::check_status(resp)?
            .json()
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        list.records
            .into_iter()
            .next()
            .map(StoreRecord::from)
            .ok_or_else(|| StoreError::Malformed("no records created".to_string()))
    }

    fn increment_vote(&self, record_id: &str) -> Result<i64, StoreError> {
        let current = self.get_record(record_id)?;
        let next = current.fields.voting + 1;
        self.patch_fields(record_id, json!({ "voting": next }))?;
        Ok(next)
    }

    fn append_comment(&self, record_id: &str, comment: &Comment) -> Result<(), StoreError> {
        let current = self.get_record(record_id)?;

        // A previously mangled array is treated as empty rather than
        // blocking new comments forever.
        let mut comments: Vec<Comment> =
            serde_json::from_str(&current.fields.comments).unwrap_or_default();
        let mut ratings: Vec<i64> =
            serde_json::from_str(&current.fields.user_ratings).unwrap_or_default();

        comments.push(comment.clone());
        ratings.push(comment.rating);

        let fields = json!({
            "comments": serde_json::to_string(&comments)
                .map_err(|e| StoreError::Malformed(e.to_string()))?,
            "userRatings": serde_json::to_string(&ratings)
                .map_err(|e| StoreError::Malformed(e.to_string()))?,
        });

        self.patch_fields(record_id, fields)?;
        Ok(())
    }
}
