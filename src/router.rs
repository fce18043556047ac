use crate::domain::Listing;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::service::CoffeeService;
use crate::templates;
use astra::Request;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct VoteBody {
    #[serde(default)]
    id: String,
}

#[derive(Debug, Deserialize)]
struct CommentBody {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    rating: i64,
}

pub fn handle(mut req: Request, service: &CoffeeService) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::home_page()),

        ("GET", "/api/health") => json_response(&json!({ "status": "ok" })),

        ("GET", "/api/coffee-shops") => {
            let params = parse_query(&req);
            let long_lat = params.get("longLat").map(String::as_str).unwrap_or("");
            let limit = params.get("limit").map(String::as_str).unwrap_or("");

            let listings = service.list_nearby(long_lat, limit)?;
            json_response(&listings)
        }

        ("GET", "/api/coffee-shop") => {
            let params = parse_query(&req);
            let id = params.get("id").map(String::as_str).unwrap_or("");
            let idx = params.get("idx").map(String::as_str).unwrap_or("0");

            match service.get_one(id, idx)? {
                Some(listing) => json_response(&listing),
                // An empty object signals "not found"; it is not an error.
                None => json_response(&json!({})),
            }
        }

        ("POST", "/api/coffee-shop") => {
            let listing: Listing = read_json_body(&mut req)?;
            let record = service.ensure_persisted(&listing)?;

            let mut value =
                serde_json::to_value(&record.fields).map_err(|_| ServerError::InternalError)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("recordId".to_string(), json!(record.record_id));
            }
            json_response(&value)
        }

        ("POST", "/api/coffee-shop/vote") => {
            let body: VoteBody = read_json_body(&mut req)?;
            let votes = service.vote(&body.id)?;
            json_response(&json!({ "id": body.id, "votes": votes }))
        }

        ("POST", "/api/coffee-shop/comments") => {
            let body: CommentBody = read_json_body(&mut req)?;
            service.add_comment(&body.id, &body.name, &body.comment, body.rating)?;
            json_response(&json!({ "message": "Comment added" }))
        }

        ("GET", "/api/coffee-shop/comments") => {
            let params = parse_query(&req);
            let id = params.get("id").map(String::as_str).unwrap_or("");

            let bundle = service.comments(id)?;
            json_response(&bundle)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn read_json_body<T: serde::de::DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable request body: {e}")))?;

    serde_json::from_slice(&buf)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {e}")))
}
