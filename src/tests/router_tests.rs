use crate::domain::Listing;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::service::CoffeeService;
use crate::tests::utils::{make_service, place, SearchScript};
use astra::{Body, Request, Response};
use serde_json::{json, Value};
use std::io::Read;

fn request(method: &str, uri: &str, body: String) -> Request {
    let mut req = Request::new(Body::from(body));
    *req.method_mut() = method.parse().unwrap();
    *req.uri_mut() = uri.parse().unwrap();
    req
}

fn get(uri: &str) -> Request {
    request("GET", uri, String::new())
}

fn post(uri: &str, body: Value) -> Request {
    request("POST", uri, body.to_string())
}

/// Run a request through the router the way main does: handler errors become
/// JSON error responses.
fn dispatch(req: Request, service: &CoffeeService) -> Response {
    match handle(req, service) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

fn body_string(resp: &mut Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn lists_nearby_coffee_shops() {
    let (service, _) = make_service(
        vec!["img-a.jpg".to_string()],
        SearchScript::Results(vec![place("p1", "Alpha Roasters", "1 Main St")]),
        None,
    );

    let mut resp = dispatch(get("/api/coffee-shops?longLat=40.7589,-73.9851&limit=5"), &service);
    assert_eq!(resp.status(), 200);

    let listings: Vec<Listing> = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, "p1");
    assert_eq!(listings[0].img_url, "img-a.jpg");
}

#[test]
fn rejects_invalid_coordinates_with_400() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let mut resp = dispatch(get("/api/coffee-shops?longLat=nope&limit=5"), &service);
    assert_eq!(resp.status(), 400);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["error"], "Invalid coordinates");
}

#[test]
fn rejects_invalid_limit_with_400() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let resp = dispatch(
        get("/api/coffee-shops?longLat=40.7589,-73.9851&limit=0"),
        &service,
    );
    assert_eq!(resp.status(), 400);
}

#[test]
fn unknown_listing_returns_empty_object() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let mut resp = dispatch(get("/api/coffee-shop?id=ghost&idx=0"), &service);
    assert_eq!(resp.status(), 200);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body, json!({}));
}

#[test]
fn create_then_vote_flow() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let create = json!({
        "id": "shop-1",
        "name": "Alpha Roasters",
        "address": "1 Main St",
        "imgUrl": "img-a.jpg"
    });
    let mut resp = dispatch(post("/api/coffee-shop", create), &service);
    assert_eq!(resp.status(), 200);

    let created: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(created["id"], "shop-1");
    assert_eq!(created["recordId"], "rec0");

    let mut resp = dispatch(post("/api/coffee-shop/vote", json!({ "id": "shop-1" })), &service);
    assert_eq!(resp.status(), 200);

    let voted: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(voted["votes"], 1);
}

#[test]
fn vote_for_unknown_listing_is_404() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let resp = dispatch(post("/api/coffee-shop/vote", json!({ "id": "ghost" })), &service);
    assert_eq!(resp.status(), 404);
}

#[test]
fn comment_flow_persists_and_reads_back() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    dispatch(
        post(
            "/api/coffee-shop",
            json!({ "id": "shop-1", "name": "Alpha", "address": "1 Main St" }),
        ),
        &service,
    );

    let resp = dispatch(
        post(
            "/api/coffee-shop/comments",
            json!({ "id": "shop-1", "name": "Ana", "comment": "Great espresso", "rating": 5 }),
        ),
        &service,
    );
    assert_eq!(resp.status(), 200);

    let mut resp = dispatch(get("/api/coffee-shop/comments?id=shop-1"), &service);
    assert_eq!(resp.status(), 200);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    let comments: Vec<Value> =
        serde_json::from_str(body["comments"].as_str().unwrap()).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["name"], "Ana");
    assert_eq!(body["userRatings"], "[5]");
}

#[test]
fn rejects_malformed_json_body() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let req = request("POST", "/api/coffee-shop/vote", "{not json".to_string());
    let resp = dispatch(req, &service);
    assert_eq!(resp.status(), 400);
}

#[test]
fn health_and_home_respond() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let mut resp = dispatch(get("/api/health"), &service);
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("ok"));

    let resp = dispatch(get("/"), &service);
    assert_eq!(resp.status(), 200);
}

#[test]
fn unknown_route_is_404() {
    let (service, _) = make_service(vec![], SearchScript::Results(vec![]), None);

    let resp = dispatch(get("/api/espresso-machines"), &service);
    assert_eq!(resp.status(), 404);
}
