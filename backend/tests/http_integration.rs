//! End-to-end tests of the axum router.

#![cfg(feature = "http-server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use makanlist::db::RepositoryFactory;
use makanlist::http::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::new(RepositoryFactory::create_local()))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_html(uri: &str) -> (StatusCode, String) {
    let (status, content_type, body) = get(uri).await;
    assert!(content_type.unwrap_or_default().starts_with("text/html"));
    (status, String::from_utf8(body).unwrap())
}

fn venue_names(value: &serde_json::Value) -> Vec<String> {
    value["venues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog"], "loaded");
}

#[tokio::test]
async fn test_venues_without_params_returns_everything() {
    let (status, body) = get_json("/v1/venues").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["label"], "3 results");
}

#[tokio::test]
async fn test_venues_query_by_tag() {
    let (_, body) = get_json("/v1/venues?q=bbq").await;
    assert_eq!(venue_names(&body), vec!["Seoul Charcoal BBQ"]);
    assert_eq!(body["label"], "1 result");
    assert_eq!(
        body["venues"][0]["booking"]["href"],
        "https://www.chope.co/singapore-restaurants/?utm_source=your-site&utm_medium=affiliate"
    );
}

#[tokio::test]
async fn test_venues_combined_filters() {
    let (_, body) = get_json("/v1/venues?q=&area=Bugis&cuisine=Desserts&max_price=1").await;
    assert_eq!(venue_names(&body), vec!["Snow & Sago"]);
}

#[tokio::test]
async fn test_venues_query_with_space() {
    let (_, body) = get_json("/v1/venues?q=late%20night").await;
    assert_eq!(venue_names(&body), vec!["Snow & Sago"]);
}

#[tokio::test]
async fn test_venues_empty_result() {
    let (status, body) = get_json("/v1/venues?area=Novena").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["label"], "0 results");
}

#[tokio::test]
async fn test_venues_price_out_of_range() {
    let (status, body) = get_json("/v1/venues?max_price=4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

async fn assert_json_bad_request(uri: &str) {
    let (status, content_type, body) = get(uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    assert_eq!(content_type.as_deref(), Some("application/json"), "{}", uri);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST", "{}", uri);
}

#[tokio::test]
async fn test_venues_price_not_a_number() {
    assert_json_bad_request("/v1/venues?max_price=cheap").await;
}

#[tokio::test]
async fn test_price_outside_u8_is_json_error() {
    for uri in [
        "/v1/venues?max_price=300",
        "/v1/venues?max_price=-1",
        "/?max_price=300",
        "/?max_price=-1",
    ] {
        assert_json_bad_request(uri).await;
    }
}

#[tokio::test]
async fn test_blank_price_is_top_tier() {
    let (status, body) = get_json("/v1/venues?max_price=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_get_venue() {
    let (status, body) = get_json("/v1/venues/dessert-bugis-03").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Snow & Sago");
    assert_eq!(body["price_label"], "$");
}

#[tokio::test]
async fn test_get_unknown_venue() {
    let (status, body) = get_json("/v1/venues/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_posts() {
    let (status, body) = get_json("/v1/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["posts"][0]["href"], "/best-ramen-orchard");
}

#[tokio::test]
async fn test_filters() {
    let (_, body) = get_json("/v1/filters").await;
    assert_eq!(body["areas"].as_array().unwrap().len(), 6);
    assert_eq!(body["cuisines"].as_array().unwrap().len(), 9);
    assert_eq!(body["price_tiers"][2]["label"], "$$$");
}

#[tokio::test]
async fn test_landing_page_renders() {
    let (status, html) = get_html("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Curated picks"));
    assert!(html.contains("3 results"));
    assert!(html.contains("Latest listicles"));
    assert!(html.contains("rel=\"nofollow noopener\""));
}

#[tokio::test]
async fn test_landing_page_filters() {
    let (_, html) = get_html("/?q=ramen").await;
    assert!(html.contains("1 result"));
    assert!(html.contains("Ramen Gokoro"));
    assert!(!html.contains("data-venue=\"bbq-tanjong-02\""));
}

#[tokio::test]
async fn test_landing_page_rejects_bad_price() {
    let (status, body) = get_json("/?max_price=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("between 1 and 3"));
}

#[tokio::test]
async fn test_post_pages_are_not_served() {
    let (status, body) = get_json("/best-ramen-orchard").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No route for /best-ramen-orchard");
}
