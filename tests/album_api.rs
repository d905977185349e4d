//! Album API Tests
//!
//! Drives the full router (health, albums, CORS, tracing layers) the way a
//! client would:
//! - Seeded catalogue lookups
//! - Create, read, update, delete round trips
//! - Malformed bodies always answer 400 with an `error` body
//! - Duplicate ids under both store policies

use std::sync::Arc;

use albumstore::album::{Album, AlbumRepository, DuplicatePolicy, InMemoryAlbumStore};
use albumstore::http_server::{HttpServer, HttpServerConfig};
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup(policy: DuplicatePolicy) -> (Arc<InMemoryAlbumStore>, Router) {
    let store = Arc::new(InMemoryAlbumStore::seeded(policy));
    let router = HttpServer::with_store(HttpServerConfig::default(), store.clone()).router();
    (store, router)
}

async fn request(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn raw_post(router: &Router, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/albums")
        .body(Body::from(body))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn as_album(value: Value) -> Album {
    serde_json::from_value(value).unwrap()
}

// =============================================================================
// Catalogue Scenario
// =============================================================================

/// The seeded walkthrough: read, create, delete, update, miss.
#[tokio::test]
async fn test_catalogue_walkthrough() {
    let (_store, router) = setup(DuplicatePolicy::Permissive);

    let (status, body) = request(&router, Method::GET, "/albums/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": "2", "title": "Jeru", "artist": "Gerry Mulligan", "price": 17.99})
    );

    let new_album = json!({"id": "4", "title": "X", "artist": "Y", "price": 1.0});
    let (status, created) =
        request(&router, Method::POST, "/albums", Some(new_album.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, new_album);

    let (status, fetched) = request(&router, Method::GET, "/albums/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, new_album);

    let (status, body) = request(&router, Method::DELETE, "/delete/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Album deleted succesfully."}));

    let (status, body) = request(&router, Method::GET, "/albums/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Album not found."}));

    let (status, body) = request(
        &router,
        Method::PUT,
        "/albums/1",
        Some(json!({"title": "New", "artist": "Coltrane", "price": 60})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Album updated succesfully."}));

    let (status, body) = request(&router, Method::GET, "/albums/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_album(body), Album::new("1", "New", "Coltrane", 60.0));

    let (status, body) = request(&router, Method::GET, "/albums/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Album not found."}));
}

#[tokio::test]
async fn test_list_returns_seed_in_order() {
    let (_store, router) = setup(DuplicatePolicy::Permissive);

    let (status, body) = request(&router, Method::GET, "/albums", None).await;
    assert_eq!(status, StatusCode::OK);

    let albums: Vec<Album> = serde_json::from_value(body).unwrap();
    let ids: Vec<_> = albums.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(albums[2].artist, "Sarah Vaughan");
}

/// Omitted update fields are overwritten with zero values.
#[tokio::test]
async fn test_update_without_fields_clears_them() {
    let (store, router) = setup(DuplicatePolicy::Permissive);

    let (status, _) = request(&router, Method::PUT, "/albums/2", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.get("2").unwrap(), Album::new("2", "", "", 0.0));
}

/// An id in the update body never renames the record.
#[tokio::test]
async fn test_update_ignores_body_id() {
    let (store, router) = setup(DuplicatePolicy::Permissive);

    let (status, _) = request(
        &router,
        Method::PUT,
        "/albums/3",
        Some(json!({"id": "30", "title": "Renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.get("3").unwrap().title, "Renamed");
    assert!(store.get("30").is_err());
}

#[tokio::test]
async fn test_delete_missing_album() {
    let (store, router) = setup(DuplicatePolicy::Permissive);

    let (status, body) = request(&router, Method::DELETE, "/delete/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Album not found."}));
    assert_eq!(store.len().unwrap(), 3);
}

// =============================================================================
// Malformed Input
// =============================================================================

#[tokio::test]
async fn test_create_rejects_malformed_bodies() {
    let (store, router) = setup(DuplicatePolicy::Permissive);

    for body in [
        "{\"id\": \"4\"",
        "[\"4\", \"X\", \"Y\", 1.0]",
        "{\"title\": \"No id\"}",
        "{\"id\": \"\"}",
        "{\"id\": \"4\", \"price\": \"cheap\"}",
        "{\"id\": 4}",
    ] {
        let (status, value) = raw_post(&router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(value["error"].is_string(), "body: {}", body);
    }

    assert_eq!(store.len().unwrap(), 3);
}

#[tokio::test]
async fn test_update_rejects_malformed_body() {
    let (store, router) = setup(DuplicatePolicy::Permissive);
    let before = store.get("1").unwrap();

    let (status, body) = request(
        &router,
        Method::PUT,
        "/albums/1",
        Some(json!({"title": "New", "price": "sixty"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid album"));
    assert_eq!(store.get("1").unwrap(), before);
}

/// `null` behaves like an omitted field; a `null` id is still rejected.
#[tokio::test]
async fn test_null_fields_take_zero_values() {
    let (store, router) = setup(DuplicatePolicy::Permissive);

    let (status, body) = request(
        &router,
        Method::POST,
        "/albums",
        Some(json!({"id": "4", "title": null})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "");
    assert_eq!(as_album(body), Album::new("4", "", "", 0.0));

    let (status, body) = request(
        &router,
        Method::PUT,
        "/albums/1",
        Some(json!({"title": "Blue Train", "artist": "John Coltrane", "price": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Album updated succesfully."}));
    assert_eq!(store.get("1").unwrap().price, 0.0);

    let (status, body) = raw_post(&router, "{\"id\": null, \"title\": \"X\"}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(store.len().unwrap(), 4);
}

#[tokio::test]
async fn test_create_ignores_unknown_fields() {
    let (_store, router) = setup(DuplicatePolicy::Permissive);

    let (status, body) = request(
        &router,
        Method::POST,
        "/albums",
        Some(json!({"id": "5", "title": "Kind of Blue", "label": "Columbia"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_album(body), Album::new("5", "Kind of Blue", "", 0.0));
}

// =============================================================================
// Duplicate Ids
// =============================================================================

/// Permissive policy: the duplicate is stored, lookups keep resolving to the
/// older record, and deleting it exposes the newer one.
#[tokio::test]
async fn test_duplicate_id_permissive() {
    let (store, router) = setup(DuplicatePolicy::Permissive);

    let (status, _) = request(
        &router,
        Method::POST,
        "/albums",
        Some(json!({"id": "1", "title": "Shadow", "artist": "Nobody", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.len().unwrap(), 4);

    let (_, body) = request(&router, Method::GET, "/albums/1", None).await;
    assert_eq!(body["title"], "Blue Train");

    let (status, _) = request(&router, Method::DELETE, "/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(&router, Method::GET, "/albums/1", None).await;
    assert_eq!(body["title"], "Shadow");
}

/// Reject policy: the insert answers 409 and the store is unchanged.
#[tokio::test]
async fn test_duplicate_id_rejected() {
    let (store, router) = setup(DuplicatePolicy::Reject);

    let (status, body) = request(
        &router,
        Method::POST,
        "/albums",
        Some(json!({"id": "1", "title": "Shadow"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("'1'"));
    assert_eq!(store.len().unwrap(), 3);
    assert_eq!(store.get("1").unwrap().title, "Blue Train");
}
