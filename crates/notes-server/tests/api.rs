#![cfg(feature = "integration-tests")]

//! End-to-end tests for the notes API against a real mongod.
//!
//! Each test builds the full router over its own throwaway database and
//! drives it with `tower::ServiceExt::oneshot`. Run with a local mongod
//! (honors `MONGODB_URI`):
//!
//! ```text
//! cargo test -p notes-server --features integration-tests
//! ```

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use notes_server::{routes, state::AppState};
use notes_store::{NewCategory, ObjectId, Store, StoreConfig};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> (Router, Store) {
    let config = StoreConfig {
        uri: std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        database: format!("notes-api-test-{}", ObjectId::new().to_hex()),
    };
    let store = Store::connect(config)
        .await
        .expect("integration tests require a running mongod");

    let app = routes::build_router(AppState::new(store.clone()));
    (app, store)
}

async fn drop_db(store: &Store) {
    store.database().drop().await.ok();
}

/// Send a request and return (status, parsed JSON body or Null if empty).
async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

async fn seed_category(store: &Store, name: &str) -> String {
    store
        .insert_category(NewCategory {
            name: name.to_string(),
        })
        .await
        .unwrap()
        .id
        .to_hex()
}

#[tokio::test]
async fn note_lifecycle() {
    let (app, store) = test_app().await;
    let category_id = seed_category(&store, "Work").await;

    // Create
    let (status, created) = request(
        &app,
        Method::POST,
        "/api/notes",
        Some(json!({ "title": "T", "content": "body", "categoryId": category_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["categoryId"], category_id);
    assert_eq!(created["title"], "T");
    let note_id = created["id"].as_str().unwrap().to_string();

    // Listed under its category
    let (status, listed) = request(
        &app,
        Method::GET,
        &format!("/api/notes/categories/{category_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert!(listed.iter().any(|n| n["id"] == note_id.as_str()));

    // Fetch by id
    let (status, fetched) =
        request(&app, Method::GET, &format!("/api/notes/{note_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["content"], "body");

    // Delete: 204 with empty body, then gone
    let (status, body) =
        request(&app, Method::DELETE, &format!("/api/notes/{note_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) =
        request(&app, Method::GET, &format!("/api/notes/{note_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found");

    drop_db(&store).await;
}

#[tokio::test]
async fn create_with_unknown_category_persists_nothing() {
    let (app, store) = test_app().await;

    let missing = ObjectId::new().to_hex();
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/notes",
        Some(json!({ "title": "T", "content": "body", "categoryId": missing })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");
    assert!(store.list_notes().await.unwrap().is_empty());

    drop_db(&store).await;
}

#[tokio::test]
async fn incomplete_payload_is_rejected_before_the_store() {
    let (app, store) = test_app().await;
    let category_id = seed_category(&store, "Work").await;

    for payload in [
        json!({ "content": "body", "categoryId": category_id }),
        json!({ "title": "T", "categoryId": category_id }),
        json!({ "title": "T", "content": "body" }),
        json!({ "title": "", "content": "body", "categoryId": category_id }),
    ] {
        let (status, body) = request(&app, Method::POST, "/api/notes", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Title, content, and categoryId are required");
    }

    assert!(store.list_notes().await.unwrap().is_empty());

    drop_db(&store).await;
}

#[tokio::test]
async fn get_unknown_note_is_404() {
    let (app, store) = test_app().await;

    let missing = ObjectId::new().to_hex();
    let (status, body) =
        request(&app, Method::GET, &format!("/api/notes/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found");

    drop_db(&store).await;
}

#[tokio::test]
async fn malformed_note_id_is_a_generic_500() {
    let (app, store) = test_app().await;

    let (status, body) = request(&app, Method::GET, "/api/notes/not-an-id", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch note");

    drop_db(&store).await;
}

#[tokio::test]
async fn update_with_unknown_category_leaves_note_unmodified() {
    let (app, store) = test_app().await;
    let category_id = seed_category(&store, "Work").await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/notes",
        Some(json!({ "title": "Original", "content": "body", "categoryId": category_id })),
    )
    .await;
    let note_id = created["id"].as_str().unwrap().to_string();

    let missing = ObjectId::new().to_hex();
    let (status, body) = request(
        &app,
        Method::PUT,
        &format!("/api/notes/{note_id}"),
        Some(json!({ "title": "Changed", "content": "new", "categoryId": missing })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");

    let (_, fetched) = request(&app, Method::GET, &format!("/api/notes/{note_id}"), None).await;
    assert_eq!(fetched["title"], "Original");
    assert_eq!(fetched["categoryId"], category_id);

    drop_db(&store).await;
}

#[tokio::test]
async fn update_replaces_fields_without_refreshing_updated_at() {
    let (app, store) = test_app().await;
    let work = seed_category(&store, "Work").await;
    let home = seed_category(&store, "Home").await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/notes",
        Some(json!({ "title": "Original", "content": "body", "categoryId": work })),
    )
    .await;
    let note_id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/notes/{note_id}"),
        Some(json!({ "title": "Changed", "content": "new body", "categoryId": home })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Changed");
    assert_eq!(updated["categoryId"], home);
    assert_eq!(updated["updatedAt"], created["updatedAt"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    drop_db(&store).await;
}

#[tokio::test]
async fn update_of_unknown_note_is_404() {
    let (app, store) = test_app().await;
    let category_id = seed_category(&store, "Work").await;

    let missing = ObjectId::new().to_hex();
    let (status, body) = request(
        &app,
        Method::PUT,
        &format!("/api/notes/{missing}"),
        Some(json!({ "title": "T", "content": "body", "categoryId": category_id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found");

    drop_db(&store).await;
}

#[tokio::test]
async fn delete_of_unknown_note_is_404() {
    let (app, store) = test_app().await;

    let missing = ObjectId::new().to_hex();
    let (status, body) =
        request(&app, Method::DELETE, &format!("/api/notes/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found");

    drop_db(&store).await;
}

#[tokio::test]
async fn listing_by_unknown_category_is_404() {
    let (app, store) = test_app().await;

    let missing = ObjectId::new().to_hex();
    let (status, body) = request(
        &app,
        Method::GET,
        &format!("/api/notes/categories/{missing}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");

    drop_db(&store).await;
}

#[tokio::test]
async fn list_all_notes_spans_categories() {
    let (app, store) = test_app().await;
    let work = seed_category(&store, "Work").await;
    let home = seed_category(&store, "Home").await;

    for (title, category) in [("a", &work), ("b", &home)] {
        let (status, _) = request(
            &app,
            Method::POST,
            "/api/notes",
            Some(json!({ "title": title, "content": "body", "categoryId": category })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = request(&app, Method::GET, "/api/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);

    drop_db(&store).await;
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let (app, store) = test_app().await;

    let (status, body) = request(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    drop_db(&store).await;
}
