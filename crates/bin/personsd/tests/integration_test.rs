//! End-to-end smoke tests for the full personsd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use persons_adapter_http_axum::router;
use persons_adapter_http_axum::state::AppState;
use persons_adapter_storage_sqlite_sqlx::{Config, SqlitePersonRepository};
use persons_app::services::person_service::PersonService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let person_repo = SqlitePersonRepository::new(db.pool().clone());
    let state = AppState::new(PersonService::new(person_repo));

    router::build(state)
}

async fn call(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

async fn create(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = call(
        app,
        "POST",
        "/api/persons",
        Some(&format!(r#"{{"name":"{name}"}}"#)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: full CRUD cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_person_crud_cycle() {
    let app = app().await;

    // Create
    let (status, body) = call(
        &app,
        "POST",
        "/api/persons",
        Some(r#"{"name":"Ann","data":"AQID"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["data"], "AQID");
    let id = body["id"].as_i64().unwrap();

    // List
    let (status, body) = call(&app, "GET", "/api/persons", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Get
    let (status, body) = call(&app, "GET", &format!("/api/persons/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["data"], "AQID");

    // Update
    let (status, body) = call(
        &app,
        "PUT",
        &format!("/api/persons/{id}"),
        Some(r#"{"name":"Anna","data":"/w=="}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Anna");
    assert_eq!(body["data"], "/w==");

    // Update is persisted
    let (_, body) = call(&app, "GET", &format!("/api/persons/{id}"), None).await;
    assert_eq!(body["name"], "Anna");
    assert_eq!(body["data"], "/w==");

    // Delete
    let (status, _) = call(&app, "DELETE", &format!("/api/persons/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Verify gone
    let (status, _) = call(&app, "GET", &format!("/api/persons/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "GET", "/api/persons", None).await;
    assert_eq!(body, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// API: failure statuses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_blank_name_and_persist_nothing() {
    let app = app().await;

    for payload in [r#"{"name":""}"#, r#"{"name":"  "}"#, r#"{"data":"AQID"}"#] {
        let (status, _) = call(&app, "POST", "/api/persons", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
    }

    let (_, body) = call(&app, "GET", "/api/persons", None).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_return_not_found_when_fetching_missing_person() {
    let app = app().await;
    let (status, _) = call(&app, "GET", "/api/persons/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_and_create_nothing_when_updating_missing_person() {
    let app = app().await;

    let (status, _) = call(
        &app,
        "PUT",
        "/api/persons/12345",
        Some(r#"{"name":"Ghost"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "GET", "/api/persons", None).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_person() {
    let app = app().await;
    let (status, _) = call(&app, "DELETE", "/api/persons/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_twice() {
    let app = app().await;
    let id = create(&app, "Ann").await;

    let (first, _) = call(&app, "DELETE", &format!("/api/persons/{id}"), None).await;
    let (second, _) = call(&app, "DELETE", &format!("/api/persons/{id}"), None).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// API: search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_search_names_case_insensitively() {
    let app = app().await;
    for name in ["Ann", "Anna", "Susan", "Bob"] {
        create(&app, name).await;
    }

    let (status, body) = call(&app, "GET", "/api/persons/search?name=an", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ann", "Anna", "Susan"]);
}

#[tokio::test]
async fn should_search_accented_names_case_insensitively() {
    let app = app().await;
    for name in ["ÉLISE", "Zoë", "Ölaf"] {
        create(&app, name).await;
    }

    let (status, body) = call(&app, "GET", "/api/persons/search?name=%C3%A9lise", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "ÉLISE");
}

#[tokio::test]
async fn should_return_empty_array_when_search_matches_nothing() {
    let app = app().await;
    create(&app, "Bob").await;

    let (status, body) = call(&app, "GET", "/api/persons/search?name=an", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_search_exact_name_when_requested() {
    let app = app().await;
    create(&app, "Ann").await;
    create(&app, "Anna").await;

    let (status, body) = call(
        &app,
        "GET",
        "/api/persons/search?name=Ann&exact=true",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Ann");
}
