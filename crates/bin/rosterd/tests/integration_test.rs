//! End-to-end smoke tests for the full rosterd stack.
//!
//! Each test spins up the complete application (real store adapter, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use roster_adapter_http_axum::router::{self, Settings};
use roster_adapter_http_axum::state::AppState;
use roster_adapter_storage_memory::{InMemoryStudentRepository, demo_students};
use roster_adapter_storage_sqlite_sqlx::{Config, SqliteStudentRepository};
use roster_app::ports::StudentRepository;
use roster_app::services::student_service::StudentService;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a router backed by the seeded in-memory store.
fn memory_app() -> axum::Router {
    let repo = InMemoryStudentRepository::with_students(demo_students());
    router::build(AppState::new(StudentService::new(repo)), Settings::default())
}

/// Build a router backed by an in-memory `SQLite` database, returning the
/// service too so tests can shut it down.
async fn sqlite_app() -> (axum::Router, Arc<StudentService<SqliteStudentRepository>>) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let service = Arc::new(StudentService::new(SqliteStudentRepository::new(
        db.pool().clone(),
    )));
    let app = router::build(
        AppState::from_arc(Arc::clone(&service)),
        Settings::default(),
    );
    (app, service)
}

async fn call(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_seeded_scenario_from_memory_store() {
    let app = memory_app();

    let (status, body) = call(&app, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Karma", "age": 22},
            {"id": 2, "name": "Sonam", "age": 26}
        ])
    );

    let (status, body) = call(&app, Method::GET, "/students/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "name": "Sonam", "age": 26}));

    let (status, body) = call(&app, Method::GET, "/students/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Student not found"}));

    let (status, body) = call(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Route not found"}));

    let (status, body) = call(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "New", "age": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 3, "name": "New", "age": 30}));
}

#[tokio::test]
async fn should_grow_list_after_create_on_memory_store() {
    let app = memory_app();
    for name in ["takchey", "kchoeying", "motay"] {
        let (status, _) =
            call(&app, Method::POST, "/students", Some(json!({"name": name}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = call(&app, Method::GET, "/students", None).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn should_greet_at_root() {
    let (status, body) = call(&memory_app(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(router::GREETING));
}

// ---------------------------------------------------------------------------
// SQLite store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_roundtrip_created_student_through_sqlite() {
    let (app, _service) = sqlite_app().await;

    let (status, body) = call(&app, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = call(
        &app,
        Method::POST,
        "/students",
        Some(json!({
            "name": "cbaby",
            "email": "cbaby@example.com",
            "course": "Civil Engineering",
            "enrollment_date": "2024-09-01T00:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("created student has an id");
    assert_eq!(created["name"], "cbaby");
    assert_eq!(created["course"], "Civil Engineering");
    assert_eq!(created["enrollment_date"], "2024-09-01T00:00:00Z");

    let (status, fetched) = call(&app, Method::GET, &format!("/students/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, all) = call(&app, Method::GET, "/students", None).await;
    assert_eq!(all, json!([created]));
}

#[tokio::test]
async fn should_store_date_only_enrollment_and_negative_age_in_sqlite() {
    let (app, _service) = sqlite_app().await;

    let (status, created) = call(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "menlam", "age": -1, "enrollment_date": "2024-09-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["age"], -1);
    assert_eq!(created["enrollment_date"], "2024-09-01T00:00:00Z");

    let (_, fetched) = call(&app, Method::GET, "/students/1.9", None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_return_500_when_sqlite_rejects_duplicate_email() {
    let (app, _service) = sqlite_app().await;
    let student = json!({"name": "buddha", "email": "buddha@example.com"});

    let (status, _) = call(&app, Method::POST, "/students", Some(student.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, Method::POST, "/students", Some(student)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn should_return_404_for_unknown_id_on_sqlite() {
    let (app, _service) = sqlite_app().await;
    let (status, body) = call(&app, Method::GET, "/students/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Student not found"}));
}

#[tokio::test]
async fn should_return_500_after_store_shutdown() {
    let (app, service) = sqlite_app().await;
    service.shutdown().await;

    let (status, body) = call(&app, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn should_keep_memory_store_usable_after_close() {
    let repo = InMemoryStudentRepository::with_students(demo_students());
    repo.close().await;
    assert_eq!(repo.get_all().await.unwrap().len(), 2);
}
