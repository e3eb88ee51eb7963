use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    middleware, Router,
};
use tower::ServiceExt;

use crate::{
    model::plant_species::PlantSpecies,
    server::{
        context::OperationContext,
        controller::crud::CrudHandler,
        data::Repository,
        error::store::StoreError,
        middleware::request_context::request_context,
    },
};

/// In-memory species store whose operations can be slowed down.
#[derive(Clone, Default)]
struct MemoryRepository {
    rows: Arc<Mutex<HashMap<String, PlantSpecies>>>,
    calls: Arc<AtomicUsize>,
    delay: Duration,
}

impl MemoryRepository {
    fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    fn insert(&self, species: PlantSpecies) {
        self.rows
            .lock()
            .unwrap()
            .insert(species.id.clone(), species);
    }

    fn get(&self, id: &str) -> Option<PlantSpecies> {
        self.rows.lock().unwrap().get(id).cloned()
    }

    fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    async fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    type Record = PlantSpecies;

    async fn list_all(&self, _ctx: &OperationContext) -> Result<Vec<PlantSpecies>, StoreError> {
        self.enter().await;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(
        &self,
        _ctx: &OperationContext,
        id: &str,
    ) -> Result<PlantSpecies, StoreError> {
        self.enter().await;
        self.get(id).ok_or(StoreError::NotFound)
    }

    async fn create(
        &self,
        _ctx: &OperationContext,
        record: &mut PlantSpecies,
    ) -> Result<(), StoreError> {
        self.enter().await;
        record.id = format!("species-{}", self.len() + 1);
        self.insert(record.clone());
        Ok(())
    }

    async fn update(
        &self,
        _ctx: &OperationContext,
        record: &mut PlantSpecies,
    ) -> Result<(), StoreError> {
        self.enter().await;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&record.id) {
            Some(row) => {
                *row = record.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, _ctx: &OperationContext, id: &str) -> Result<(), StoreError> {
        self.enter().await;
        self.rows.lock().unwrap().remove(id);
        Ok(())
    }
}

/// Repository whose every call fails with a database error.
struct FailingRepository;

#[async_trait]
impl Repository for FailingRepository {
    type Record = PlantSpecies;

    async fn list_all(&self, _ctx: &OperationContext) -> Result<Vec<PlantSpecies>, StoreError> {
        Err(sea_orm::DbErr::Custom("relation \"plant_species\" does not exist".into()).into())
    }

    async fn get_by_id(
        &self,
        _ctx: &OperationContext,
        _id: &str,
    ) -> Result<PlantSpecies, StoreError> {
        Err(sea_orm::DbErr::Custom("connection reset".into()).into())
    }

    async fn create(
        &self,
        _ctx: &OperationContext,
        _record: &mut PlantSpecies,
    ) -> Result<(), StoreError> {
        Err(sea_orm::DbErr::Custom("connection reset".into()).into())
    }

    async fn update(
        &self,
        _ctx: &OperationContext,
        _record: &mut PlantSpecies,
    ) -> Result<(), StoreError> {
        Err(sea_orm::DbErr::Custom("connection reset".into()).into())
    }

    async fn delete(&self, _ctx: &OperationContext, _id: &str) -> Result<(), StoreError> {
        Err(sea_orm::DbErr::Custom("connection reset".into()).into())
    }
}

fn app<R: Repository>(repo: R, timeout: Duration) -> Router {
    CrudHandler::new(repo, timeout, timeout)
        .register(Router::new(), "/plant-species")
        .layer(middleware::from_fn(request_context))
}

async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn coffea(id: &str) -> PlantSpecies {
    PlantSpecies {
        id: id.to_string(),
        name: "Coffea".to_string(),
        taxon: "Coffea arabica".to_string(),
        ..Default::default()
    }
}

/// Tests listing an empty collection.
///
/// Expected: 200 with an empty array, not null
#[tokio::test]
async fn list_empty_returns_empty_array() {
    let router = app(MemoryRepository::default(), Duration::from_secs(1));

    let (status, body) = send(router, "GET", "/plant-species/", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "data": [] }));
}

/// Tests that the collection is reachable with and without a trailing slash.
///
/// Expected: 200 on both paths
#[tokio::test]
async fn collection_path_accepts_both_forms() {
    let repo = MemoryRepository::default();
    repo.insert(coffea("species-1"));
    let router = app(repo, Duration::from_secs(1));

    let (with_slash, _) = send(router.clone(), "GET", "/plant-species/", "").await;
    let (without_slash, body) = send(router, "GET", "/plant-species", "").await;

    assert_eq!(with_slash, StatusCode::OK);
    assert_eq!(without_slash, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

/// Tests creating a record.
///
/// Verifies that the body decodes onto a fresh record, any id in the body is replaced
/// by the stored one and the populated record is returned.
///
/// Expected: 200 with generated id
#[tokio::test]
async fn create_returns_populated_record() {
    let repo = MemoryRepository::default();
    let router = app(repo.clone(), Duration::from_secs(1));

    let (status, body) = send(
        router,
        "POST",
        "/plant-species/",
        r#"{"id":"client-chosen","name":"Coffea","taxon":"Coffea arabica"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "species-1");
    assert_eq!(body["data"]["name"], "Coffea");
    assert_eq!(body["data"]["taxon"], "Coffea arabica");
    assert!(repo.get("client-chosen").is_none());
    assert_eq!(repo.get("species-1").unwrap().name, "Coffea");
}

/// Tests creating a record from a malformed body.
///
/// Expected: 400 and no storage call
#[tokio::test]
async fn create_with_malformed_body_is_bad_request() {
    let repo = MemoryRepository::default();
    let router = app(repo.clone(), Duration::from_secs(1));

    let (status, body) = send(router, "POST", "/plant-species/", r#"{"name": "#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid request body"));
    assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
}

/// Tests creating a record from a body of the wrong shape.
///
/// Expected: 400
#[tokio::test]
async fn create_with_wrong_field_type_is_bad_request() {
    let router = app(MemoryRepository::default(), Duration::from_secs(1));

    let (status, _) = send(router, "POST", "/plant-species", r#"{"name": 42}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests that a created record reads back unchanged.
///
/// Expected: get-by-id body equals the create body
#[tokio::test]
async fn get_by_id_after_create_returns_same_record() {
    let router = app(MemoryRepository::default(), Duration::from_secs(1));

    let (_, created) = send(
        router.clone(),
        "POST",
        "/plant-species/",
        r#"{"name":"Coffea","taxon":"Coffea arabica"}"#,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(router, "GET", &format!("/plant-species/{}", id), "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

/// Tests getting a record that does not exist.
///
/// Expected: 404 with `{"error":"not found"}`
#[tokio::test]
async fn get_missing_record_is_not_found() {
    let router = app(MemoryRepository::default(), Duration::from_secs(1));

    let (status, body) = send(router, "GET", "/plant-species/does-not-exist", "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "not found" }));
}

/// Tests that the path id wins over the body id on update.
///
/// Expected: record X updated, record Y untouched
#[tokio::test]
async fn update_uses_path_id_over_body_id() {
    let repo = MemoryRepository::default();
    repo.insert(coffea("x"));
    repo.insert(coffea("y"));
    let router = app(repo.clone(), Duration::from_secs(1));

    let (status, body) = send(
        router,
        "PUT",
        "/plant-species/x",
        r#"{"id":"y","name":"Coffea","taxon":"Coffea canephora"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "x");
    assert_eq!(repo.get("x").unwrap().taxon, "Coffea canephora");
    assert_eq!(repo.get("y").unwrap().taxon, "Coffea arabica");
}

/// Tests updating a record that does not exist.
///
/// Verifies that only the read path reports 404; a missing id on update is a
/// storage failure.
///
/// Expected: 500
#[tokio::test]
async fn update_missing_record_is_internal_error() {
    let router = app(MemoryRepository::default(), Duration::from_secs(1));

    let (status, body) = send(
        router,
        "PUT",
        "/plant-species/missing",
        r#"{"name":"Coffea","taxon":"Coffea arabica"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());
}

/// Tests updating with a malformed body.
///
/// Expected: 400 and the stored record unchanged
#[tokio::test]
async fn update_with_malformed_body_is_bad_request() {
    let repo = MemoryRepository::default();
    repo.insert(coffea("x"));
    let router = app(repo.clone(), Duration::from_secs(1));

    let (status, _) = send(router, "PUT", "/plant-species/x", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(repo.get("x").unwrap(), coffea("x"));
}

/// Tests deleting a record.
///
/// Expected: 200 with the id, then 404 on get
#[tokio::test]
async fn delete_returns_id_then_record_is_gone() {
    let repo = MemoryRepository::default();
    repo.insert(coffea("x"));
    let router = app(repo, Duration::from_secs(1));

    let (status, body) = send(router.clone(), "DELETE", "/plant-species/x", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "data": "x" }));

    let (status, _) = send(router, "GET", "/plant-species/x", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that an operation outliving its deadline is abandoned.
///
/// Verifies that the handler answers once the write timeout elapses, and that the
/// slow create never reaches the store.
///
/// Expected: 504 with `{"error":"operation timed out"}` and no row written
#[tokio::test]
async fn expired_write_deadline_returns_gateway_timeout() {
    let repo = MemoryRepository::slow(Duration::from_secs(5));
    let router = app(repo.clone(), Duration::from_millis(20));
    let started = std::time::Instant::now();

    let (status, body) = send(
        router,
        "POST",
        "/plant-species/",
        r#"{"name":"Coffea","taxon":"Coffea arabica"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, serde_json::json!({ "error": "operation timed out" }));
    assert!(started.elapsed() < Duration::from_secs(1));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(repo.len(), 0);
}

/// Tests that storage failures are reported without their details.
///
/// Expected: 500 with a generic message that leaks nothing from the database
#[tokio::test]
async fn storage_failure_is_sanitized() {
    let router = app(FailingRepository, Duration::from_secs(1));

    for (method, uri, body) in [
        ("GET", "/plant-species/", ""),
        ("GET", "/plant-species/x", ""),
        ("POST", "/plant-species/", "{}"),
        ("PUT", "/plant-species/x", "{}"),
        ("DELETE", "/plant-species/x", ""),
    ] {
        let (status, response) = send(router.clone(), method, uri, body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(
            response,
            serde_json::json!({ "error": "database operation failed" })
        );
    }
}

/// Tests posting a body over the size limit.
///
/// Verifies that the rejection raised before decoding keeps its status but is still
/// wrapped in the error envelope.
///
/// Expected: 413 with `{"error": ...}` and no storage call
#[tokio::test]
async fn oversized_body_is_enveloped_payload_too_large() {
    let repo = MemoryRepository::default();
    let router = app(repo.clone(), Duration::from_secs(1));
    let body = format!(r#"{{"name":"{}"}}"#, "x".repeat(3 * 1024 * 1024));

    let (status, response) = send(router, "POST", "/plant-species/", &body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .contains("length limit exceeded"));
    assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
}

/// Tests a path id that does not decode to UTF-8.
///
/// Expected: 400 with `{"error": ...}` for every route taking an id
#[tokio::test]
async fn invalid_utf8_id_is_enveloped_bad_request() {
    let router = app(MemoryRepository::default(), Duration::from_secs(1));

    for method in ["GET", "PUT", "DELETE"] {
        let (status, response) = send(router.clone(), method, "/plant-species/%FF", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", method);
        assert!(response["error"].as_str().unwrap().contains("UTF-8"));
    }
}

/// Tests a method no CRUD route supports.
///
/// Expected: 405 with `{"error":"method not allowed"}` and the Allow header kept
#[tokio::test]
async fn unsupported_method_is_enveloped() {
    let router = app(MemoryRepository::default(), Duration::from_secs(1));
    let request = Request::builder()
        .method("PATCH")
        .uri("/plant-species/x")
        .body(Body::from("{}"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key("allow"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(),
        serde_json::json!({ "error": "method not allowed" })
    );
}
