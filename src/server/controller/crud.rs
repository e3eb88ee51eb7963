//! Generic CRUD dispatch over any [`Repository`].
//!
//! One [`CrudHandler`] binds a repository to a base path and serves five routes:
//!
//! | Verb   | Path        | Operation  |
//! |--------|-------------|------------|
//! | GET    | `base/`     | list-all   |
//! | POST   | `base/`     | create     |
//! | GET    | `base/{id}` | get-by-id  |
//! | PUT    | `base/{id}` | update     |
//! | DELETE | `base/{id}` | delete     |
//!
//! The collection is reachable both with and without the trailing slash. Every handler
//! derives an [`OperationContext`] from the request's cancellation token and the read or
//! write timeout, makes at most one storage call under it, and writes exactly one
//! `{"data": ...}` or `{"error": ...}` envelope.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};

use crate::{
    model::{api::DataDto, Record},
    server::{
        context::OperationContext,
        data::Repository,
        error::{store::StoreError, AppError},
        controller::internal::method_not_allowed,
        middleware::request_context::RequestContext,
    },
};

/// Serves the CRUD routes of one record type.
pub struct CrudHandler<R> {
    repo: R,
    read_timeout: Duration,
    write_timeout: Duration,
}

impl<R: Repository> CrudHandler<R> {
    pub fn new(repo: R, read_timeout: Duration, write_timeout: Duration) -> Self {
        Self {
            repo,
            read_timeout,
            write_timeout,
        }
    }

    /// Mounts the five CRUD routes under `base` and merges them into `router`.
    ///
    /// # Arguments
    /// - `router` - Router to add the routes to
    /// - `base` - Collection path without a trailing slash, e.g. `/plant-species`
    ///
    /// # Returns
    /// - `Router<S>` - `router` with the entity's routes merged in
    pub fn register<S>(self, router: Router<S>, base: &str) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let base = base.trim_end_matches('/');

        let routes = Router::new()
            .route(base, get(list::<R>).post(create::<R>))
            .route(&format!("{}/", base), get(list::<R>).post(create::<R>))
            .route(
                &format!("{}/{{id}}", base),
                get(get_by_id::<R>).put(update::<R>).delete(delete::<R>),
            )
            .method_not_allowed_fallback(method_not_allowed)
            .with_state::<S>(Arc::new(self));

        router.merge(routes)
    }

    fn read_context(&self, request: &RequestContext) -> OperationContext {
        OperationContext::new(request.token(), self.read_timeout)
    }

    fn write_context(&self, request: &RequestContext) -> OperationContext {
        OperationContext::new(request.token(), self.write_timeout)
    }
}

/// Decodes a request body onto a fresh record.
///
/// A body axum could not buffer (e.g. over the size limit) keeps the rejection's status.
fn decode<T: Record>(body: Result<Bytes, BytesRejection>) -> Result<T, AppError> {
    serde_json::from_slice(&body?)
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {}", e)))
}

/// Lists every record.
///
/// # Returns
/// - `200 OK` - `{"data": [...]}`, an empty array when there are no records
/// - `504 Gateway Timeout` - Read timeout elapsed
/// - `500 Internal Server Error` - Any other storage failure
async fn list<R: Repository>(
    State(handler): State<Arc<CrudHandler<R>>>,
    request: RequestContext,
) -> Result<Json<DataDto<Vec<R::Record>>>, AppError> {
    let ctx = handler.read_context(&request);

    let records = ctx.run(handler.repo.list_all(&ctx)).await?;

    Ok(Json(DataDto::new(records)))
}

/// Creates a record from the request body.
///
/// Identity and timestamps in the body are ignored; storage assigns them.
///
/// # Returns
/// - `200 OK` - `{"data": {...}}` with the stored record
/// - `400 Bad Request` - Body is not a valid record
/// - `413 Payload Too Large` - Body over the size limit
/// - `504 Gateway Timeout` - Write timeout elapsed
/// - `500 Internal Server Error` - Any other storage failure
async fn create<R: Repository>(
    State(handler): State<Arc<CrudHandler<R>>>,
    request: RequestContext,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DataDto<R::Record>>, AppError> {
    let ctx = handler.write_context(&request);

    let mut record: R::Record = decode(body)?;
    ctx.run(handler.repo.create(&ctx, &mut record)).await?;
    tracing::debug!("Created record {}", record.id());

    Ok(Json(DataDto::new(record)))
}

/// Fetches one record.
///
/// # Returns
/// - `200 OK` - `{"data": {...}}`
/// - `400 Bad Request` - Path id is not valid UTF-8
/// - `404 Not Found` - `{"error": "not found"}`
/// - `504 Gateway Timeout` - Read timeout elapsed
/// - `500 Internal Server Error` - Any other storage failure
async fn get_by_id<R: Repository>(
    State(handler): State<Arc<CrudHandler<R>>>,
    request: RequestContext,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DataDto<R::Record>>, AppError> {
    let Path(id) = path?;
    let ctx = handler.read_context(&request);

    match ctx.run(handler.repo.get_by_id(&ctx, &id)).await {
        Ok(record) => Ok(Json(DataDto::new(record))),
        Err(StoreError::NotFound) => Err(AppError::NotFound("not found".to_string())),
        Err(err) => Err(err.into()),
    }
}

/// Replaces a record.
///
/// The path id always wins over any `id` in the body.
///
/// # Returns
/// - `200 OK` - `{"data": {...}}` with the stored record
/// - `400 Bad Request` - Body is not a valid record or path id is not valid UTF-8
/// - `413 Payload Too Large` - Body over the size limit
/// - `504 Gateway Timeout` - Write timeout elapsed
/// - `500 Internal Server Error` - Any other storage failure, including a missing id
async fn update<R: Repository>(
    State(handler): State<Arc<CrudHandler<R>>>,
    request: RequestContext,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DataDto<R::Record>>, AppError> {
    let Path(id) = path?;
    let ctx = handler.write_context(&request);

    let mut record: R::Record = decode(body)?;
    record.set_id(id);
    ctx.run(handler.repo.update(&ctx, &mut record)).await?;

    Ok(Json(DataDto::new(record)))
}

/// Deletes a record.
///
/// # Returns
/// - `200 OK` - `{"data": "<id>"}`
/// - `400 Bad Request` - Path id is not valid UTF-8
/// - `504 Gateway Timeout` - Write timeout elapsed
/// - `500 Internal Server Error` - Any other storage failure
async fn delete<R: Repository>(
    State(handler): State<Arc<CrudHandler<R>>>,
    request: RequestContext,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DataDto<String>>, AppError> {
    let Path(id) = path?;
    let ctx = handler.write_context(&request);

    ctx.run(handler.repo.delete(&ctx, &id)).await?;

    Ok(Json(DataDto::new(id)))
}
