use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ComponentHealthDto, DataDto, ErrorDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping internal endpoints in OpenAPI documentation
pub static INTERNAL_TAG: &str = "internal";

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - `{"data": "ok"}`
#[utoipa::path(
    get,
    path = "/",
    tag = INTERNAL_TAG,
    responses(
        (status = 200, description = "Server is accepting requests", body = String)
    ),
)]
pub async fn index() -> Json<DataDto<&'static str>> {
    Json(DataDto::new("ok"))
}

/// Readiness probe.
///
/// Pings the database, bounded by the read timeout, and reports each component's
/// state. The same component map is returned as `data` when healthy and as `error`
/// when not.
///
/// # Arguments
/// - `state` - Application state containing the database connection and config
///
/// # Returns
/// - `200 OK` - All components healthy
/// - `500 Internal Server Error` - Database unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = INTERNAL_TAG,
    responses(
        (status = 200, description = "All components healthy", body = ComponentHealthDto),
        (status = 500, description = "At least one component unhealthy", body = ComponentHealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db = match tokio::time::timeout(state.config.server.read_timeout, state.db.ping()).await
    {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!("Health check database ping failed: {}", e);
            false
        }
        Err(_) => {
            tracing::warn!("Health check database ping timed out");
            false
        }
    };

    let health = ComponentHealthDto { http: true, db };

    if health.is_healthy() {
        (StatusCode::OK, Json(DataDto::new(health))).into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto { error: health }),
        )
            .into_response()
    }
}

/// Returns the running configuration, minus secrets.
///
/// Hidden in production.
///
/// # Returns
/// - `200 OK` - `{"data": {"app": ..., "server": ..., "database": ...}}`
/// - `404 Not Found` - Running in production
#[utoipa::path(
    get,
    path = "/env",
    tag = INTERNAL_TAG,
    responses(
        (status = 200, description = "Non-secret configuration", body = Object),
        (status = 404, description = "Not available in production", body = String)
    ),
)]
pub async fn env(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    if state.config.app.is_production() {
        return Err(AppError::NotFound("not found".to_string()));
    }

    Ok(Json(DataDto::new(state.config.as_ref().clone())))
}

/// Fallback for paths no route matches.
///
/// # Returns
/// - `404 Not Found` - `{"error": "not found"}`
pub async fn not_found() -> AppError {
    AppError::NotFound("not found".to_string())
}

/// Fallback for known paths requested with an unsupported method.
///
/// Axum still attaches the `Allow` header listing the supported methods.
///
/// # Returns
/// - `405 Method Not Allowed` - `{"error": "method not allowed"}`
pub async fn method_not_allowed() -> AppError {
    AppError::Rejected {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: "method not allowed".to_string(),
    }
}
