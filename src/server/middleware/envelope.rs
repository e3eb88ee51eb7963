use axum::{
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::ErrorDto;

/// Gives bodyless error responses produced by layers (e.g. the request timeout) the
/// same `{"error": ...}` envelope handlers use.
///
/// Responses that already carry a content type pass through untouched, as do all
/// non-error responses. Used with `axum::middleware::map_response`.
pub async fn error_envelope(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error())
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }

    let message = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_lowercase();

    let (mut parts, _) = response.into_parts();
    let (json_parts, body) = Json(ErrorDto { error: message })
        .into_response()
        .into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.extend(json_parts.headers);

    Response::from_parts(parts, body)
}
