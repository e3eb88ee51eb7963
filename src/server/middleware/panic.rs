use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::server::error::AppError;

/// Turns a handler panic into a 500 response instead of tearing down the connection.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalError(format!("handler panicked: {}", detail)).into_response()
}
