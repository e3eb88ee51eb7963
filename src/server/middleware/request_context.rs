use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tokio_util::sync::CancellationToken;

/// Cancellation scope of a single inbound request.
///
/// The token is canceled when the request finishes or when its future is dropped,
/// which is what happens when the client disconnects mid-request.
#[derive(Clone, Debug)]
pub struct RequestContext {
    token: CancellationToken,
}

impl RequestContext {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Installs a [`RequestContext`] in the request extensions for the handlers below it.
pub async fn request_context(mut request: Request, next: Next) -> Response {
    let token = CancellationToken::new();
    let _guard = token.clone().drop_guard();

    request
        .extensions_mut()
        .insert(RequestContext { token });

    next.run(request).await
}

/// Extracts the request's context, or a fresh one when the middleware is not installed.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| RequestContext {
                token: CancellationToken::new(),
            }))
    }
}
