use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope wrapping every successful response payload.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DataDto<T> {
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error envelope. The payload is a message for almost every error; the health check
/// reports its component map through it.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorDto<E = String> {
    pub error: E,
}

/// Per-component readiness reported by the health check.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, ToSchema)]
pub struct ComponentHealthDto {
    pub http: bool,
    pub db: bool,
}

impl ComponentHealthDto {
    pub fn is_healthy(&self) -> bool {
        self.http && self.db
    }
}
