use axum::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a storage contract operation.
///
/// The messages are safe to show to clients; the underlying database error of
/// `Database` is only reachable through `source()` and is logged server-side.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record matches the requested identity.
    #[error("not found")]
    NotFound,

    /// The operation context was canceled, usually because the caller went away.
    #[error("operation canceled")]
    Canceled,

    /// The operation context deadline elapsed before storage answered.
    #[error("operation timed out")]
    DeadlineExceeded,

    /// Any other failure reported by the database.
    #[error("database operation failed")]
    Database(#[source] DbErr),
}

impl StoreError {
    /// Status code used when the error is not classified any further by the caller.
    ///
    /// Only deadline expiry gets its own status; every other storage failure is an
    /// internal error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::NotFound,
            err => Self::Database(err),
        }
    }
}
