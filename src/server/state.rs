//! Application state shared by the internal route handlers.
//!
//! The CRUD routes carry their own state (one `CrudHandler` per entity); `AppState`
//! holds what the health and environment endpoints need. It is built once at startup
//! and cloned per request through Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Config>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Shared connection pool, also cloned into every repository.
    pub db: DatabaseConnection,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Arc<Config>) -> Self {
        Self { db, config }
    }
}
