//! HTTP backend: routing, storage and process lifecycle.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - The generic CRUD dispatcher and internal routes
//! - **Data Layer** (`data/`) - The `Repository` contract and its SeaORM implementations
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Per-request cancellation scope and panic recovery
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Context** (`context`) - Cancellable, deadline-bounded operation contexts
//! - **State** (`state`) - Shared state for the internal routes
//! - **Startup** (`startup`) - Tracing and database pool initialization
//! - **Router** (`router`) - Route registration, layers and API documentation
//! - **Lifecycle** (`lifecycle`) - Listener ownership, signals and graceful shutdown
//!
//! # Request Flow
//!
//! 1. **Router** matches the route; the request context middleware installs a
//!    cancellation token for the request
//! 2. **Controller** decodes the path and body and derives an operation context from
//!    the request token and the read or write timeout
//! 3. **Data** runs exactly one storage operation under that context
//! 4. **Controller** wraps the result in `{"data": ...}`, or the error layer maps the
//!    failure to `{"error": ...}` with its status code

pub mod config;
pub mod context;
pub mod controller;
pub mod data;
pub mod error;
pub mod lifecycle;
pub mod middleware;
pub mod router;
pub mod startup;
pub mod state;
pub mod util;
