//! HTTP handlers.
//!
//! - `crud` - Generic five-route dispatcher shared by every entity
//! - `internal` - Liveness, readiness and configuration endpoints

pub mod crud;
pub mod internal;

#[cfg(test)]
mod test;
