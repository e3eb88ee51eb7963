//! Mendel Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the mendel
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts rows with sensible defaults
//! - **fixture**: Builds in-memory entity models without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::PlantSpecies;
//!
//! #[tokio::test]
//! async fn test_species_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(PlantSpecies)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
