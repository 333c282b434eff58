//! Registry Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the employee
//! registry. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, either migrated with the real registry schema or with ad-hoc entity tables.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting offices and employees with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the registry schema applied:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_employee_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_registry_schema()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let office = factory::office::create_office(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
