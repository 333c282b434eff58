//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Employees are inserted through the registry schema, so the
//! database-side office rules apply to factory inserts exactly as they do to repository calls.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let office = factory::office::create_office(&db).await?;
//!     let employee = factory::employee::create_employee(&db, office.id).await?;
//!
//!     // Create with all dependencies
//!     let (office, employee) = factory::helpers::create_employee_with_office(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let office = factory::office::OfficeFactory::new(&db)
//!     .location("Oslo")
//!     .max_occupancy(2)
//!     .build()
//!     .await?;
//!
//! let employee = factory::employee::EmployeeFactory::new(&db, office.id)
//!     .first_name("Ada")
//!     .last_name("Lovelace")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `office` - Create office entities
//! - `employee` - Create employee entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod employee;
pub mod helpers;
pub mod office;

// Re-export commonly used factory functions for concise usage
pub use employee::create_employee;
pub use office::{create_office, create_office_with_capacity};
