//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an office with default capacity and one employee assigned to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((office, employee))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_employee_with_office(
    db: &DatabaseConnection,
) -> Result<(entity::office::Model, entity::employee::Model), DbErr> {
    let office = crate::factory::office::create_office(db).await?;
    let employee = crate::factory::employee::create_employee(db, office.id).await?;

    Ok((office, employee))
}
