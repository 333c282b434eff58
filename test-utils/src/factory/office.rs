//! Office factory for creating test office entities.
//!
//! Offices are provisioned outside the registry API, so tests create them
//! directly through this factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default maximum occupancy, large enough that ordinary tests never hit it.
pub const DEFAULT_MAX_OCCUPANCY: i32 = 10;

/// Factory for creating test offices with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::office::OfficeFactory;
///
/// let office = OfficeFactory::new(&db)
///     .location("Oslo")
///     .max_occupancy(2)
///     .build()
///     .await?;
/// ```
pub struct OfficeFactory<'a> {
    db: &'a DatabaseConnection,
    location: String,
    max_occupancy: i32,
}

impl<'a> OfficeFactory<'a> {
    /// Creates a new OfficeFactory with default values.
    ///
    /// Defaults:
    /// - location: `"Office {id}"` where id is auto-incremented
    /// - max_occupancy: `DEFAULT_MAX_OCCUPANCY`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            location: format!("Office {}", id),
            max_occupancy: DEFAULT_MAX_OCCUPANCY,
        }
    }

    /// Sets the location of the office.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets how many employees the office may hold.
    pub fn max_occupancy(mut self, max_occupancy: i32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    /// Builds and inserts the office entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::office::Model)` - Created office entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::office::Model, DbErr> {
        entity::office::ActiveModel {
            location: ActiveValue::Set(self.location),
            max_occupancy: ActiveValue::Set(self.max_occupancy),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an office with default values.
///
/// Shorthand for `OfficeFactory::new(db).build().await`.
pub async fn create_office(db: &DatabaseConnection) -> Result<entity::office::Model, DbErr> {
    OfficeFactory::new(db).build().await
}

/// Creates an office holding at most `max_occupancy` employees.
pub async fn create_office_with_capacity(
    db: &DatabaseConnection,
    max_occupancy: i32,
) -> Result<entity::office::Model, DbErr> {
    OfficeFactory::new(db).max_occupancy(max_occupancy).build().await
}
