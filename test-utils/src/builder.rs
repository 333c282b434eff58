use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Either apply the full registry migrations with `with_registry_schema()`, or
/// add individual entity tables with `with_table()`, then call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_registry_schema()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Whether the registry migrations should be applied before any extra tables.
    ///
    /// Migrations install the office rule triggers, which entity-generated tables lack.
    migrations: bool,

    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no schema configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            migrations: false,
            tables: Vec::new(),
        }
    }

    /// Applies the registry migrations when the database is built.
    ///
    /// Creates the `offices` and `employees` tables together with the triggers that reject
    /// employees referencing unknown offices or exceeding an office's maximum occupancy.
    /// Use this for any test exercising the database-side office rules.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_registry_schema(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should be
    /// added in dependency order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection, applies the registry migrations if
    /// requested, then executes all CREATE TABLE statements added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect, migrate or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        }

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
