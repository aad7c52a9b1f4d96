use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments backed by
/// in-memory SQLite. Add entity tables with `with_table()`, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Turf, TurfOwner};
///
/// let test = TestBuilder::new()
///     .with_table(TurfOwner)
///     .with_table(Turf)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed during database setup, in insertion
    /// order. Tables with foreign keys should be added after the tables
    /// they reference.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Chain multiple calls to add multiple
    /// tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for booking operations, in dependency
    /// order: User, TurfOwner, Turf, Booking, Review.
    ///
    /// Most availability-engine tests want this full set since bookings
    /// reference both a user and a turf.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(TurfOwner)
            .with_table(Turf)
            .with_table(Booking)
            .with_table(Review)
    }

    /// Builds and initializes the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
