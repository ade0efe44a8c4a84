//! Declarative test builder for test database setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining multiple configuration methods together,
//! with all operations queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up in-memory SQLite databases with the
/// reservation schema or individual entity tables. Methods can be chained
/// together and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_reserva_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_reserva_tables: false,
        }
    }

    /// Add the full reservation schema to the test database.
    ///
    /// Creates all tables required for reservation management: Bloco, Equipamento,
    /// Sala, SalaEquipamento, Usuario, and Reserva.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_reserva_tables(mut self) -> Self {
        self.include_reserva_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entity::prelude::*;
    /// use reserva_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), reserva_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Bloco)
    ///     .with_table(Sala)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test setup by creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_reserva_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Bloco),
                schema.create_table_from_entity(entity::prelude::Equipamento),
                schema.create_table_from_entity(entity::prelude::Sala),
                schema.create_table_from_entity(entity::prelude::SalaEquipamento),
                schema.create_table_from_entity(entity::prelude::Usuario),
                schema.create_table_from_entity(entity::prelude::Reserva),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
