//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    colour: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"category{id}"`
    /// - colour: `"3b82f6"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("category{}", next_id()),
            colour: "3b82f6".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = colour.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(self.name),
            colour: ActiveValue::Set(self.colour),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with the given name and the default colour.
pub async fn create_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).name(name).build().await
}
