use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::category::DEFAULT_CATEGORIES,
    server::{
        data::{category::CategoryRepository, fact::FactRepository},
        error::AppError,
        model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

fn not_found() -> AppError {
    AppError::NotFound("No category found with that ID".to_string())
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a category. A name already in use surfaces as a duplicate
    /// field error from the unique index.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        Ok(CategoryRepository::new(self.db).create(params).await?)
    }

    /// Updates a category. Renaming moves all facts of the old name to the new
    /// one in the same transaction.
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        let txn = self.db.begin().await?;
        let category_repo = CategoryRepository::new(&txn);

        let existing = category_repo.find_by_id(params.id).await?.ok_or_else(not_found)?;

        if params.name.is_none() && params.colour.is_none() {
            return Ok(existing);
        }

        let new_name = params.name.clone();
        let updated = category_repo.update(params).await?.ok_or_else(not_found)?;

        if let Some(new_name) = new_name.filter(|name| *name != existing.name) {
            let moved = FactRepository::new(&txn)
                .rename_category(&existing.name, &new_name)
                .await?;
            tracing::info!(
                "Renamed category '{}' to '{}', {} facts moved",
                existing.name,
                new_name,
                moved
            );
        }

        txn.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted category {}", id);

        Ok(())
    }

    /// Inserts the default categories when the table is empty.
    ///
    /// # Returns
    /// - `Ok(n)` - Number of categories inserted (0 when any already exist)
    pub async fn seed_defaults(&self) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        if repo.count().await? > 0 {
            return Ok(0);
        }

        for (name, colour) in DEFAULT_CATEGORIES {
            repo.create(CreateCategoryParams {
                name: name.to_string(),
                colour: colour.to_string(),
            })
            .await?;
        }

        txn.commit().await?;

        Ok(DEFAULT_CATEGORIES.len())
    }
}
