//! Fact factory for creating test fact entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test facts owned by an existing user.
///
/// Counters are written as given; they are not backed by vote rows. Use the
/// vote factory or the vote service when a test checks counter consistency.
pub struct FactFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    text: String,
    source: String,
    category: String,
    votes_interesting: i32,
    votes_mind_blowing: i32,
    votes_false: i32,
    created_at: DateTime<Utc>,
}

impl<'a> FactFactory<'a> {
    /// Creates a new FactFactory with default values.
    ///
    /// Defaults:
    /// - text: `"Fact number {id}"`
    /// - source: `"https://example.com/facts/{id}"`
    /// - category: `"science"`
    /// - all counters: `0`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            text: format!("Fact number {}", id),
            source: format!("https://example.com/facts/{}", id),
            category: "science".to_string(),
            votes_interesting: 0,
            votes_mind_blowing: 0,
            votes_false: 0,
            created_at: Utc::now(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the interesting, mind-blowing and false counters.
    pub fn votes(mut self, interesting: i32, mind_blowing: i32, false_votes: i32) -> Self {
        self.votes_interesting = interesting;
        self.votes_mind_blowing = mind_blowing;
        self.votes_false = false_votes;
        self
    }

    /// Sets the creation timestamp, for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the fact entity into the database.
    pub async fn build(self) -> Result<entity::fact::Model, DbErr> {
        entity::fact::ActiveModel {
            text: ActiveValue::Set(self.text),
            source: ActiveValue::Set(self.source),
            category: ActiveValue::Set(self.category),
            user_id: ActiveValue::Set(self.user_id),
            votes_interesting: ActiveValue::Set(self.votes_interesting),
            votes_mind_blowing: ActiveValue::Set(self.votes_mind_blowing),
            votes_false: ActiveValue::Set(self.votes_false),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fact with default values owned by `user_id`.
pub async fn create_fact(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::fact::Model, DbErr> {
    FactFactory::new(db, user_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_fact_for_user() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let fact = create_fact(db, user.id).await?;

        assert_eq!(fact.user_id, user.id);
        assert_eq!(fact.votes_interesting, 0);
        assert!(fact.source.starts_with("https://"));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_fact_for_missing_user() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = create_fact(db, 9999).await;

        assert!(result.is_err());

        Ok(())
    }
}
