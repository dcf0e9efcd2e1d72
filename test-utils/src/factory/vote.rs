//! Vote factory for creating raw vote rows.
//!
//! Inserting a vote row does not touch the fact counters. Tests that need
//! consistent counters go through the vote service instead.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a vote row for `user_id` on `fact_id`.
///
/// # Arguments
/// - `vote_type` - Wire name of the vote (`votesInteresting`, `votesMindBlowing`, `votesFalse`)
pub async fn create_vote(
    db: &DatabaseConnection,
    user_id: i32,
    fact_id: i32,
    vote_type: &str,
) -> Result<entity::vote::Model, DbErr> {
    entity::vote::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        fact_id: ActiveValue::Set(fact_id),
        vote_type: ActiveValue::Set(vote_type.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn second_vote_by_same_user_violates_unique_index() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;

        create_vote(db, voter.id, fact.id, "votesInteresting").await?;
        let duplicate = create_vote(db, voter.id, fact.id, "votesFalse").await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
