//! Vote data repository.
//!
//! Vote rows are only ever written together with the owning fact's counters,
//! so the service layer drives this repository inside a transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::vote::{VoteCounts, VoteType},
};

pub struct VoteRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user's current vote on a fact.
    ///
    /// # Returns
    /// - `Ok(Some(VoteType))` - The user has voted
    /// - `Ok(None)` - No vote
    /// - `Err(AppError::InternalErr)` - Stored vote type is unknown
    pub async fn find(&self, user_id: i32, fact_id: i32) -> Result<Option<VoteType>, AppError> {
        entity::prelude::Vote::find()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .filter(entity::vote::Column::FactId.eq(fact_id))
            .one(self.db)
            .await?
            .map(|vote| VoteType::from_stored(&vote.vote_type))
            .transpose()
    }

    pub async fn create(
        &self,
        user_id: i32,
        fact_id: i32,
        vote_type: VoteType,
    ) -> Result<(), DbErr> {
        entity::vote::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            fact_id: ActiveValue::Set(fact_id),
            vote_type: ActiveValue::Set(vote_type.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Changes the type of an existing vote. The vote's timestamp is refreshed
    /// so voted-facts ordering reflects the latest reaction.
    pub async fn update_type(
        &self,
        user_id: i32,
        fact_id: i32,
        vote_type: VoteType,
    ) -> Result<(), DbErr> {
        entity::prelude::Vote::update_many()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .filter(entity::vote::Column::FactId.eq(fact_id))
            .col_expr(
                entity::vote::Column::VoteType,
                sea_orm::sea_query::Expr::value(vote_type.as_str()),
            )
            .col_expr(
                entity::vote::Column::CreatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: i32, fact_id: i32) -> Result<(), DbErr> {
        entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .filter(entity::vote::Column::FactId.eq(fact_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Maps fact id to the user's vote for the given facts.
    pub async fn get_for_facts(
        &self,
        user_id: i32,
        fact_ids: &[i32],
    ) -> Result<HashMap<i32, VoteType>, AppError> {
        if fact_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let votes = entity::prelude::Vote::find()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .filter(entity::vote::Column::FactId.is_in(fact_ids.iter().copied()))
            .all(self.db)
            .await?;

        votes
            .into_iter()
            .map(|vote| VoteType::from_stored(&vote.vote_type).map(|t| (vote.fact_id, t)))
            .collect()
    }

    /// All votes cast by a user as `(fact_id, vote_type)`, most recent first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<(i32, VoteType)>, AppError> {
        let votes = entity::prelude::Vote::find()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .order_by_desc(entity::vote::Column::CreatedAt)
            .all(self.db)
            .await?;

        votes
            .into_iter()
            .map(|vote| VoteType::from_stored(&vote.vote_type).map(|t| (vote.fact_id, t)))
            .collect()
    }

    /// Counts the vote rows of a fact by type.
    pub async fn tally(&self, fact_id: i32) -> Result<VoteCounts, DbErr> {
        let mut counts = VoteCounts::default();

        for vote_type in VoteType::ALL {
            let count = entity::prelude::Vote::find()
                .filter(entity::vote::Column::FactId.eq(fact_id))
                .filter(entity::vote::Column::VoteType.eq(vote_type.as_str()))
                .count(self.db)
                .await?;

            counts.set(vote_type, i32::try_from(count).unwrap_or(i32::MAX));
        }

        Ok(counts)
    }

    pub async fn delete_by_fact(&self, fact_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::FactId.eq(fact_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_facts(&self, fact_ids: &[i32]) -> Result<u64, DbErr> {
        if fact_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::FactId.is_in(fact_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
