//! Voting on facts.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{fact::FactRepository, vote::VoteRepository},
    error::AppError,
    model::{
        fact::Fact,
        vote::{VoteTransition, VoteType},
    },
};

fn fact_not_found() -> AppError {
    AppError::NotFound("No fact found with that ID".to_string())
}

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a user's vote to a fact.
    ///
    /// The transaction starts with a write so it holds the database write lock
    /// before reading the existing vote. The vote row is then written and the
    /// counters moved with in-place SQL arithmetic, and the fact is read back.
    /// A concurrent first vote by the same user fails on the unique
    /// `(user_id, fact_id)` index instead of creating a second row.
    ///
    /// # Returns
    /// - `Ok(Fact)` - The fact with updated counters and the caller's resulting vote
    /// - `Err(AppError::NotFound)` - No fact with that id
    pub async fn vote(
        &self,
        user_id: i32,
        fact_id: i32,
        vote_type: VoteType,
    ) -> Result<Fact, AppError> {
        let txn = self.db.begin().await?;
        let fact_repo = FactRepository::new(&txn);
        let vote_repo = VoteRepository::new(&txn);

        if !fact_repo.lock(fact_id).await? {
            return Err(fact_not_found());
        }

        let existing = vote_repo.find(user_id, fact_id).await?;
        let transition = VoteTransition::resolve(existing, vote_type);

        match transition {
            VoteTransition::Cast(t) => vote_repo.create(user_id, fact_id, t).await?,
            VoteTransition::Retract(_) => vote_repo.delete(user_id, fact_id).await?,
            VoteTransition::Switch { to, .. } => vote_repo.update_type(user_id, fact_id, to).await?,
        }

        fact_repo.apply_vote(fact_id, transition).await?;
        let Some(mut fact) = fact_repo.find_by_id(fact_id).await? else {
            return Err(fact_not_found());
        };

        txn.commit().await?;

        tracing::debug!(
            "User {} vote on fact {}: {:?}",
            user_id,
            fact_id,
            transition
        );

        fact.user_vote = transition.user_vote();

        Ok(fact)
    }
}
