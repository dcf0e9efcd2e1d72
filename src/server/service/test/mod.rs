use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{fact::FactRepository, vote::VoteRepository},
    error::AppError,
    model::{user::User, vote::VoteType},
};

mod category;
mod vote;

fn domain_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}

/// Asserts that the stored counters of a fact equal a tally of its vote rows.
async fn assert_counts_match_votes(db: &DatabaseConnection, fact_id: i32) -> Result<(), AppError> {
    let fact = FactRepository::new(db).find_by_id(fact_id).await?.unwrap();
    let tally = VoteRepository::new(db).tally(fact_id).await?;

    assert_eq!(fact.counts, tally);

    Ok(())
}
