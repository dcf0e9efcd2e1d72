//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique usernames, emails and category names.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two users and a fact owned by the first one.
///
/// Covers the common voting setup: the owner submitted a fact and a second user
/// is about to react to it.
///
/// # Returns
/// - `Ok((owner, voter, fact))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_fact_with_voter(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::fact::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let voter = crate::factory::user::create_user(db).await?;
    let fact = crate::factory::fact::create_fact(db, owner.id).await?;

    Ok((owner, voter, fact))
}
