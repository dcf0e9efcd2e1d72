//! User service for business logic.
//!
//! This module provides the `UserService` for account management: profile and
//! password updates, soft deletion, admin edits and hard deletion that keeps
//! vote counters consistent.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{fact::FactRepository, user::UserRepository, vote::VoteRepository},
    error::{auth::AuthError, AppError},
    model::{
        query::Pagination,
        user::{AdminPromotion, UpdatePasswordParams, UpdateUserParams, User},
        vote::VoteTransition,
    },
    util::password::{hash_password, verify_password},
};

fn user_not_found() -> AppError {
    AppError::NotFound("No user found with that ID".to_string())
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Retrieves one page of users.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the page and the total user count
    pub async fn get_all(&self, pagination: Pagination) -> Result<(Vec<User>, u64), AppError> {
        UserRepository::new(self.db)
            .get_all_paginated(pagination)
            .await
    }

    /// Applies a partial update to a user. An empty update returns the user unchanged.
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if params.is_empty() {
            return repo.find_by_id(id).await?.ok_or_else(user_not_found);
        }

        repo.update(id, params).await?.ok_or_else(user_not_found)
    }

    /// Changes the user's password after checking the current one.
    ///
    /// # Returns
    /// - `Err(AuthError::IncorrectCurrentPassword)` - Current password is wrong (401)
    pub async fn update_password(&self, user: &User, params: UpdatePasswordParams) -> Result<(), AppError> {
        if !verify_password(user.id, &params.current, &user.password_hash)? {
            return Err(AuthError::IncorrectCurrentPassword.into());
        }

        UserRepository::new(self.db)
            .update_password_hash(user.id, hash_password(&params.new))
            .await?;

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }

    /// Soft-deletes the user's own account. Facts and votes are kept.
    pub async fn deactivate(&self, id: i32) -> Result<(), AppError> {
        self.update(
            id,
            UpdateUserParams {
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;

        tracing::info!("User {} deactivated their account", id);

        Ok(())
    }

    /// Permanently deletes a user.
    ///
    /// Runs in one transaction: the user's votes on other users' facts are
    /// retracted with their counters decremented, then the user's votes, the
    /// votes on the user's facts, the user's facts and finally the user row
    /// are removed.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);
        let fact_repo = FactRepository::new(&txn);
        let vote_repo = VoteRepository::new(&txn);

        if !user_repo.lock(id).await? {
            return Err(user_not_found());
        }

        let own_fact_ids = fact_repo.get_ids_by_user(id).await?;
        let votes = vote_repo.get_by_user(id).await?;

        for (fact_id, vote_type) in votes {
            if own_fact_ids.contains(&fact_id) {
                continue;
            }
            fact_repo
                .apply_vote(fact_id, VoteTransition::Retract(vote_type))
                .await?;
        }

        vote_repo.delete_by_user(id).await?;
        vote_repo.delete_by_facts(&own_fact_ids).await?;
        let facts = fact_repo.delete_by_user(id).await?;
        user_repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted user {} and {} of their facts", id, facts);

        Ok(())
    }

    /// Grants the admin role to the account with this email, if it exists.
    pub async fn promote_admin(&self, email: &str) -> Result<AdminPromotion, AppError> {
        Ok(UserRepository::new(self.db).promote_to_admin(email).await?)
    }
}
