//! Fact service for business logic.
//!
//! Every fact returned from here carries the viewing user's vote. Updates and
//! deletes are restricted to the fact's owner and admins.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        category::CategoryRepository, fact::FactRepository, user::UserRepository,
        vote::VoteRepository,
    },
    error::AppError,
    model::{
        fact::{CategoryStats, CreateFactParams, Fact, UpdateFactParams},
        query::FactQuery,
        user::User,
    },
};

fn fact_not_found() -> AppError {
    AppError::NotFound("No fact found with that ID".to_string())
}

pub struct FactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fills in `user_vote` on each fact with the viewer's vote.
    async fn attach_votes(&self, viewer_id: i32, mut facts: Vec<Fact>) -> Result<Vec<Fact>, AppError> {
        let ids: Vec<i32> = facts.iter().map(|f| f.id).collect();
        let votes = VoteRepository::new(self.db)
            .get_for_facts(viewer_id, &ids)
            .await?;

        for fact in &mut facts {
            fact.user_vote = votes.get(&fact.id).copied();
        }

        Ok(facts)
    }

    async fn ensure_category_exists(&self, category: &str) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).exists_by_name(category).await? {
            return Err(AppError::BadRequest(format!(
                "Category '{}' does not exist",
                category
            )));
        }

        Ok(())
    }

    /// Gets one page of facts for the query.
    pub async fn list(&self, viewer_id: i32, query: &FactQuery) -> Result<Vec<Fact>, AppError> {
        let facts = FactRepository::new(self.db).list(query).await?;

        self.attach_votes(viewer_id, facts).await
    }

    pub async fn get(&self, viewer_id: i32, id: i32) -> Result<Fact, AppError> {
        let mut fact = FactRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(fact_not_found)?;

        fact.user_vote = VoteRepository::new(self.db).find(viewer_id, id).await?;

        Ok(fact)
    }

    /// Submits a new fact. The category must already exist.
    pub async fn create(&self, params: CreateFactParams) -> Result<Fact, AppError> {
        self.ensure_category_exists(&params.category).await?;

        let fact = FactRepository::new(self.db).create(params).await?;

        tracing::debug!("User {} created fact {}", fact.user_id, fact.id);

        Ok(fact)
    }

    /// Updates a fact owned by `actor`, or any fact when `actor` is an admin.
    ///
    /// # Returns
    /// - `Ok(Fact)` - Updated fact with the actor's vote
    /// - `Err(AppError::NotFound)` - No fact with that id
    /// - `Err(AppError::Forbidden)` - Actor is neither owner nor admin
    /// - `Err(AppError::BadRequest)` - New category does not exist
    pub async fn update(&self, actor: &User, params: UpdateFactParams) -> Result<Fact, AppError> {
        let repo = FactRepository::new(self.db);

        let existing = repo.find_by_id(params.id).await?.ok_or_else(fact_not_found)?;
        if !existing.is_owned_by(actor.id) && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "You do not have permission to update this fact".to_string(),
            ));
        }

        if let Some(category) = &params.category {
            self.ensure_category_exists(category).await?;
        }

        let mut fact = repo.update(params).await?.ok_or_else(fact_not_found)?;
        fact.user_vote = VoteRepository::new(self.db).find(actor.id, fact.id).await?;

        Ok(fact)
    }

    /// Deletes a fact and all of its votes.
    ///
    /// # Returns
    /// - `Ok(())` - Fact deleted
    /// - `Err(AppError::NotFound)` - No fact with that id
    /// - `Err(AppError::Forbidden)` - Actor is neither owner nor admin
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = FactRepository::new(&txn);

        let existing = repo.find_by_id(id).await?.ok_or_else(fact_not_found)?;
        if !existing.is_owned_by(actor.id) && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "You do not have permission to delete this fact".to_string(),
            ));
        }

        let votes = VoteRepository::new(&txn).delete_by_fact(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("User {} deleted fact {} with {} votes", actor.id, id, votes);

        Ok(())
    }

    /// Gets all facts submitted by `user_id`, newest first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - "User not found" for unknown or inactive users
    pub async fn get_by_user(&self, viewer_id: i32, user_id: i32) -> Result<Vec<Fact>, AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(user) if user.active => {}
            _ => return Err(AppError::NotFound("User not found".to_string())),
        }

        let facts = FactRepository::new(self.db).get_by_user(user_id).await?;

        self.attach_votes(viewer_id, facts).await
    }

    /// Gets the facts the viewer voted on, newest fact first.
    pub async fn get_voted(&self, viewer_id: i32) -> Result<Vec<Fact>, AppError> {
        let votes = VoteRepository::new(self.db).get_by_user(viewer_id).await?;
        let ids: Vec<i32> = votes.iter().map(|(fact_id, _)| *fact_id).collect();

        let mut facts = FactRepository::new(self.db).get_by_ids(&ids).await?;
        for fact in &mut facts {
            fact.user_vote = votes
                .iter()
                .find(|(fact_id, _)| *fact_id == fact.id)
                .map(|(_, vote_type)| *vote_type);
        }

        Ok(facts)
    }

    pub async fn stats(&self) -> Result<Vec<CategoryStats>, AppError> {
        Ok(FactRepository::new(self.db).stats().await?)
    }
}
