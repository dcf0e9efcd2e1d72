//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups by id and email, partial updates and deletion,
//! converting entity models to domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        query::Pagination,
        user::{AdminPromotion, CreateUserParams, Role, UpdateUserParams, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed, including duplicate username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            avatar_url: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email. The email must already be lowercased.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets one page of users, newest accounts first.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the page and the total number of users
    pub async fn get_all_paginated(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, pagination.limit);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(pagination.page - 1)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = existing.into();
        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(avatar_url) = params.avatar_url {
            active_model.avatar_url = ActiveValue::Set(avatar_url);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    pub async fn update_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Grants the admin role to the account with the given email.
    ///
    /// # Returns
    /// - `Ok(AdminPromotion::Promoted)` - The account was made admin
    /// - `Ok(AdminPromotion::AlreadyAdmin)` - The account already had the role
    /// - `Ok(AdminPromotion::NoAccount)` - No account uses that email
    pub async fn promote_to_admin(&self, email: &str) -> Result<AdminPromotion, DbErr> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(AdminPromotion::NoAccount);
        };

        if user.role == Role::Admin.as_str() {
            return Ok(AdminPromotion::AlreadyAdmin);
        }

        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user.id))
            .col_expr(entity::user::Column::Role, Expr::value(Role::Admin.as_str()))
            .exec(self.db)
            .await?;

        Ok(AdminPromotion::Promoted)
    }

    /// Takes the database write lock for the rest of the transaction with a
    /// no-op update of the user row. Returns false if the user doesn't exist.
    pub async fn lock(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Active,
                Expr::col(entity::user::Column::Active),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes the user row. Votes and facts must already be handled by the caller.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
