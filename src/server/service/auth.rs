//! Signup and login.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, Role, SignupParams, User},
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    /// Email that is granted the admin role at signup.
    admin_email: Option<&'a str>,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, admin_email: Option<&'a str>) -> Self {
        Self { db, admin_email }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user, admin when the email matches the configured admin email
    /// - `Err(AppError::DbErr)` - Username or email already in use (400 "Duplicate field value")
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let role = if self.admin_email == Some(params.email.as_str()) {
            Role::Admin
        } else {
            Role::User
        };

        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash: hash_password(&params.password),
                role,
            })
            .await?;

        tracing::info!("User {} signed up as {}", user.id, user.role.as_str());

        Ok(user)
    }

    /// Checks credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Email and password match an active account
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::IncorrectCredentials)` - Unknown email, wrong password or inactive account
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Please provide email and password!".to_string(),
            ));
        }

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::IncorrectCredentials.into());
        };

        if !user.active || !verify_password(user.id, password, &user.password_hash)? {
            return Err(AuthError::IncorrectCredentials.into());
        }

        Ok(user)
    }
}
