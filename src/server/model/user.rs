//! User domain models and parameters.
//!
//! Provides the user domain model with role and soft-delete state, plus the
//! validated parameter types for signup, profile updates and admin edits.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{AdminUpdateUserDto, SignupDto, UpdateMeDto, UpdatePasswordDto, UserDto},
    server::{
        error::{internal::InternalError, AppError},
        util::validation,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Outcome of granting the admin role by email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPromotion {
    Promoted,
    AlreadyAdmin,
    NoAccount,
}

/// Registered account.
///
/// Inactive users were soft-deleted by themselves; they keep their facts and
/// votes but can no longer log in.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Lowercase email used for login.
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash and active flag never leave the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownStoredRole))` - Stored role is not `user` or `admin`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::from_name(&entity.role)
            .ok_or_else(|| InternalError::UnknownStoredRole(entity.role.clone()))?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            avatar_url: entity.avatar_url,
            active: entity.active,
            created_at: entity.created_at,
        })
    }
}

/// Validated signup request.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupParams {
    /// Validates a signup DTO.
    ///
    /// # Returns
    /// - `Ok(SignupParams)` - Username trimmed, email lowercased, password checked
    /// - `Err(AppError::BadRequest)` - First failing rule
    pub fn from_dto(dto: SignupDto) -> Result<Self, AppError> {
        let username = validation::username(&dto.username)?;
        let email = validation::email(&dto.email)?;
        validation::new_password(&dto.password, &dto.password_confirm)?;

        Ok(Self {
            username,
            email,
            password: dto.password,
        })
    }
}

/// Row values for a new user, password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Partial user update. `None` leaves a column untouched; `avatar_url` uses
/// `Some(None)` to clear the avatar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<Option<String>>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

impl UpdateUserParams {
    /// Builds a self-service profile update.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Password fields present, or invalid values
    pub fn from_me_dto(dto: UpdateMeDto) -> Result<Self, AppError> {
        if dto.password.is_some() || dto.password_confirm.is_some() {
            return Err(AppError::BadRequest(
                "This route is not for password updates. Please use /updatePassword.".to_string(),
            ));
        }

        let avatar_url = match dto.avatar_url.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(None),
            Some(url) => Some(Some(validation::web_url(url)?)),
        };

        Ok(Self {
            username: dto.username.as_deref().map(validation::username).transpose()?,
            email: dto.email.as_deref().map(validation::email).transpose()?,
            avatar_url,
            role: None,
            active: None,
        })
    }

    /// Builds an admin update of any account.
    pub fn from_admin_dto(dto: AdminUpdateUserDto) -> Result<Self, AppError> {
        let role = dto
            .role
            .as_deref()
            .map(|role| {
                Role::from_name(role).ok_or_else(|| AppError::BadRequest("Invalid role".to_string()))
            })
            .transpose()?;

        Ok(Self {
            username: dto.username.as_deref().map(validation::username).transpose()?,
            email: dto.email.as_deref().map(validation::email).transpose()?,
            avatar_url: None,
            role,
            active: dto.active,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePasswordParams {
    pub current: String,
    pub new: String,
}

impl UpdatePasswordParams {
    /// Checks the new password and its confirmation. The current password is
    /// verified later against the stored hash.
    pub fn from_dto(dto: UpdatePasswordDto) -> Result<Self, AppError> {
        if dto.password_current.is_empty() {
            return Err(AppError::BadRequest(
                "Please provide your current password".to_string(),
            ));
        }
        validation::new_password(&dto.password, &dto.password_confirm)?;

        Ok(Self {
            current: dto.password_current,
            new: dto.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_password_fields_in_profile_update() {
        let dto = UpdateMeDto {
            password: Some("secret1".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            UpdateUserParams::from_me_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn empty_avatar_clears_it() {
        let dto = UpdateMeDto {
            avatar_url: Some(" ".to_string()),
            ..Default::default()
        };

        let params = UpdateUserParams::from_me_dto(dto).unwrap();

        assert_eq!(params.avatar_url, Some(None));
    }

    #[test]
    fn rejects_unknown_role() {
        let dto = AdminUpdateUserDto {
            role: Some("superuser".to_string()),
            ..Default::default()
        };

        assert!(UpdateUserParams::from_admin_dto(dto).is_err());
    }

    #[test]
    fn converts_entity_without_leaking_password() {
        let entity = test_utils::fixture::user::entity_builder()
            .role("admin")
            .build();

        let user = User::from_entity(entity).unwrap();
        assert!(user.is_admin());

        let json = serde_json::to_value(user.into_dto()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "admin");
    }
}
