//! User fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::user;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "testuser@factly.test";

/// Fixed creation timestamp so assertions on serialized output are stable.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"testuser"`
/// - email: `"testuser@factly.test"`
/// - role: `"user"`
/// - avatar_url: `None`
/// - active: `true`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let admin = fixture::user::entity_builder().id(7).role("admin").build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder {
        entity: user::Model {
            id: 1,
            username: DEFAULT_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password_hash: "!".to_string(),
            role: "user".to_string(),
            avatar_url: None,
            active: true,
            created_at: default_created_at(),
        },
    }
}

/// Builder for in-memory user models.
pub struct UserEntityBuilder {
    entity: user::Model,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.entity.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = role.into();
        self
    }

    pub fn avatar_url(mut self, avatar_url: Option<&str>) -> Self {
        self.entity.avatar_url = avatar_url.map(str::to_string);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    pub fn build(self) -> user::Model {
        self.entity
    }
}
