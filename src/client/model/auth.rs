use crate::model::user::UserDto;

/// Logged-in user as known to the client, shared through context.
#[derive(Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once `/users/me` has answered, whatever the result.
    pub fetched: bool,
}

impl UserState {
    pub fn logged_in(user: UserDto) -> Self {
        Self {
            user: Some(user),
            fetched: true,
        }
    }

    pub fn logged_out() -> Self {
        Self {
            user: None,
            fetched: true,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|u| u.id)
    }
}
