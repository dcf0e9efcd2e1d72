use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::fail;

pub const NOT_LOGGED_IN_MESSAGE: &str = "You are not logged in! Please log in to get access.";
pub const ACCESS_DENIED_MESSAGE: &str = "You do not have permission to perform this action";
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists or was deactivated.
    #[error("User {0} from session not found or inactive")]
    UserNotInDatabase(i32),

    /// The user lacks a required permission.
    ///
    /// # Fields
    /// - User ID
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with unknown email, wrong password or an inactive account.
    #[error("Incorrect email or password")]
    IncorrectCredentials,

    /// Password change with a wrong current password.
    #[error("Current password is wrong")]
    IncorrectCurrentPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 with the "not logged in" message
/// - `IncorrectCredentials` / `IncorrectCurrentPassword` → 401
/// - `AccessDenied` → 403
///
/// All errors are logged at debug level; client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                fail(StatusCode::UNAUTHORIZED, NOT_LOGGED_IN_MESSAGE)
            }
            Self::IncorrectCredentials => {
                fail(StatusCode::UNAUTHORIZED, INCORRECT_CREDENTIALS_MESSAGE)
            }
            Self::IncorrectCurrentPassword => {
                fail(StatusCode::UNAUTHORIZED, "Your current password is wrong.")
            }
            Self::AccessDenied(_, _) => fail(StatusCode::FORBIDDEN, ACCESS_DENIED_MESSAGE),
        }
    }
}
