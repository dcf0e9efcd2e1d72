use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored vote row holds a type outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown vote type '{0}' stored in database")]
    UnknownStoredVoteType(String),

    /// A stored user row holds a role outside the known set.
    #[error("Unknown role '{0}' stored in database")]
    UnknownStoredRole(String),

    /// A stored password hash is not in `salt$digest` hex form.
    #[error("Malformed password hash stored for user {user_id}")]
    MalformedPasswordHash { user_id: i32 },
}
