//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Shared resources available to every handler.
///
/// `DatabaseConnection` is a pool, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Email that is granted the admin role when it signs up.
    pub admin_email: Option<String>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, admin_email: Option<String>) -> Self {
        Self { db, admin_email }
    }
}
