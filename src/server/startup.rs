use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    model::user::AdminPromotion,
    service::{category::CategoryService, user::UserService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions live in their own table next to the application data and expire
/// after `SESSION_DAYS` of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the API router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());

    store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.session_days))))
}

/// Inserts the default categories on first start.
pub async fn seed_categories(db: &DatabaseConnection) -> Result<(), AppError> {
    let seeded = CategoryService::new(db).seed_defaults().await?;

    if seeded > 0 {
        tracing::info!("Seeded {} default categories", seeded);
    }

    Ok(())
}

/// Promotes the configured admin account if it already exists.
///
/// Accounts signing up later with this email are made admin by the auth
/// service instead.
pub async fn promote_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(email) = &config.admin_email else {
        return Ok(());
    };

    match UserService::new(db).promote_admin(email).await? {
        AdminPromotion::Promoted => tracing::info!("Granted admin role to {}", email),
        AdminPromotion::AlreadyAdmin => tracing::info!("{} is already an admin", email),
        AdminPromotion::NoAccount => tracing::info!("Admin email {} has no account yet", email),
    }

    Ok(())
}
