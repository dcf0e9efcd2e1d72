use crate::server::error::{config::ConfigError, AppError};

/// Session inactivity expiry used when `SESSION_DAYS` is not set.
const DEFAULT_SESSION_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,

    /// Account promoted to admin on startup and at signup.
    pub admin_email: Option<String>,

    pub session_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_days = match std::env::var("SESSION_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or(ConfigError::InvalidEnvVar {
                    name: "SESSION_DAYS".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_SESSION_DAYS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .ok()
                .map(|email| email.trim().to_lowercase())
                .filter(|email| !email.is_empty()),
            session_days,
        })
    }
}
