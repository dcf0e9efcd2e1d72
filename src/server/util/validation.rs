//! Input validation shared by the parameter constructors.
//!
//! Each function returns the normalised value or a 400 with a message fit for
//! display.

use url::Url;

use crate::server::error::AppError;

pub const MAX_FACT_LENGTH: usize = 200;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=30;

fn bad_request(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

pub fn username(value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if !USERNAME_LENGTH.contains(&value.chars().count()) {
        return Err(bad_request("Username must be between 3 and 30 characters"));
    }

    Ok(value.to_string())
}

/// Normalises an email to lowercase. Only the presence of `@` between two
/// non-empty parts is checked.
pub fn email(value: &str) -> Result<String, AppError> {
    let value = value.trim().to_lowercase();

    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(bad_request("Please provide a valid email")),
    }
}

pub fn new_password(password: &str, confirm: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(bad_request("Password must be at least 6 characters"));
    }
    if password != confirm {
        return Err(bad_request("Passwords are not the same!"));
    }

    Ok(())
}

pub fn fact_text(value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(bad_request("A fact must have text"));
    }
    if value.chars().count() > MAX_FACT_LENGTH {
        return Err(bad_request("A fact must have less or equal than 200 characters"));
    }

    Ok(value.to_string())
}

/// Absolute `http` or `https` URL with a host.
pub fn web_url(value: &str) -> Result<String, AppError> {
    let value = value.trim();

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(value.to_string())
        }
        _ => Err(bad_request("Please provide a valid URL")),
    }
}

pub fn category_name(value: &str) -> Result<String, AppError> {
    let value = value.trim().to_lowercase();

    if value.is_empty() {
        return Err(bad_request("A category must have a name"));
    }

    Ok(value)
}

/// Six hex digits, stored lowercase. A leading `#` is rejected.
pub fn colour(value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad_request("Colour must be a 6-digit hex code without '#'"));
    }

    Ok(value.to_lowercase())
}
