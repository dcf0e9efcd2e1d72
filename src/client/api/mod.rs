#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod category;

#[cfg(feature = "web")]
pub mod fact;

#[cfg(feature = "web")]
pub mod user;
