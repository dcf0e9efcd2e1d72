//! HTTP handlers for the `/api/v1` API.
//!
//! Handlers extract request data, run the auth guard, convert DTOs into
//! validated parameters and wrap service results in the response envelope.

pub mod auth;
pub mod category;
pub mod fact;
pub mod user;
