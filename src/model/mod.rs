//! Data transfer objects shared by the server and the client.
//!
//! Field names follow the JSON wire format (camelCase). Server builds derive
//! `utoipa::ToSchema` so the same types document the API.

pub mod api;
pub mod category;
pub mod fact;
pub mod user;
pub mod vote;
