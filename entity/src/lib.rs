//! SeaORM entity definitions for the Factly database schema.
//!
//! Each module mirrors one table created by the `migration` crate. Entities are
//! consumed by the server's data layer and by `test-utils` to build in-memory
//! schemas.

pub mod category;
pub mod fact;
pub mod prelude;
pub mod user;
pub mod vote;
