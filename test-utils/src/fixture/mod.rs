//! In-memory entity fixtures.
//!
//! Fixtures build entity models without touching the database. Domain model
//! conversion tests and pure service logic use them where a full table setup
//! would add nothing.

pub mod fact;
pub mod user;
