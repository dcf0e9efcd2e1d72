//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the service layer independent of the schema.
//!
//! Repositories that take part in multi-step writes are generic over
//! `ConnectionTrait`, so services can hand them either the pool or an open
//! transaction.

pub mod category;
pub mod fact;
pub mod user;
pub mod vote;

#[cfg(test)]
mod test;
