//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, the vote state machine, credential checks
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Votes and account deletion touch several tables at once

pub mod auth;
pub mod category;
pub mod fact;
pub mod user;
pub mod vote;

#[cfg(test)]
mod test;
