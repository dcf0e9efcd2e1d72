//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` builder for customization
//! and a `create_*` shorthand for the default case.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(db).await?;
//! let fact = factory::fact::create_fact(db, user.id).await?;
//!
//! let (owner, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(db)
//!     .username("root")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! let fact = factory::fact::FactFactory::new(db, admin.id)
//!     .category("science")
//!     .votes(3, 0, 1)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod fact;
pub mod helpers;
pub mod user;
pub mod vote;

pub use category::create_category;
pub use fact::create_fact;
pub use user::{create_admin, create_user};
pub use vote::create_vote;
