pub use super::category::Entity as Category;
pub use super::fact::Entity as Fact;
pub use super::user::Entity as User;
pub use super::vote::Entity as Vote;
