//! Fact fixtures for creating in-memory test data.

use entity::fact;

use crate::fixture::user::default_created_at;

/// Default fact text.
pub const DEFAULT_TEXT: &str = "Octopuses have three hearts.";

/// Default fact source.
pub const DEFAULT_SOURCE: &str = "https://example.com/octopus";

/// Default fact category.
pub const DEFAULT_CATEGORY: &str = "science";

/// Creates a fact entity model owned by user `1` with zero votes.
pub fn entity() -> fact::Model {
    entity_builder().build()
}

/// Creates a fact entity builder for customization.
pub fn entity_builder() -> FactEntityBuilder {
    FactEntityBuilder {
        entity: fact::Model {
            id: 1,
            text: DEFAULT_TEXT.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            user_id: 1,
            votes_interesting: 0,
            votes_mind_blowing: 0,
            votes_false: 0,
            created_at: default_created_at(),
        },
    }
}

/// Builder for in-memory fact models.
pub struct FactEntityBuilder {
    entity: fact::Model,
}

impl FactEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.entity.user_id = user_id;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.entity.category = category.into();
        self
    }

    pub fn votes(mut self, interesting: i32, mind_blowing: i32, false_votes: i32) -> Self {
        self.entity.votes_interesting = interesting;
        self.entity.votes_mind_blowing = mind_blowing;
        self.entity.votes_false = false_votes;
        self
    }

    pub fn build(self) -> fact::Model {
        self.entity
    }
}
