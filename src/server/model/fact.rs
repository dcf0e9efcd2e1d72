//! Fact domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;

use crate::{
    model::fact::{CategoryStatsDto, CreateFactDto, FactDto, FactOwnerDto, UpdateFactDto},
    server::{
        error::AppError,
        model::vote::{VoteCounts, VoteType},
        util::validation,
    },
};

/// Public profile of the user who submitted a fact.
#[derive(Debug, Clone, PartialEq)]
pub struct FactOwner {
    pub id: i32,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl FactOwner {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            avatar_url: entity.avatar_url,
        }
    }
}

/// A fact with its counters, owner profile and the viewing user's vote.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub id: i32,
    pub text: String,
    pub source: String,
    pub category: String,
    pub user_id: i32,
    pub counts: VoteCounts,
    pub created_at: DateTime<Utc>,
    pub owner: Option<FactOwner>,
    /// Vote of the user the fact is being shown to.
    pub user_vote: Option<VoteType>,
}

impl Fact {
    /// Converts an entity model, optionally joined with its owner, at the
    /// repository boundary. `user_vote` starts empty.
    pub fn from_entity(entity: entity::fact::Model, owner: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            source: entity.source,
            category: entity.category,
            user_id: entity.user_id,
            counts: VoteCounts {
                interesting: entity.votes_interesting,
                mind_blowing: entity.votes_mind_blowing,
                false_votes: entity.votes_false,
            },
            created_at: entity.created_at,
            owner: owner.map(FactOwner::from_entity),
            user_vote: None,
        }
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }

    pub fn into_dto(self) -> FactDto {
        FactDto {
            id: self.id,
            text: self.text,
            source: self.source,
            category: self.category,
            user_id: self.user_id,
            votes_interesting: self.counts.interesting,
            votes_mind_blowing: self.counts.mind_blowing,
            votes_false: self.counts.false_votes,
            created_at: self.created_at,
            user: self.owner.map(|owner| FactOwnerDto {
                id: owner.id,
                username: owner.username,
                avatar_url: owner.avatar_url,
            }),
            user_vote: self.user_vote,
        }
    }
}

/// Validated fact submission. The category's existence is checked by the
/// service against the database.
#[derive(Debug, Clone)]
pub struct CreateFactParams {
    pub user_id: i32,
    pub text: String,
    pub source: String,
    pub category: String,
}

impl CreateFactParams {
    pub fn from_dto(user_id: i32, dto: CreateFactDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            text: validation::fact_text(&dto.text)?,
            source: validation::web_url(&dto.source)?,
            category: validation::category_name(&dto.category)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateFactParams {
    pub id: i32,
    pub text: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
}

impl UpdateFactParams {
    pub fn from_dto(id: i32, dto: UpdateFactDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            text: dto.text.as_deref().map(validation::fact_text).transpose()?,
            source: dto.source.as_deref().map(validation::web_url).transpose()?,
            category: dto
                .category
                .as_deref()
                .map(validation::category_name)
                .transpose()?,
        })
    }
}

/// Aggregate row of the per-category statistics query.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CategoryStats {
    pub category: String,
    pub num_facts: i64,
    pub avg_interesting: Option<f64>,
    pub avg_mind_blowing: Option<f64>,
    pub avg_false: Option<f64>,
}

impl CategoryStats {
    pub fn into_dto(self) -> CategoryStatsDto {
        CategoryStatsDto {
            category: self.category,
            num_facts: self.num_facts,
            avg_interesting: self.avg_interesting.unwrap_or_default(),
            avg_mind_blowing: self.avg_mind_blowing.unwrap_or_default(),
            avg_false: self.avg_false.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_carries_owner_and_vote() {
        let entity = test_utils::fixture::fact::entity_builder().votes(4, 2, 1).build();
        let owner = test_utils::fixture::user::entity();

        let mut fact = Fact::from_entity(entity, Some(owner));
        fact.user_vote = Some(VoteType::MindBlowing);

        let json = serde_json::to_value(fact.into_dto()).unwrap();

        assert_eq!(json["votesInteresting"], 4);
        assert_eq!(json["votesMindBlowing"], 2);
        assert_eq!(json["votesFalse"], 1);
        assert_eq!(json["userVote"], "votesMindBlowing");
        assert_eq!(json["user"]["username"], "testuser");
        assert!(json["user"].get("email").is_none());
    }

    #[test]
    fn create_params_normalise_input() {
        let params = CreateFactParams::from_dto(
            7,
            CreateFactDto {
                text: "  Honey never spoils. ".to_string(),
                source: "https://example.com/honey".to_string(),
                category: " Science".to_string(),
            },
        )
        .unwrap();

        assert_eq!(params.text, "Honey never spoils.");
        assert_eq!(params.category, "science");
        assert_eq!(params.user_id, 7);
    }

    #[test]
    fn create_params_reject_bad_source() {
        let result = CreateFactParams::from_dto(
            1,
            CreateFactDto {
                text: "Something".to_string(),
                source: "not a url".to_string(),
                category: "science".to_string(),
            },
        );

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
