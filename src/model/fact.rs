use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::vote::VoteType;

/// Public profile of a fact's owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FactOwnerDto {
    pub id: i32,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FactDto {
    pub id: i32,
    pub text: String,
    pub source: String,
    pub category: String,
    pub user_id: i32,
    pub votes_interesting: i32,
    pub votes_mind_blowing: i32,
    pub votes_false: i32,
    pub created_at: DateTime<Utc>,
    pub user: Option<FactOwnerDto>,
    /// The caller's vote on this fact, if any.
    pub user_vote: Option<VoteType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateFactDto {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateFactDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VoteDto {
    /// Kept as a string so an unknown name is answered with "Invalid vote type".
    #[serde(default)]
    pub vote_type: String,
}

impl From<VoteType> for VoteDto {
    fn from(vote_type: VoteType) -> Self {
        Self {
            vote_type: vote_type.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FactData {
    pub fact: FactDto,
}

/// List payload. The server may project facts down to selected fields, so the
/// item type is generic; clients read full `FactDto`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactsData<F = FactDto> {
    pub facts: Vec<F>,
}

/// Per-category aggregate returned by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatsDto {
    pub category: String,
    pub num_facts: i64,
    pub avg_interesting: f64,
    pub avg_mind_blowing: f64,
    pub avg_false: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StatsData {
    pub stats: Vec<CategoryStatsDto>,
}
