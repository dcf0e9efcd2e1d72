use std::fmt;

use serde::{Deserialize, Serialize};

/// The three reactions a user can have to a fact.
///
/// Serialized as the name of the fact counter the vote feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum VoteType {
    #[serde(rename = "votesInteresting")]
    Interesting,
    #[serde(rename = "votesMindBlowing")]
    MindBlowing,
    #[serde(rename = "votesFalse")]
    False,
}

impl VoteType {
    pub const ALL: [VoteType; 3] = [Self::Interesting, Self::MindBlowing, Self::False];

    /// Wire name, also the name of the fact counter the vote feeds.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interesting => "votesInteresting",
            Self::MindBlowing => "votesMindBlowing",
            Self::False => "votesFalse",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
