//! Vote types and the vote state machine.
//!
//! A user holds at most one vote per fact. Voting with the same type again
//! retracts the vote, voting with another type switches it. `VoteTransition`
//! captures which of those happened; the fact repository moves the
//! denormalised counters by it.

use crate::server::error::{internal::InternalError, AppError};

pub use crate::model::vote::VoteType;

impl VoteType {
    /// Parses a vote type sent by a client.
    ///
    /// # Returns
    /// - `Ok(VoteType)` - Known wire name
    /// - `Err(AppError::BadRequest)` - "Invalid vote type"
    pub fn parse(value: &str) -> Result<Self, AppError> {
        Self::from_wire(value).ok_or_else(|| AppError::BadRequest("Invalid vote type".to_string()))
    }

    /// Parses a vote type read back from the database.
    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        Self::from_wire(value)
            .ok_or_else(|| InternalError::UnknownStoredVoteType(value.to_string()).into())
    }
}

/// Outcome of a user voting on a fact, given their previous vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// First vote by this user on the fact.
    Cast(VoteType),
    /// Same type as before; the vote is removed.
    Retract(VoteType),
    /// Different type than before; the vote moves.
    Switch { from: VoteType, to: VoteType },
}

impl VoteTransition {
    pub fn resolve(existing: Option<VoteType>, requested: VoteType) -> Self {
        match existing {
            None => Self::Cast(requested),
            Some(current) if current == requested => Self::Retract(current),
            Some(current) => Self::Switch {
                from: current,
                to: requested,
            },
        }
    }

    /// The caller's vote once the transition has been applied.
    pub fn user_vote(&self) -> Option<VoteType> {
        match self {
            Self::Cast(t) => Some(*t),
            Self::Retract(_) => None,
            Self::Switch { to, .. } => Some(*to),
        }
    }
}

/// Denormalised vote counters stored on a fact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteCounts {
    pub interesting: i32,
    pub mind_blowing: i32,
    pub false_votes: i32,
}

impl VoteCounts {
    pub fn get(&self, vote_type: VoteType) -> i32 {
        match vote_type {
            VoteType::Interesting => self.interesting,
            VoteType::MindBlowing => self.mind_blowing,
            VoteType::False => self.false_votes,
        }
    }

    fn slot(&mut self, vote_type: VoteType) -> &mut i32 {
        match vote_type {
            VoteType::Interesting => &mut self.interesting,
            VoteType::MindBlowing => &mut self.mind_blowing,
            VoteType::False => &mut self.false_votes,
        }
    }

    pub fn set(&mut self, vote_type: VoteType, value: i32) {
        *self.slot(vote_type) = value;
    }
}
