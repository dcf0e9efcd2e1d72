use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::vote::VoteRepository,
    error::AppError,
    model::vote::{VoteCounts, VoteType},
};

mod create;
mod get_for_facts;
mod tally;
