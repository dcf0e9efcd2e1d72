use std::collections::HashMap;

use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::fact::FactRepository,
    error::AppError,
    model::{
        fact::{CreateFactParams, UpdateFactParams},
        query::FactQuery,
        vote::{VoteCounts, VoteTransition, VoteType},
    },
};

mod create;
mod list;
mod rename_category;
mod stats;
mod update;

fn query(pairs: &[(&str, &str)]) -> FactQuery {
    let params: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    FactQuery::parse(&params).unwrap()
}
