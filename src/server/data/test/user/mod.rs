use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        query::Pagination,
        user::{AdminPromotion, CreateUserParams, Role, UpdateUserParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_all_paginated;
mod promote_to_admin;
mod update;
