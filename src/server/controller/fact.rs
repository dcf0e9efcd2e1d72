use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        fact::{CreateFactDto, FactData, FactDto, FactsData, StatsData, UpdateFactDto, VoteDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        middleware::auth::AuthGuard,
        model::{
            fact::{CreateFactParams, Fact, UpdateFactParams},
            query::FactQuery,
            vote::VoteType,
        },
        service::{fact::FactService, vote::VoteService},
        state::AppState,
    },
};

/// Tag for grouping fact endpoints in OpenAPI documentation
pub static FACT_TAG: &str = "fact";

fn facts_response(facts: Vec<Fact>) -> impl IntoResponse {
    let facts: Vec<FactDto> = facts.into_iter().map(Fact::into_dto).collect();

    (
        StatusCode::OK,
        Json(ApiResponse::list(facts.len(), FactsData { facts })),
    )
}

fn fact_response(status: StatusCode, fact: Fact) -> impl IntoResponse {
    (
        status,
        Json(ApiResponse::success(FactData {
            fact: fact.into_dto(),
        })),
    )
}

/// Runs a list query and projects each fact to the selected fields.
async fn list_projected(
    state: &AppState,
    viewer_id: i32,
    query: FactQuery,
) -> Result<impl IntoResponse, AppError> {
    let facts = FactService::new(&state.db).list(viewer_id, &query).await?;

    let facts = facts
        .into_iter()
        .map(|fact| query.project(fact.into_dto()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(facts.len(), FactsData { facts })),
    ))
}

/// List facts with filtering, sorting, field selection and pagination.
///
/// # Query
/// - `category=<name>` - Only facts in this category
/// - `votesInteresting[gte]=5` - Counter comparison (`gte`, `gt`, `lte`, `lt`, or bare for equality)
/// - `sort=-votesInteresting,createdAt` - Sort keys, `-` for descending (default `-createdAt`)
/// - `fields=text,category` - Projection, `id` always kept
/// - `page`, `limit` - 1-based page, at most 100 facts
#[utoipa::path(
    get,
    path = "/facts",
    tag = FACT_TAG,
    params(
        ("category" = Option<String>, Query, description = "Category name"),
        ("sort" = Option<String>, Query, description = "Comma-separated sort keys"),
        ("fields" = Option<String>, Query, description = "Comma-separated fields"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Facts per page (default and max: 100)")
    ),
    responses(
        (status = 200, description = "One page of facts", body = [FactDto]),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_facts(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let query = FactQuery::parse(&params)?;

    list_projected(&state, user.id, query).await
}

/// List facts of one category. Accepts the same query as `GET /facts`.
#[utoipa::path(
    get,
    path = "/facts/category/{category}",
    tag = FACT_TAG,
    params(
        ("category" = String, Path, description = "Category name")
    ),
    responses(
        (status = 200, description = "One page of facts", body = [FactDto]),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_facts_by_category(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut query = FactQuery::parse(&params)?;
    query.category = Some(category.trim().to_lowercase());

    list_projected(&state, user.id, query).await
}

#[utoipa::path(
    get,
    path = "/facts/{id}",
    tag = FACT_TAG,
    params(
        ("id" = i32, Path, description = "Fact ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved fact", body = FactData),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Fact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let fact = FactService::new(&state.db).get(user.id, id).await?;

    Ok(fact_response(StatusCode::OK, fact))
}

/// Submit a new fact owned by the caller.
///
/// # Returns
/// - `201 Created` - Fact created with zeroed counters
/// - `400 Bad Request` - Invalid text or source, or unknown category
#[utoipa::path(
    post,
    path = "/facts",
    tag = FACT_TAG,
    request_body = CreateFactDto,
    responses(
        (status = 201, description = "Successfully created fact", body = FactData),
        (status = 400, description = "Invalid fact data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fact(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFactDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateFactParams::from_dto(user.id, payload)?;
    let fact = FactService::new(&state.db).create(params).await?;

    Ok(fact_response(StatusCode::CREATED, fact))
}

/// Update a fact's text, source or category.
///
/// # Access Control
/// - Owner of the fact, or an admin
#[utoipa::path(
    patch,
    path = "/facts/{id}",
    tag = FACT_TAG,
    params(
        ("id" = i32, Path, description = "Fact ID")
    ),
    request_body = UpdateFactDto,
    responses(
        (status = 200, description = "Successfully updated fact", body = FactData),
        (status = 400, description = "Invalid fact data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User neither owns the fact nor is an admin", body = ErrorDto),
        (status = 404, description = "Fact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFactDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateFactParams::from_dto(id, payload)?;
    let fact = FactService::new(&state.db).update(&user, params).await?;

    Ok(fact_response(StatusCode::OK, fact))
}

/// Delete a fact and its votes.
///
/// # Access Control
/// - Owner of the fact, or an admin
#[utoipa::path(
    delete,
    path = "/facts/{id}",
    tag = FACT_TAG,
    params(
        ("id" = i32, Path, description = "Fact ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted fact"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User neither owns the fact nor is an admin", body = ErrorDto),
        (status = 404, description = "Fact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FactService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Vote on a fact.
///
/// Voting with the type already held retracts the vote; voting with another
/// type switches it.
#[utoipa::path(
    patch,
    path = "/facts/{id}/vote",
    tag = FACT_TAG,
    params(
        ("id" = i32, Path, description = "Fact ID")
    ),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Fact with updated counters and the caller's vote", body = FactData),
        (status = 400, description = "Invalid vote type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Fact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote_fact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vote_type = VoteType::parse(&payload.vote_type)?;
    let fact = VoteService::new(&state.db)
        .vote(user.id, id, vote_type)
        .await?;

    Ok(fact_response(StatusCode::OK, fact))
}

/// Facts submitted by the caller, newest first.
#[utoipa::path(
    get,
    path = "/facts/my-facts",
    tag = FACT_TAG,
    responses(
        (status = 200, description = "Caller's facts", body = [FactDto]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_facts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let facts = FactService::new(&state.db)
        .get_by_user(user.id, user.id)
        .await?;

    Ok(facts_response(facts))
}

/// Facts submitted by another user, newest first.
#[utoipa::path(
    get,
    path = "/facts/user/{user_id}",
    tag = FACT_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's facts", body = [FactDto]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_facts(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let facts = FactService::new(&state.db)
        .get_by_user(user.id, user_id)
        .await?;

    Ok(facts_response(facts))
}

/// Facts the caller voted on, each with the caller's vote.
#[utoipa::path(
    get,
    path = "/facts/voted-facts",
    tag = FACT_TAG,
    responses(
        (status = 200, description = "Voted facts", body = [FactDto]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_voted_facts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let facts = FactService::new(&state.db).get_voted(user.id).await?;

    Ok(facts_response(facts))
}

/// Per-category fact counts and average votes. Public.
#[utoipa::path(
    get,
    path = "/facts/stats",
    tag = FACT_TAG,
    responses(
        (status = 200, description = "Category statistics", body = StatsData),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats: Vec<_> = FactService::new(&state.db)
        .stats()
        .await?
        .into_iter()
        .map(|s| s.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(stats.len(), StatsData { stats })),
    ))
}
