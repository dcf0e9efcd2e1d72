use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{AdminUpdateUserDto, UpdateMeDto, UpdatePasswordDto, UserData, UserDto, UsersData},
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            query::Pagination,
            user::{UpdatePasswordParams, UpdateUserParams, User},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

fn user_response(user: User) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(UserData {
            user: user.into_dto(),
        })),
    )
}

/// Get the logged-in user's profile.
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserData),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(user_response(user))
}

/// Update the caller's username, email or avatar.
///
/// Password fields are rejected; `updatePassword` handles those. An empty
/// `avatarUrl` removes the avatar.
#[utoipa::path(
    patch,
    path = "/users/updateMe",
    tag = USER_TAG,
    request_body = UpdateMeDto,
    responses(
        (status = 200, description = "Updated user", body = UserData),
        (status = 400, description = "Invalid data or password fields present", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateMeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateUserParams::from_me_dto(payload)?;
    let user = UserService::new(&state.db).update(user.id, params).await?;

    Ok(user_response(user))
}

/// Change the caller's password.
///
/// The session is cycled afterwards so older session ids stop working.
#[utoipa::path(
    patch,
    path = "/users/updatePassword",
    tag = USER_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = UserData),
        (status = 400, description = "New password invalid", body = ErrorDto),
        (status = 401, description = "Not authenticated or current password wrong", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdatePasswordParams::from_dto(payload)?;
    let service = UserService::new(&state.db);
    service.update_password(&user, params).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(user_response(service.get_by_id(user.id).await?))
}

/// Deactivate the caller's account and log out. Facts and votes are kept.
#[utoipa::path(
    delete,
    path = "/users/deleteMe",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account deactivated"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db).deactivate(user.id).await?;
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a page of users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Users per page (default and max: 100)")
    ),
    responses(
        (status = 200, description = "One page of users", body = UsersData),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let pagination = Pagination::parse(&params)?;
    let (users, _total) = UserService::new(&state.db).get_all(pagination).await?;

    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(users.len(), UsersData { users })),
    ))
}

/// # Access Control
/// - `Admin` - Only admins can view other users
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserData),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok(user_response(user))
}

/// Edit another user's username, email, role or active flag.
///
/// # Access Control
/// - `Admin` - Only admins can edit users
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = AdminUpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserData),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AdminUpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateUserParams::from_admin_dto(payload)?;
    let user = UserService::new(&state.db).update(id, params).await?;

    Ok(user_response(user))
}

/// Permanently delete a user with their facts and votes.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
