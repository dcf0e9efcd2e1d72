use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, STATUS_SUCCESS},
        user::{LoginDto, SignupDto, UserData},
    },
    server::{
        error::AppError, extract::Json, middleware::session::AuthSession,
        model::user::SignupParams, service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in.
///
/// # Returns
/// - `201 Created` - Account created, session cookie set
/// - `400 Bad Request` - Validation failed or username/email already taken
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserData),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignupParams::from_dto(payload)?;

    let user = AuthService::new(&state.db, state.admin_email.as_deref())
        .signup(params)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserData {
            user: user.into_dto(),
        })),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Logged in, session cookie set
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Incorrect email or password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserData),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, state.admin_email.as_deref())
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(UserData {
            user: user.into_dto(),
        })),
    ))
}

/// Log out by clearing the session. Always succeeds.
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "status": STATUS_SUCCESS })),
    ))
}
