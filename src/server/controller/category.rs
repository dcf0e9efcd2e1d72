use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        category::{CategoriesData, CategoryData, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories, ordered by name. Public.
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = CategoriesData),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories: Vec<_> = CategoryService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::list(
            categories.len(),
            CategoriesData { categories },
        )),
    ))
}

/// Get a single category. Public.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryData),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(CategoryData {
            category: category.into_dto(),
        })),
    ))
}

/// Create a category.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Returns
/// - `201 Created` - Category created
/// - `400 Bad Request` - Invalid name or colour, or name already used
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryData),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateCategoryParams::from_dto(payload)?;
    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CategoryData {
            category: category.into_dto(),
        })),
    ))
}

/// Update a category's name and/or colour.
///
/// Renaming a category moves every fact filed under the old name.
///
/// # Access Control
/// - `Admin` - Only admins can update categories
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryData),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateCategoryParams::from_dto(id, payload)?;
    let category = CategoryService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(CategoryData {
            category: category.into_dto(),
        })),
    ))
}

/// Delete a category.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
