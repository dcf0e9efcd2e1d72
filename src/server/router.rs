use axum::{
    extract::{DefaultBodyLimit, OriginalUri},
    http::StatusCode,
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, category, fact, user},
    error,
    state::AppState,
};

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 10 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Factly API", description = "Share, browse and vote on facts"),
    tags(
        (name = "auth", description = "Signup, login and logout"),
        (name = "user", description = "Account and user management"),
        (name = "fact", description = "Facts, votes and statistics"),
        (name = "category", description = "Fact categories"),
    )
)]
struct ApiDoc;

fn v1_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::signup))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_me))
        .routes(routes!(user::update_me))
        .routes(routes!(user::update_password))
        .routes(routes!(user::delete_me))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(fact::get_facts, fact::create_fact))
        .routes(routes!(fact::get_stats))
        .routes(routes!(fact::get_my_facts))
        .routes(routes!(fact::get_voted_facts))
        .routes(routes!(fact::get_user_facts))
        .routes(routes!(fact::get_facts_by_category))
        .routes(routes!(fact::get_fact, fact::update_fact, fact::delete_fact))
        .routes(routes!(fact::vote_fact))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
}

async fn route_not_found(OriginalUri(uri): OriginalUri) -> Response {
    error::fail(
        StatusCode::NOT_FOUND,
        format!("Can't find {} on this server!", uri.path()),
    )
}

/// Builds the API router: versioned endpoints under `/api/v1` and the
/// Swagger UI at `/api/docs`.
///
/// Unknown paths below `/api/v1` answer with the JSON 404 envelope; everything
/// else falls through to the client application.
pub fn router() -> Router<AppState> {
    let (v1_router, v1_doc) = v1_routes().split_for_parts();
    let doc = ApiDoc::openapi().nest("/api/v1", v1_doc);

    Router::new()
        .nest("/api/v1", v1_router.fallback(route_not_found))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", doc))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
