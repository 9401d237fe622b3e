//! Like request handlers.

use crate::api::doc::LIKE_TAG;
use crate::api::dto::{CreateLikeRequest, ErrorResponse, UserLikeResponse};
use crate::error::{AppResult, ResultExt};
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::path_param;

const INVALID_USER_ID: &str = "Invalid user ID";

/// Creates like-related routes.
pub fn user_like_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(fetch_likes_by_user_id, add_like))
        .routes(routes!(remove_like))
}

/// POST /users/{user_id}/likes - Like a recipe
///
/// Liking the same recipe twice returns the existing like.
#[utoipa::path(
    post,
    path = "/users/{user_id}/likes",
    tag = LIKE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = CreateLikeRequest,
    responses(
        (status = 201, description = "Like recorded", body = UserLikeResponse),
        (status = 400, description = "Invalid user ID or input", body = ErrorResponse),
        (status = 500, description = "Failed to add like", body = ErrorResponse)
    )
)]
async fn add_like(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<CreateLikeRequest>,
) -> AppResult<(StatusCode, Json<UserLikeResponse>)> {
    let user_id = path_param(user_id, INVALID_USER_ID)?;
    let like = state
        .usecases
        .user_likes
        .add_like(payload.into_new_like(user_id))
        .await
        .failed_to("add like")?;
    Ok((StatusCode::CREATED, Json(UserLikeResponse::from(like))))
}

/// DELETE /users/{user_id}/likes/{recipe_id} - Remove a like
#[utoipa::path(
    delete,
    path = "/users/{user_id}/likes/{recipe_id}",
    tag = LIKE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Like removed, or there was none"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 500, description = "Failed to remove like", body = ErrorResponse)
    )
)]
async fn remove_like(
    State(state): State<AppState>,
    ids: Result<Path<(i32, i32)>, PathRejection>,
) -> AppResult<StatusCode> {
    let (user_id, recipe_id) = path_param(ids, "Invalid ID")?;
    state
        .usecases
        .user_likes
        .remove_like(user_id, recipe_id)
        .await
        .failed_to("remove like")?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/{user_id}/likes - List a user's likes
#[utoipa::path(
    get,
    path = "/users/{user_id}/likes",
    tag = LIKE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Likes of the user", body = Vec<UserLikeResponse>),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 500, description = "Failed to fetch likes", body = ErrorResponse)
    )
)]
async fn fetch_likes_by_user_id(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<UserLikeResponse>>> {
    let user_id = path_param(user_id, INVALID_USER_ID)?;
    let likes = state
        .usecases
        .user_likes
        .fetch_by_user_id(user_id)
        .await
        .failed_to("fetch likes")?;
    Ok(Json(likes.into_iter().map(UserLikeResponse::from).collect()))
}
