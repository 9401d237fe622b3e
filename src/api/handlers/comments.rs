//! Comment request handlers.

use crate::api::doc::COMMENT_TAG;
use crate::api::dto::{CommentResponse, CreateCommentRequest, ErrorResponse};
use crate::error::{AppError, AppResult, ResultExt};
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

/// Creates comment-related routes.
///
/// The recipe segment is named `id` to share the parameter slot with
/// `/recipes/{id}`.
pub fn comment_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(fetch_comments_by_recipe_id, create_comment))
        .routes(routes!(get_comment_by_id))
}

/// POST /recipes/{id}/comments - Comment on a recipe
#[utoipa::path(
    post,
    path = "/recipes/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Invalid recipe ID or input", body = ErrorResponse),
        (status = 500, description = "Failed to create comment", body = ErrorResponse)
    )
)]
async fn create_comment(
    State(state): State<AppState>,
    recipe_id: Result<Path<i32>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    let recipe_id = path_param(recipe_id, "Invalid recipe ID")?;
    let comment = state
        .usecases
        .comments
        .create(payload.into_new_comment(recipe_id))
        .await
        .failed_to("create comment")?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// GET /recipes/{id}/comments - List comments on a recipe
#[utoipa::path(
    get,
    path = "/recipes/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Comments on the recipe", body = Vec<CommentResponse>),
        (status = 400, description = "Invalid recipe ID", body = ErrorResponse),
        (status = 500, description = "Failed to fetch comments", body = ErrorResponse)
    )
)]
async fn fetch_comments_by_recipe_id(
    State(state): State<AppState>,
    recipe_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let recipe_id = path_param(recipe_id, "Invalid recipe ID")?;
    let comments = state
        .usecases
        .comments
        .fetch_by_recipe_id(recipe_id)
        .await
        .failed_to("fetch comments")?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

/// GET /comments/{id} - Get a comment
#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment found", body = CommentResponse),
        (status = 400, description = "Invalid comment ID", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch comment", body = ErrorResponse)
    )
)]
async fn get_comment_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<CommentResponse>> {
    let id = path_param(id, "Invalid comment ID")?;
    let comment = state
        .usecases
        .comments
        .fetch_by_id(id)
        .await
        .failed_to("fetch comment")?
        .ok_or_else(|| AppError::not_found("Comment"))?;
    Ok(Json(CommentResponse::from(comment)))
}
