//! Recipe request handlers.

use crate::api::doc::RECIPE_TAG;
use crate::api::dto::{CreateRecipeRequest, ErrorResponse, RecipeResponse, UpdateRecipeRequest};
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

const INVALID_RECIPE_ID: &str = "Invalid recipe ID";

/// Creates recipe-related routes.
pub fn recipe_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(fetch_recipes, create_recipe))
        .routes(routes!(get_recipe_by_id, update_recipe, delete_recipe))
}

/// POST /recipes - Create a recipe
#[utoipa::path(
    post,
    path = "/recipes",
    tag = RECIPE_TAG,
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Failed to create recipe", body = ErrorResponse)
    )
)]
async fn create_recipe(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRecipeRequest>,
) -> AppResult<(StatusCode, Json<RecipeResponse>)> {
    let recipe = state
        .usecases
        .recipes
        .create(payload.into_new_recipe())
        .await
        .failed_to("create recipe")?;
    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}

/// GET /recipes - List every recipe
#[utoipa::path(
    get,
    path = "/recipes",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "All recipes ordered by id", body = Vec<RecipeResponse>),
        (status = 500, description = "Failed to fetch recipes", body = ErrorResponse)
    )
)]
async fn fetch_recipes(State(state): State<AppState>) -> AppResult<Json<Vec<RecipeResponse>>> {
    let recipes = state
        .usecases
        .recipes
        .fetch()
        .await
        .failed_to("fetch recipes")?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

/// GET /recipes/{id} - Get a recipe
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe found", body = RecipeResponse),
        (status = 400, description = "Invalid recipe ID", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Failed to fetch recipe", body = ErrorResponse)
    )
)]
async fn get_recipe_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<RecipeResponse>> {
    let id = path_param(id, INVALID_RECIPE_ID)?;
    let recipe = state
        .usecases
        .recipes
        .fetch_by_id(id)
        .await
        .failed_to("fetch recipe")?
        .ok_or_else(|| AppError::not_found("Recipe"))?;
    Ok(Json(RecipeResponse::from(recipe)))
}

/// PUT /recipes/{id} - Replace a recipe
///
/// Every mutable field is overwritten; omitted optional fields are cleared.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Invalid recipe ID or input", body = ErrorResponse),
        (status = 500, description = "Failed to update recipe, including an unknown id", body = ErrorResponse)
    )
)]
async fn update_recipe(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<UpdateRecipeRequest>,
) -> AppResult<Json<RecipeResponse>> {
    let id = path_param(id, INVALID_RECIPE_ID)?;
    let recipe = state
        .usecases
        .recipes
        .update(id, payload.into_update_recipe())
        .await
        .failed_to("update recipe")?;
    Ok(Json(RecipeResponse::from(recipe)))
}

/// DELETE /recipes/{id} - Delete a recipe
///
/// Deleting an id that does not exist still answers 204.
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 400, description = "Invalid recipe ID", body = ErrorResponse),
        (status = 500, description = "Failed to delete recipe", body = ErrorResponse)
    )
)]
async fn delete_recipe(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_param(id, INVALID_RECIPE_ID)?;
    let deleted = state
        .usecases
        .recipes
        .delete(id)
        .await
        .failed_to("delete recipe")?;
    if !deleted {
        tracing::debug!(recipe_id = id, "Delete matched no recipe");
    }
    Ok(StatusCode::NO_CONTENT)
}
