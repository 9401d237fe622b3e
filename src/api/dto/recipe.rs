//! Recipe-related DTOs for API requests and responses.

use crate::models::{NewRecipe, Recipe, UpdateRecipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new recipe.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255, example = "Soup")]
    pub title: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub author_id: Option<i32>,
}

impl CreateRecipeRequest {
    /// Converts the request DTO into a NewRecipe model for database insertion.
    pub fn into_new_recipe(self) -> NewRecipe {
        NewRecipe {
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            author_id: self.author_id,
        }
    }
}

/// Request body for replacing a recipe.
///
/// The update is wholesale: omitted fields are reset to empty or null.
/// An `id` in the body is ignored in favour of the one in the path.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255)]
    pub title: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub author_id: Option<i32>,
}

impl UpdateRecipeRequest {
    pub fn into_update_recipe(self) -> UpdateRecipe {
        UpdateRecipe {
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            author_id: self.author_id,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub author_id: Option<i32>,
    #[schema(value_type = String, example = "2024-06-01T12:00:00")]
    pub created_at: jiff::civil::DateTime,
    #[schema(value_type = String, example = "2024-06-01T12:00:00")]
    pub updated_at: jiff::civil::DateTime,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            author_id: recipe.author_id,
            created_at: recipe.created_at.to_jiff(),
            updated_at: recipe.updated_at.to_jiff(),
        }
    }
}
