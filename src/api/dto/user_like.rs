//! Like DTOs.

use crate::models::{NewUserLike, UserLike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for liking a recipe. The user comes from the path.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateLikeRequest {
    #[validate(range(min = 1, message = "Recipe ID must be positive"))]
    #[schema(minimum = 1, example = 5)]
    pub recipe_id: i32,
}

impl CreateLikeRequest {
    pub fn into_new_like(self, user_id: i32) -> NewUserLike {
        NewUserLike {
            user_id,
            recipe_id: self.recipe_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserLikeResponse {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    #[schema(value_type = String, example = "2024-06-01T12:00:00")]
    pub created_at: jiff::civil::DateTime,
}

impl From<UserLike> for UserLikeResponse {
    fn from(like: UserLike) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
            recipe_id: like.recipe_id,
            created_at: like.created_at.to_jiff(),
        }
    }
}
