//! Comment DTOs.

use crate::models::{Comment, NewComment};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for commenting on a recipe. The recipe comes from the path.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub author_id: Option<i32>,
    #[validate(length(min = 1, max = 10000, message = "Comment must be between 1 and 10000 characters"))]
    #[schema(min_length = 1, max_length = 10000, example = "Lovely and simple")]
    pub body: String,
}

impl CreateCommentRequest {
    pub fn into_new_comment(self, recipe_id: i32) -> NewComment {
        NewComment {
            recipe_id,
            author_id: self.author_id,
            body: self.body,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: i32,
    pub recipe_id: i32,
    pub author_id: Option<i32>,
    pub body: String,
    #[schema(value_type = String, example = "2024-06-01T12:00:00")]
    pub created_at: jiff::civil::DateTime,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            recipe_id: comment.recipe_id,
            author_id: comment.author_id,
            body: comment.body,
            created_at: comment.created_at.to_jiff(),
        }
    }
}
