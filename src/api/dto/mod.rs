//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `recipe` - Recipe request/response DTOs
//! - `comment` - Comment request/response DTOs
//! - `user_like` - Like request/response DTOs
//! - `error` - Common error response DTO

mod comment;
mod error;
mod recipe;
mod user_like;

pub use comment::{CommentResponse, CreateCommentRequest};
pub use error::ErrorResponse;
pub use recipe::{CreateRecipeRequest, RecipeResponse, UpdateRecipeRequest};
pub use user_like::{CreateLikeRequest, UserLikeResponse};
