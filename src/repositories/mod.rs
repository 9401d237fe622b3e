//! Repository layer for data access operations.
//!
//! Each repository maps one call onto one SQL statement. The traits are the
//! seam the usecases depend on; the `Pg*` types are the diesel_async
//! implementations used at runtime.

mod comment_repo;
mod recipe_repo;
mod user_likes_repo;

#[cfg(test)]
pub(crate) mod fakes;

pub use comment_repo::{CommentRepository, PgCommentRepository};
pub use recipe_repo::{PgRecipeRepository, RecipeRepository};
pub use user_likes_repo::{PgUserLikesRepository, UserLikesRepository};

use std::sync::Arc;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Each handle is an `Arc`, so cloning only bumps reference counts.
#[derive(Clone)]
pub struct Repositories {
    pub recipes: Arc<dyn RecipeRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub user_likes: Arc<dyn UserLikesRepository>,
}

impl Repositories {
    /// Creates the PostgreSQL-backed repositories sharing one pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            recipes: Arc::new(PgRecipeRepository::new(pool.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone())),
            user_likes: Arc::new(PgUserLikesRepository::new(pool)),
        }
    }
}
