//! Likes usecase.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{NewUserLike, UserLike};
use crate::repositories::UserLikesRepository;

#[derive(Clone)]
pub struct UserLikesUsecase {
    repo: Arc<dyn UserLikesRepository>,
}

impl UserLikesUsecase {
    pub fn new(repo: Arc<dyn UserLikesRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_like(&self, new_like: NewUserLike) -> AppResult<UserLike> {
        self.repo.create(new_like).await
    }

    /// Returns `true` if a like was removed.
    pub async fn remove_like(&self, user_id: i32, recipe_id: i32) -> AppResult<bool> {
        let affected = self.repo.delete(user_id, recipe_id).await?;
        Ok(affected > 0)
    }

    pub async fn fetch_by_user_id(&self, user_id: i32) -> AppResult<Vec<UserLike>> {
        self.repo.fetch_by_user_id(user_id).await
    }
}
