//! Comment usecase.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{Comment, NewComment};
use crate::repositories::CommentRepository;

#[derive(Clone)]
pub struct CommentUsecase {
    repo: Arc<dyn CommentRepository>,
}

impl CommentUsecase {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new_comment: NewComment) -> AppResult<Comment> {
        self.repo.create(new_comment).await
    }

    pub async fn fetch_by_recipe_id(&self, recipe_id: i32) -> AppResult<Vec<Comment>> {
        self.repo.fetch_by_recipe_id(recipe_id).await
    }

    pub async fn fetch_by_id(&self, id: i32) -> AppResult<Option<Comment>> {
        self.repo.fetch_by_id(id).await
    }
}
