//! Usecase layer between the HTTP handlers and the repositories.
//!
//! Usecases forward each call to exactly one repository method and hand the
//! result back unchanged. They hold no state beyond the repository handle.

mod comment_usecase;
mod recipe_usecase;
mod user_likes_usecase;

pub use comment_usecase::CommentUsecase;
pub use recipe_usecase::RecipeUsecase;
pub use user_likes_usecase::UserLikesUsecase;

use crate::repositories::Repositories;

/// Aggregates all usecases for convenient access from handlers.
#[derive(Clone)]
pub struct Usecases {
    pub recipes: RecipeUsecase,
    pub comments: CommentUsecase,
    pub user_likes: UserLikesUsecase,
}

impl Usecases {
    /// Creates a new Usecases instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            recipes: RecipeUsecase::new(repos.recipes),
            comments: CommentUsecase::new(repos.comments),
            user_likes: UserLikesUsecase::new(repos.user_likes),
        }
    }
}
