//! Recipe usecase.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{NewRecipe, Recipe, UpdateRecipe};
use crate::repositories::RecipeRepository;

/// Pass-through over [`RecipeRepository`].
#[derive(Clone)]
pub struct RecipeUsecase {
    repo: Arc<dyn RecipeRepository>,
}

impl RecipeUsecase {
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new recipe.
    ///
    /// # Returns
    /// The created recipe with generated id and timestamps
    pub async fn create(&self, new_recipe: NewRecipe) -> AppResult<Recipe> {
        self.repo.create(new_recipe).await
    }

    /// Lists all recipes.
    pub async fn fetch(&self) -> AppResult<Vec<Recipe>> {
        self.repo.fetch().await
    }

    /// Gets a recipe by its ID.
    ///
    /// # Returns
    /// `Some(Recipe)` if found, `None` otherwise
    pub async fn fetch_by_id(&self, id: i32) -> AppResult<Option<Recipe>> {
        self.repo.fetch_by_id(id).await
    }

    /// Replaces the recipe's content. Fails when the id is unknown.
    pub async fn update(&self, id: i32, changes: UpdateRecipe) -> AppResult<Recipe> {
        self.repo.update(id, changes).await
    }

    /// Deletes a recipe.
    ///
    /// # Returns
    /// `true` if a row was removed, `false` if the id was unknown
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete(id).await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fakes::InMemoryRecipeRepository;

    fn soup() -> NewRecipe {
        NewRecipe {
            title: "Soup".to_string(),
            ingredients: "water, salt".to_string(),
            instructions: "boil".to_string(),
            author_id: Some(7),
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch_by_id() {
        let usecase = RecipeUsecase::new(Arc::new(InMemoryRecipeRepository::default()));

        let created = usecase.create(soup()).await.unwrap();
        assert!(created.id > 0);

        let fetched = usecase.fetch_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let usecase = RecipeUsecase::new(Arc::new(InMemoryRecipeRepository::default()));
        let created = usecase.create(soup()).await.unwrap();

        assert!(usecase.delete(created.id).await.unwrap());
        assert!(!usecase.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let repo = Arc::new(InMemoryRecipeRepository::default());
        repo.probe.fail();
        let usecase = RecipeUsecase::new(repo);

        let error = usecase.fetch().await.unwrap_err();
        assert_eq!(error.to_string(), "Database operation failed: select recipes");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_a_storage_error() {
        let usecase = RecipeUsecase::new(Arc::new(InMemoryRecipeRepository::default()));
        let changes = UpdateRecipe {
            title: "Ghost".to_string(),
            ingredients: String::new(),
            instructions: String::new(),
            author_id: None,
        };

        let error = usecase.update(42, changes).await.unwrap_err();
        assert!(matches!(error, crate::error::AppError::Database { .. }));
    }
}
