//! In-memory repositories used by handler and usecase tests.
//!
//! They mimic the PostgreSQL behaviour the HTTP layer relies on: ids start
//! at 1, updates touch `updated_at`, likes are unique per (user, recipe).

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use jiff_diesel::DateTime;

use super::{CommentRepository, RecipeRepository, Repositories, UserLikesRepository};
use crate::error::{AppError, AppResult};
use crate::models::{Comment, NewComment, NewRecipe, NewUserLike, Recipe, UpdateRecipe, UserLike};

fn now() -> DateTime {
    DateTime::from(jiff::Zoned::now().datetime())
}

fn storage_failure(operation: &str) -> AppError {
    AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("simulated storage failure"),
    }
}

/// Shared switch and call counter so tests can assert a request never
/// reached the storage layer, or force it to fail.
#[derive(Default)]
pub struct Probe {
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl Probe {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn enter(&self, operation: &str) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(storage_failure(operation))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct InMemoryRecipeRepository {
    pub probe: Probe,
    rows: Mutex<Vec<Recipe>>,
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, new_recipe: NewRecipe) -> AppResult<Recipe> {
        self.probe.enter("insert recipe")?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = now();
        let recipe = Recipe {
            id,
            title: new_recipe.title,
            ingredients: new_recipe.ingredients,
            instructions: new_recipe.instructions,
            author_id: new_recipe.author_id,
            created_at: created,
            updated_at: created,
        };
        rows.push(recipe.clone());
        Ok(recipe)
    }

    async fn fetch(&self) -> AppResult<Vec<Recipe>> {
        self.probe.enter("select recipes")?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn fetch_by_id(&self, recipe_id: i32) -> AppResult<Option<Recipe>> {
        self.probe.enter("select recipe by id")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == recipe_id).cloned())
    }

    async fn update(&self, recipe_id: i32, changes: UpdateRecipe) -> AppResult<Recipe> {
        self.probe.enter("update recipe")?;
        let mut rows = self.rows.lock().unwrap();
        let recipe = rows
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or_else(|| AppError::Database {
                operation: "update recipe".to_string(),
                source: anyhow::anyhow!("Record not found"),
            })?;
        recipe.title = changes.title;
        recipe.ingredients = changes.ingredients;
        recipe.instructions = changes.instructions;
        recipe.author_id = changes.author_id;
        recipe.updated_at = now();
        Ok(recipe.clone())
    }

    async fn delete(&self, recipe_id: i32) -> AppResult<usize> {
        self.probe.enter("delete recipe")?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != recipe_id);
        Ok(before - rows.len())
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    pub probe: Probe,
    rows: Mutex<Vec<Comment>>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, new_comment: NewComment) -> AppResult<Comment> {
        self.probe.enter("insert comment")?;
        let mut rows = self.rows.lock().unwrap();
        let comment = Comment {
            id: rows.len() as i32 + 1,
            recipe_id: new_comment.recipe_id,
            author_id: new_comment.author_id,
            body: new_comment.body,
            created_at: now(),
        };
        rows.push(comment.clone());
        Ok(comment)
    }

    async fn fetch_by_recipe_id(&self, recipe_id: i32) -> AppResult<Vec<Comment>> {
        self.probe.enter("select comments by recipe id")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|c| c.recipe_id == recipe_id).cloned().collect())
    }

    async fn fetch_by_id(&self, comment_id: i32) -> AppResult<Option<Comment>> {
        self.probe.enter("select comment by id")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == comment_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryUserLikesRepository {
    pub probe: Probe,
    rows: Mutex<Vec<UserLike>>,
}

#[async_trait]
impl UserLikesRepository for InMemoryUserLikesRepository {
    async fn create(&self, new_like: NewUserLike) -> AppResult<UserLike> {
        self.probe.enter("insert user like")?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .iter()
            .find(|l| l.user_id == new_like.user_id && l.recipe_id == new_like.recipe_id)
        {
            return Ok(existing.clone());
        }
        let like = UserLike {
            id: rows.iter().map(|l| l.id).max().unwrap_or(0) + 1,
            user_id: new_like.user_id,
            recipe_id: new_like.recipe_id,
            created_at: now(),
        };
        rows.push(like.clone());
        Ok(like)
    }

    async fn delete(&self, user_id: i32, recipe_id: i32) -> AppResult<usize> {
        self.probe.enter("delete user like")?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| !(l.user_id == user_id && l.recipe_id == recipe_id));
        Ok(before - rows.len())
    }

    async fn fetch_by_user_id(&self, user_id: i32) -> AppResult<Vec<UserLike>> {
        self.probe.enter("select user likes by user id")?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|l| l.user_id == user_id).cloned().collect())
    }
}

/// Concrete handles kept alongside the type-erased `Repositories` so tests
/// can inspect probes after driving requests.
pub struct FakeRepositories {
    pub recipes: std::sync::Arc<InMemoryRecipeRepository>,
    pub comments: std::sync::Arc<InMemoryCommentRepository>,
    pub user_likes: std::sync::Arc<InMemoryUserLikesRepository>,
}

impl FakeRepositories {
    pub fn new() -> Self {
        Self {
            recipes: Default::default(),
            comments: Default::default(),
            user_likes: Default::default(),
        }
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            recipes: self.recipes.clone(),
            comments: self.comments.clone(),
            user_likes: self.user_likes.clone(),
        }
    }
}
