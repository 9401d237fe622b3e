//! Recipe repository for async database operations.
//!
//! Provides CRUD operations for the recipes table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{NewRecipe, Recipe, UpdateRecipe};

/// Data access for recipes.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Inserts a recipe and returns it with its generated id and timestamps.
    async fn create(&self, new_recipe: NewRecipe) -> AppResult<Recipe>;

    /// Lists every recipe ordered by id.
    async fn fetch(&self) -> AppResult<Vec<Recipe>>;

    /// `None` when no recipe has this id.
    async fn fetch_by_id(&self, recipe_id: i32) -> AppResult<Option<Recipe>>;

    /// Overwrites every mutable column. An unknown id is a `Database` error
    /// since the statement returns no row.
    async fn update(&self, recipe_id: i32, changes: UpdateRecipe) -> AppResult<Recipe>;

    /// Returns the number of deleted rows (0 or 1).
    async fn delete(&self, recipe_id: i32) -> AppResult<usize>;
}

/// Recipe repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct PgRecipeRepository {
    pool: AsyncDbPool,
}

impl PgRecipeRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn create(&self, new_recipe: NewRecipe) -> AppResult<Recipe> {
        use crate::schema::recipes::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(recipes)
            .values(&new_recipe)
            .returning(Recipe::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert recipe"))
    }

    async fn fetch(&self) -> AppResult<Vec<Recipe>> {
        use crate::schema::recipes::dsl::*;
        let mut conn = self.pool.get().await?;

        recipes
            .order(id.asc())
            .select(Recipe::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "select recipes"))
    }

    async fn fetch_by_id(&self, recipe_id: i32) -> AppResult<Option<Recipe>> {
        use crate::schema::recipes::dsl::*;
        let mut conn = self.pool.get().await?;

        recipes
            .filter(id.eq(recipe_id))
            .select(Recipe::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "select recipe by id"))
    }

    async fn update(&self, recipe_id: i32, changes: UpdateRecipe) -> AppResult<Recipe> {
        use crate::schema::recipes::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(recipes.filter(id.eq(recipe_id)))
            .set((&changes, updated_at.eq(diesel::dsl::now)))
            .returning(Recipe::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update recipe"))
    }

    async fn delete(&self, recipe_id: i32) -> AppResult<usize> {
        use crate::schema::recipes::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(recipes.filter(id.eq(recipe_id)))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete recipe"))
    }
}
