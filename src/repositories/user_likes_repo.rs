//! Repository for the `user_likes` join table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{NewUserLike, UserLike};

/// Data access for likes.
#[async_trait]
pub trait UserLikesRepository: Send + Sync {
    /// Records a like. Liking the same recipe twice returns the existing row.
    async fn create(&self, new_like: NewUserLike) -> AppResult<UserLike>;

    /// Removes a like and returns the number of deleted rows (0 or 1).
    async fn delete(&self, user_id: i32, recipe_id: i32) -> AppResult<usize>;

    async fn fetch_by_user_id(&self, user_id: i32) -> AppResult<Vec<UserLike>>;
}

#[derive(Clone)]
pub struct PgUserLikesRepository {
    pool: AsyncDbPool,
}

impl PgUserLikesRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLikesRepository for PgUserLikesRepository {
    async fn create(&self, new_like: NewUserLike) -> AppResult<UserLike> {
        use crate::schema::user_likes::dsl::*;
        let mut conn = self.pool.get().await?;

        // no-op update on conflict so RETURNING still yields the stored row
        diesel::insert_into(user_likes)
            .values(&new_like)
            .on_conflict((user_id, recipe_id))
            .do_update()
            .set(recipe_id.eq(excluded(recipe_id)))
            .returning(UserLike::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert user like"))
    }

    async fn delete(&self, target_user_id: i32, target_recipe_id: i32) -> AppResult<usize> {
        use crate::schema::user_likes::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(
            user_likes
                .filter(user_id.eq(target_user_id))
                .filter(recipe_id.eq(target_recipe_id)),
        )
        .execute(&mut conn)
        .await
        .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete user like"))
    }

    async fn fetch_by_user_id(&self, target_user_id: i32) -> AppResult<Vec<UserLike>> {
        use crate::schema::user_likes::dsl::*;
        let mut conn = self.pool.get().await?;

        user_likes
            .filter(user_id.eq(target_user_id))
            .order(id.asc())
            .select(UserLike::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| {
                DatabaseErrorConverter::convert_diesel_error(e, "select user likes by user id")
            })
    }
}
