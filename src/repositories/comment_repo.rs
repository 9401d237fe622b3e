//! Comment repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{Comment, NewComment};

/// Data access for recipe comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, new_comment: NewComment) -> AppResult<Comment>;

    /// Comments on one recipe, oldest first.
    async fn fetch_by_recipe_id(&self, recipe_id: i32) -> AppResult<Vec<Comment>>;

    async fn fetch_by_id(&self, comment_id: i32) -> AppResult<Option<Comment>>;
}

#[derive(Clone)]
pub struct PgCommentRepository {
    pool: AsyncDbPool,
}

impl PgCommentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> AppResult<Comment> {
        use crate::schema::comments::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(comments)
            .values(&new_comment)
            .returning(Comment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert comment"))
    }

    async fn fetch_by_recipe_id(&self, target_recipe_id: i32) -> AppResult<Vec<Comment>> {
        use crate::schema::comments::dsl::*;
        let mut conn = self.pool.get().await?;

        comments
            .filter(recipe_id.eq(target_recipe_id))
            .order(id.asc())
            .select(Comment::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| {
                DatabaseErrorConverter::convert_diesel_error(e, "select comments by recipe id")
            })
    }

    async fn fetch_by_id(&self, comment_id: i32) -> AppResult<Option<Comment>> {
        use crate::schema::comments::dsl::*;
        let mut conn = self.pool.get().await?;

        comments
            .filter(id.eq(comment_id))
            .select(Comment::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "select comment by id"))
    }
}
