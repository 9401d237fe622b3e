use diesel::prelude::*;
use jiff_diesel::DateTime;

/// A single user/recipe pair from the `user_likes` join table.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::user_likes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserLike {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::user_likes)]
pub struct NewUserLike {
    pub user_id: i32,
    pub recipe_id: i32,
}
