use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Comment left on a recipe. Comments are never edited.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub id: i32,
    pub recipe_id: i32,
    pub author_id: Option<i32>,
    pub body: String,
    pub created_at: DateTime,
}

#[derive(Debug, Insertable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub recipe_id: i32,
    pub author_id: Option<i32>,
    pub body: String,
}
