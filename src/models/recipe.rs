use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Recipe model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub author_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewRecipe model for inserting new records
#[derive(Debug, Insertable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub author_id: Option<i32>,
}

/// UpdateRecipe replaces every mutable column, so a missing author clears it.
#[derive(Debug, AsChangeset, Clone, PartialEq)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub author_id: Option<i32>,
}
