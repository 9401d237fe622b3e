mod comment;
mod recipe;
mod user_like;

pub use comment::{Comment, NewComment};
pub use recipe::{NewRecipe, Recipe, UpdateRecipe};
pub use user_like::{NewUserLike, UserLike};
