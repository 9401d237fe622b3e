mod app_error;
mod database_converter;

pub use app_error::{AppError, AppResult, ResultExt};
pub use database_converter::DatabaseErrorConverter;
