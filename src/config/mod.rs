//! Configuration management
//!
//! Layered TOML files plus `RECIPE_*` environment overrides, deserialized
//! into [`Settings`]. See [`loader`] for the precedence rules.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ApplicationConfig, DatabaseConfig, ServerConfig, Settings};
