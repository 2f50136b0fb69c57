//! DishMenu Core - domain model and shared facilities
//!
//! This crate provides:
//! - The `Dish` entity, its insert form `NewDish`, and the fixed-point `Price`
//! - The error facility (`DmError`, `DmErrorKind`, `MenuError`)
//! - The structured logging facility and its test capture mode
//! - The settings file model (`AppSettings`) holding named connection strings

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod settings;

pub use dishmenu_core_types::schema;

// Re-export commonly used types
pub use errors::{DmError, DmErrorKind, MenuError, Result};
pub use model::{Dish, DishId, NewDish, Price};
pub use settings::AppSettings;
