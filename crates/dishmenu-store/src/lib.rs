//! DishMenu Store - SQLite persistence for the dish menu
//!
//! Provides:
//! - Connection string parsing and connection setup (`db`)
//! - Embedded migrations with checksum verification (`migrations`)
//! - Destructive schema reset and creation (`schema`)
//! - Plain SQL mapping of the `dishes` table (`repo`)
//! - `Database` handles that open one scoped `DishSession` per operation

pub mod database;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod schema;
pub mod session;

// Re-export key types
pub use database::Database;
pub use db::ConnectionTarget;
pub use errors::Result;
pub use session::DishSession;
