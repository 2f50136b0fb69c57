//! Repository layer mapping the `dishes` table to domain models

pub mod dish_repo;

pub use dish_repo::SqliteDishRepo;
