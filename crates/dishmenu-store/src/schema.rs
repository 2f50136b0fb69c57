//! Schema lifecycle
//!
//! Dropping and recreating the dish schema. Both operations work on any
//! connection, file-backed or in-memory.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::migrations::{apply_migrations, SCHEMA_VERSION_TABLE};
use rusqlite::Connection;

/// Table holding the dish rows
pub const DISHES_TABLE: &str = "dishes";

/// Every table the migrations create, dropped together on reset
const MANAGED_TABLES: [&str; 2] = [DISHES_TABLE, SCHEMA_VERSION_TABLE];

/// Check whether a table exists
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [table],
        |row| row.get(0),
    )
    .map_err(from_rusqlite)
}

/// Drop every managed table
///
/// Returns `true` when at least one table existed. Dropping `dishes` also
/// clears its AUTOINCREMENT counter, so ids restart at 1.
pub fn drop_schema(conn: &mut Connection) -> Result<bool> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let mut dropped = false;
    for table in MANAGED_TABLES {
        if table_exists(&tx, table)? {
            tx.execute_batch(&format!("DROP TABLE {}", table))
                .map_err(from_rusqlite)?;
            dropped = true;
        }
    }

    tx.commit().map_err(from_rusqlite)?;
    Ok(dropped)
}

/// Create the schema if it is missing
///
/// Returns `true` when the dish table did not exist before.
pub fn create_schema(conn: &mut Connection) -> Result<bool> {
    let existed = table_exists(conn, DISHES_TABLE)?;
    apply_migrations(conn)?;
    Ok(!existed)
}
