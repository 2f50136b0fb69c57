//! SQLite repository implementation
//!
//! Plain SQL against the `dishes` table. Callers own the connection; the
//! session layer adds scoping and logging on top.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use dishmenu_core::model::{Dish, DishId, NewDish, Price};
use rusqlite::{Connection, OptionalExtension, Row};

const SELECT_DISH: &str = "SELECT dish_id, name, description, price_minor FROM dishes";

/// SQLite repository for dishes
pub struct SqliteDishRepo;

impl SqliteDishRepo {
    /// Insert one dish and return the id SQLite assigned to it
    pub fn insert(conn: &Connection, dish: &NewDish) -> Result<DishId> {
        conn.execute(
            "INSERT INTO dishes (name, description, price_minor) VALUES (?1, ?2, ?3)",
            rusqlite::params![dish.name, dish.description, dish.price.minor()],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert dishes in order inside one transaction
    ///
    /// Either every dish is stored or none is. Returns ids in input order.
    pub fn insert_many(conn: &mut Connection, dishes: &[NewDish]) -> Result<Vec<DishId>> {
        if dishes.is_empty() {
            return Ok(Vec::new());
        }

        let tx = conn.transaction().map_err(from_rusqlite)?;
        let mut ids = Vec::with_capacity(dishes.len());
        for dish in dishes {
            ids.push(Self::insert(&tx, dish)?);
        }
        tx.commit().map_err(from_rusqlite)?;

        Ok(ids)
    }

    /// Get a dish by id
    pub fn get(conn: &Connection, dish_id: DishId) -> Result<Option<Dish>> {
        conn.query_row(
            &format!("{} WHERE dish_id = ?1", SELECT_DISH),
            [dish_id],
            dish_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Dishes whose name contains `fragment` as a literal, case-sensitive substring
    ///
    /// `instr` is used instead of LIKE so `%` and `_` are matched literally
    /// and non-ASCII names compare byte for byte.
    pub fn find_by_name_containing(conn: &Connection, fragment: &str) -> Result<Vec<Dish>> {
        let mut stmt = conn
            .prepare(&format!(
                "{} WHERE name IS NOT NULL AND instr(name, ?1) > 0",
                SELECT_DISH
            ))
            .map_err(from_rusqlite)?;

        let dishes = stmt
            .query_map([fragment], dish_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(dishes)
    }

    /// The dish with the highest id
    pub fn latest(conn: &Connection) -> Result<Option<Dish>> {
        conn.query_row(
            &format!("{} ORDER BY dish_id DESC LIMIT 1", SELECT_DISH),
            [],
            dish_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All dishes ordered by id
    pub fn list(conn: &Connection) -> Result<Vec<Dish>> {
        let mut stmt = conn
            .prepare(&format!("{} ORDER BY dish_id", SELECT_DISH))
            .map_err(from_rusqlite)?;

        let dishes = stmt
            .query_map([], dish_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(dishes)
    }

    /// Number of stored dishes
    pub fn count(conn: &Connection) -> Result<u64> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM dishes", [], |row| row.get(0))
            .map_err(from_rusqlite)?;

        // COUNT(*) is never negative
        Ok(count.unsigned_abs())
    }
}

fn dish_from_row(row: &Row<'_>) -> rusqlite::Result<Dish> {
    Ok(Dish {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: Price::from_minor(row.get(3)?),
    })
}
