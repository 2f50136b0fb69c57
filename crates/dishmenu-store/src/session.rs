//! Dish repository session
//!
//! A `DishSession` owns exactly one SQLite connection for the duration of
//! one logical operation. Dropping the session closes the connection, on
//! every exit path.

#![allow(clippy::result_large_err)]

use crate::errors::{Result, SQLITE_OP};
use crate::repo::SqliteDishRepo;
use crate::schema;
use dishmenu_core::model::{Dish, DishId, NewDish};
use dishmenu_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::time::Instant;

pub const OP_ENSURE_DELETED: &str = "ensure_deleted";
pub const OP_ENSURE_CREATED: &str = "ensure_created";
pub const OP_INSERT_DISH: &str = "insert_dish";
pub const OP_INSERT_DISHES: &str = "insert_dishes";
pub const OP_FIND_BY_NAME: &str = "find_dishes_by_name";
pub const OP_FIND_DISH: &str = "find_dish";
pub const OP_LATEST_DISH: &str = "latest_dish";
pub const OP_LIST_DISHES: &str = "list_dishes";
pub const OP_COUNT_DISHES: &str = "count_dishes";

/// One scoped connection to the dish database
pub struct DishSession {
    conn: Connection,
    target: String,
    opened_at: Instant,
}

impl DishSession {
    pub(crate) fn new(conn: Connection, target: String) -> Self {
        tracing::debug!(target_db = %target, "session opened");
        Self {
            conn,
            target,
            opened_at: Instant::now(),
        }
    }

    /// Drop the dish schema; returns whether anything existed
    pub fn ensure_deleted(&mut self) -> Result<bool> {
        self.run(OP_ENSURE_DELETED, schema::drop_schema)
    }

    /// Create the dish schema if missing; returns whether it was created
    pub fn ensure_created(&mut self) -> Result<bool> {
        self.run(OP_ENSURE_CREATED, schema::create_schema)
    }

    /// Persist one dish and return its storage-assigned id
    pub fn insert(&mut self, dish: &NewDish) -> Result<DishId> {
        let id = self.run(OP_INSERT_DISH, |conn| SqliteDishRepo::insert(conn, dish))?;
        tracing::debug!(dish_id = id, "dish inserted");
        Ok(id)
    }

    /// Persist dishes in one transaction; ids come back in input order
    pub fn insert_many(&mut self, dishes: &[NewDish]) -> Result<Vec<DishId>> {
        self.run_counted(
            OP_INSERT_DISHES,
            |conn| SqliteDishRepo::insert_many(conn, dishes),
            Vec::len,
        )
    }

    /// Dishes whose name contains `fragment` (literal, case-sensitive)
    pub fn find_by_name_containing(&mut self, fragment: &str) -> Result<Vec<Dish>> {
        self.run_counted(
            OP_FIND_BY_NAME,
            |conn| SqliteDishRepo::find_by_name_containing(conn, fragment),
            Vec::len,
        )
    }

    /// Look a dish up by id; `None` when no such dish exists
    pub fn find(&mut self, dish_id: DishId) -> Result<Option<Dish>> {
        self.bracket(
            OP_FIND_DISH,
            Some(dish_id),
            |conn| SqliteDishRepo::get(conn, dish_id),
            |found| Some(usize::from(found.is_some())),
        )
    }

    /// The dish with the highest id; `None` when the table is empty
    pub fn latest(&mut self) -> Result<Option<Dish>> {
        self.run(OP_LATEST_DISH, |conn| SqliteDishRepo::latest(conn))
    }

    /// All dishes ordered by id
    pub fn list(&mut self) -> Result<Vec<Dish>> {
        self.run_counted(OP_LIST_DISHES, |conn| SqliteDishRepo::list(conn), Vec::len)
    }

    pub fn count(&mut self) -> Result<u64> {
        self.run(OP_COUNT_DISHES, |conn| SqliteDishRepo::count(conn))
    }

    /// Run one operation bracketed by start and end/end_error events
    fn run<T, F>(&mut self, op: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        self.bracket(op, None, f, |_| None)
    }

    /// Like `run`, with the number of affected rows on the end event
    fn run_counted<T, F, R>(&mut self, op: &'static str, f: F, rows: R) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
        R: FnOnce(&T) -> usize,
    {
        self.bracket(op, None, f, |value| Some(rows(value)))
    }

    fn bracket<T, F, R>(
        &mut self,
        op: &'static str,
        dish_id: Option<DishId>,
        f: F,
        rows: R,
    ) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
        R: FnOnce(&T) -> Option<usize>,
    {
        match dish_id {
            Some(dish_id) => {
                log_op_start!(op, dish_id = dish_id);
            }
            None => {
                log_op_start!(op);
            }
        }
        let started = Instant::now();

        // Name the session operation instead of the generic driver op
        let result = f(&mut self.conn).map_err(|err| {
            if matches!(err.op(), Some(SQLITE_OP) | None) {
                err.with_op(op)
            } else {
                err
            }
        });

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(value) => match rows(value) {
                Some(row_count) => {
                    log_op_end!(op, duration_ms = duration_ms, row_count = row_count);
                }
                None => {
                    log_op_end!(op, duration_ms = duration_ms);
                }
            },
            Err(err) => {
                log_op_error!(op, err.clone(), duration_ms = duration_ms);
            }
        }
        result
    }
}

impl Drop for DishSession {
    fn drop(&mut self) {
        tracing::debug!(
            target_db = %self.target,
            open_ms = u64::try_from(self.opened_at.elapsed().as_millis()).unwrap_or(u64::MAX),
            "session closed"
        );
    }
}
