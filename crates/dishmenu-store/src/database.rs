//! Database handle
//!
//! Holds the configured connection target and hands out one `DishSession`
//! per operation. Nothing is pooled: every session opens its own
//! connection and closes it when dropped.

#![allow(clippy::result_large_err)]

use crate::db::{self, ConnectionTarget};
use crate::errors::Result;
use crate::session::DishSession;
use dishmenu_core::{log_op_end, log_op_start};
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

const OP_CAN_CONNECT: &str = "can_connect";

/// Entry point to the dish database
pub struct Database {
    target: ConnectionTarget,
    location: PathBuf,
    // Keeps a shared in-memory database alive between sessions
    _anchor: Option<Connection>,
}

impl Database {
    /// Create a handle for a connection target
    ///
    /// File targets are not touched until the first operation. A memory
    /// target gets a uniquely named shared in-memory database that lives as
    /// long as this handle.
    pub fn new(target: ConnectionTarget) -> Result<Self> {
        let (location, anchor) = match &target {
            ConnectionTarget::File(path) => (path.clone(), None),
            ConnectionTarget::Memory => {
                let uri = format!("file:dishmenu-{}?mode=memory&cache=shared", Uuid::new_v4());
                let anchor = db::open(&uri)?;
                (PathBuf::from(uri), Some(anchor))
            }
        };

        Ok(Self {
            target,
            location,
            _anchor: anchor,
        })
    }

    /// Create a handle from a connection string such as `Data Source=dishmenu.db`
    pub fn from_connection_string(connection_string: &str) -> Result<Self> {
        let target = ConnectionTarget::parse(connection_string)?;
        Self::new(target)
    }

    /// Create a handle on a fresh private in-memory database
    pub fn in_memory() -> Result<Self> {
        Self::new(ConnectionTarget::Memory)
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    /// Open a session; the connection closes when the session is dropped
    pub fn open_session(&self) -> Result<DishSession> {
        let conn = db::open(&self.location)?;
        Ok(DishSession::new(conn, self.target.to_string()))
    }

    /// Run `f` inside a fresh session and release it afterwards
    pub fn with_session<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DishSession) -> Result<T>,
    {
        let mut session = self.open_session()?;
        f(&mut session)
    }

    /// Probe whether the database can be reached
    ///
    /// Never creates a database file. Failures are logged and reported as
    /// `false`.
    pub fn can_connect(&self) -> bool {
        log_op_start!(OP_CAN_CONNECT);
        let started = Instant::now();

        let outcome = self.probe();
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &outcome {
            Ok(()) => {
                log_op_end!(OP_CAN_CONNECT, duration_ms = duration_ms, reachable = true);
            }
            Err(reason) => {
                tracing::warn!(target_db = %self.target, %reason, "database is not reachable");
                log_op_end!(OP_CAN_CONNECT, duration_ms = duration_ms, reachable = false);
            }
        }
        outcome.is_ok()
    }

    fn probe(&self) -> std::result::Result<(), String> {
        let conn = match &self.target {
            ConnectionTarget::File(path) => {
                if !path.is_file() {
                    return Err(format!("{} does not exist", path.display()));
                }
                db::open_existing(path).map_err(|e| e.to_string())?
            }
            ConnectionTarget::Memory => db::open(&self.location).map_err(|e| e.to_string())?,
        };

        // Fails with "file is not a database" for foreign files
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|_| ())
        .map_err(|e| e.to_string())
    }

    /// Drop the schema and all data; returns whether anything existed
    pub fn ensure_deleted(&self) -> Result<bool> {
        if let ConnectionTarget::File(path) = &self.target {
            if !path.exists() {
                return Ok(false);
            }
        }
        self.with_session(|session| session.ensure_deleted())
    }

    /// Create the schema if it is missing; returns whether it was created
    pub fn ensure_created(&self) -> Result<bool> {
        self.with_session(|session| session.ensure_created())
    }

    /// Destructive reset: drop everything, then create a fresh schema
    pub fn initialize_schema(&self) -> Result<()> {
        let deleted = self.ensure_deleted()?;
        let created = self.ensure_created()?;
        tracing::info!(target_db = %self.target, deleted, created, "schema initialized");
        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
