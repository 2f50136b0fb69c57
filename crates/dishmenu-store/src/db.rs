//! Database connection management
//!
//! Parses connection strings into connection targets and opens configured
//! SQLite connections for them.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use dishmenu_core::errors::MenuError;
use rusqlite::{Connection, OpenFlags};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const MEMORY_SOURCE: &str = ":memory:";
const DATA_SOURCE_KEYS: [&str; 2] = ["data source", "datasource"];

/// Where the dish database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    /// SQLite database file; relative paths resolve against the working directory
    File(PathBuf),
    /// Private in-memory database owned by one `Database` handle
    Memory,
}

impl ConnectionTarget {
    /// Parse a connection string
    ///
    /// Accepted forms: `Data Source=<path>` (key is case-insensitive,
    /// `DataSource` also accepted), a bare path, or `:memory:`.
    pub fn parse(connection_string: &str) -> std::result::Result<Self, MenuError> {
        let invalid = |reason: String| MenuError::InvalidConnectionString { reason };

        let trimmed = connection_string.trim();
        if trimmed.is_empty() {
            return Err(invalid("connection string is empty".to_string()));
        }

        // A bare path has no key=value pairs at all
        if !trimmed.contains('=') {
            return Ok(Self::from_source(trimmed.trim_end_matches(';').trim()));
        }

        let mut source: Option<&str> = None;
        for pair in trimmed.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| invalid(format!("expected key=value, got '{}'", pair)))?;
            let key = key.trim().to_ascii_lowercase();

            if !DATA_SOURCE_KEYS.contains(&key.as_str()) {
                return Err(invalid(format!("unsupported key '{}'", key)));
            }
            if source.is_some() {
                return Err(invalid("data source is given more than once".to_string()));
            }
            source = Some(value.trim());
        }

        match source {
            Some(s) if !s.is_empty() => Ok(Self::from_source(s)),
            _ => Err(invalid("data source is empty".to_string())),
        }
    }

    fn from_source(source: &str) -> Self {
        if source.eq_ignore_ascii_case(MEMORY_SOURCE) {
            Self::Memory
        } else {
            Self::File(PathBuf::from(source))
        }
    }
}

impl FromStr for ConnectionTarget {
    type Err = MenuError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Memory => write!(f, "{}", MEMORY_SOURCE),
        }
    }
}

/// Open a connection, creating the database if it does not exist
///
/// `location` is a file path or a `file:` URI.
pub fn open<P: AsRef<Path>>(location: P) -> Result<Connection> {
    let conn = Connection::open_with_flags(location, OpenFlags::default()).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open a connection to an existing database without creating anything
pub fn open_existing<P: AsRef<Path>>(location: P) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(location, flags).map_err(from_rusqlite)
}

/// Configure a connection with the settings every session relies on
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(Duration::from_secs(5))
        .map_err(from_rusqlite)?;

    // WAL for files; in-memory databases report "memory" and keep it
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
        .map_err(from_rusqlite)?;

    Ok(())
}
