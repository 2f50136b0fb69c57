//! Subcommand implementations

pub mod demo;
pub mod dishes;
pub mod schema;

use clap::Args;
use dishmenu_core::settings::{DEFAULT_CONNECTION_NAME, DEFAULT_SETTINGS_FILE};
use dishmenu_core::{AppSettings, DmError};
use dishmenu_store::Database;
use std::path::PathBuf;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Where to find the database
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Settings file holding the ConnectionStrings section
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// Connection string entry to use
    #[arg(long, global = true, default_value = DEFAULT_CONNECTION_NAME)]
    pub connection_name: String,

    /// Connection string to use instead of the settings file
    #[arg(long, global = true)]
    pub connection: Option<String>,
}

impl ConnectionArgs {
    /// Resolve the connection string and build a database handle
    ///
    /// An explicit `--connection` skips the settings file entirely.
    pub fn open_database(&self) -> Result<Database, DmError> {
        if let Some(connection_string) = &self.connection {
            return Database::from_connection_string(connection_string);
        }

        let settings = AppSettings::load(&self.config)?;
        let connection_string = settings.connection_string(&self.connection_name)?;
        tracing::debug!(
            config = %self.config.display(),
            connection_name = %self.connection_name,
            connection_string = %connection_string,
            "connection string resolved"
        );
        Database::from_connection_string(connection_string.expose())
    }
}
