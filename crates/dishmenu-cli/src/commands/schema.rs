//! Schema commands
//!
//! Usage: dishmenu init | dishmenu check

use super::{CommandResult, ConnectionArgs};

/// Drop and recreate the schema
pub fn execute_init(connection: &ConnectionArgs) -> CommandResult {
    let db = connection.open_database()?;
    db.initialize_schema()?;
    println!("Schema initialized ({}).", db.target());
    Ok(())
}

/// Probe the database; unreachable is an error so the exit code is 1
pub fn execute_check(connection: &ConnectionArgs) -> CommandResult {
    let db = connection.open_database()?;
    if db.can_connect() {
        println!("Database is reachable.");
        Ok(())
    } else {
        Err(format!("cannot connect to the database ({})", db.target()).into())
    }
}
