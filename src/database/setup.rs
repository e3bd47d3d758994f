use log::info;

use super::connection::DbConn;
use crate::errors::Result;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Drops and recreates the tournament schema. No migrations; the schema
/// is small enough to rebuild from scratch.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    for statement in split_sql_statements(SCHEMA_SQL) {
        conn.execute(statement, [])?;
    }

    info!("Tournament schema reset");
    Ok(())
}

// Statements in schema.sql are separated by semicolons and contain none
// internally.
fn split_sql_statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|s| !s.is_empty())
}
