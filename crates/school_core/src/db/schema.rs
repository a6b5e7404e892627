//! School schema bootstrap.
//!
//! Every statement in `schema.sql` is `IF NOT EXISTS`, so running it on each
//! startup creates missing tables and leaves existing ones (and their rows)
//! untouched. No version is recorded and no existing table is altered.

use crate::db::DbResult;
use log::debug;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables the school store must contain after [`ensure_schema`].
pub const SCHOOL_TABLES: [&str; 4] = ["students", "teachers", "subjects", "grades"];

/// Creates any missing school table or index.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    debug!("event=db_schema module=db status=ok tables={}", SCHOOL_TABLES.len());
    Ok(())
}
