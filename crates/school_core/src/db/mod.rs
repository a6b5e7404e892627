//! SQLite storage bootstrap and schema creation entry points.
//!
//! # Responsibility
//! - Open and configure the single SQLite connection used by the process.
//! - Create the school schema in deterministic, idempotent order.
//!
//! # Invariants
//! - Schema creation is idempotent and safe on every startup.
//! - Record operations must not run before the schema exists.
//! - Foreign keys between grades and students/subjects are logical only.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory, DEFAULT_DB_FILE_NAME};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to open the store or create its schema.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
