//! Subject repository contract and SQLite implementation.
//!
//! # Invariants
//! - A duplicate subject name leaves the table unchanged and yields
//!   `RepoError::AlreadyExists`, never a transport error.

use crate::model::subject::Subject;
use crate::repo::error::is_unique_violation;
use crate::repo::{RepoError, RepoResult};
use log::{debug, warn};
use rusqlite::{Connection, Row};

pub trait SubjectRepository {
    fn create_subject(&self, name: &str) -> RepoResult<Subject>;
    fn list_subjects(&self) -> RepoResult<Vec<Subject>>;
}

pub struct SqliteSubjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSubjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SubjectRepository for SqliteSubjectRepository<'_> {
    fn create_subject(&self, name: &str) -> RepoResult<Subject> {
        match self
            .conn
            .execute("INSERT INTO subjects (name) VALUES (?1);", [name])
        {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                warn!("event=subject_create module=repo status=conflict error_code=subject_exists");
                return Err(RepoError::AlreadyExists(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        }

        let id = self.conn.last_insert_rowid();
        debug!("event=subject_create module=repo status=ok subject_id={id}");
        Ok(Subject {
            id,
            name: name.to_string(),
        })
    }

    fn list_subjects(&self) -> RepoResult<Vec<Subject>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM subjects ORDER BY id ASC;")?;
        let subjects = stmt
            .query_map([], parse_subject_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(subjects)
    }
}

fn parse_subject_row(row: &Row<'_>) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
