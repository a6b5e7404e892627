//! Teacher repository contract and SQLite implementation.
//!
//! Teachers are append-only: only insert and list are exposed.

use crate::model::teacher::{NewTeacher, Teacher};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, Row};

pub trait TeacherRepository {
    fn create_teacher(&self, teacher: &NewTeacher) -> RepoResult<Teacher>;
    fn list_teachers(&self) -> RepoResult<Vec<Teacher>>;
}

pub struct SqliteTeacherRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeacherRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TeacherRepository for SqliteTeacherRepository<'_> {
    fn create_teacher(&self, teacher: &NewTeacher) -> RepoResult<Teacher> {
        self.conn.execute(
            "INSERT INTO teachers (name, subject) VALUES (?1, ?2);",
            params![teacher.name, teacher.subject],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("event=teacher_create module=repo status=ok teacher_id={id}");
        Ok(Teacher {
            id,
            name: teacher.name.clone(),
            subject: teacher.subject.clone(),
        })
    }

    fn list_teachers(&self) -> RepoResult<Vec<Teacher>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, subject FROM teachers ORDER BY id ASC;")?;
        let teachers = stmt
            .query_map([], parse_teacher_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(teachers)
    }
}

fn parse_teacher_row(row: &Row<'_>) -> rusqlite::Result<Teacher> {
    Ok(Teacher {
        id: row.get("id")?,
        name: row.get("name")?,
        subject: row.get("subject")?,
    })
}
