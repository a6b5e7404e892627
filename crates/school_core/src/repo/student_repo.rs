//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide add/update/delete/list/search over the `students` table.
//!
//! # Invariants
//! - Update and delete never touch rows other than the given id.
//! - Update and delete on an absent id leave the table unchanged and report
//!   `false` instead of failing.
//! - Deleting a student does not cascade into `grades`.

use crate::model::student::{NewStudent, Student, StudentId};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const STUDENT_SELECT_SQL: &str = "SELECT id, name, group_name, age FROM students";

/// Repository interface for student CRUD and search.
pub trait StudentRepository {
    fn create_student(&self, student: &NewStudent) -> RepoResult<Student>;
    /// Overwrites every mutable field. Returns whether a row was changed.
    fn update_student(&self, id: StudentId, student: &NewStudent) -> RepoResult<bool>;
    /// Returns whether a row was removed.
    fn delete_student(&self, id: StudentId) -> RepoResult<bool>;
    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>>;
    /// Lists all students in table (id) order.
    fn list_students(&self) -> RepoResult<Vec<Student>>;
    /// Case-insensitive substring match on `name`.
    fn search_students(&self, name_fragment: &str) -> RepoResult<Vec<Student>>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn create_student(&self, student: &NewStudent) -> RepoResult<Student> {
        self.conn.execute(
            "INSERT INTO students (name, group_name, age) VALUES (?1, ?2, ?3);",
            params![student.name, student.group_name, student.age],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("event=student_create module=repo status=ok student_id={id}");
        Ok(student.clone().with_id(id))
    }

    fn update_student(&self, id: StudentId, student: &NewStudent) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE students
             SET name = ?1, group_name = ?2, age = ?3
             WHERE id = ?4;",
            params![student.name, student.group_name, student.age, id],
        )?;
        debug!("event=student_update module=repo status=ok student_id={id} changed={changed}");
        Ok(changed > 0)
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;
        debug!("event=student_delete module=repo status=ok student_id={id} changed={changed}");
        Ok(changed > 0)
    }

    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let student = self
            .conn
            .query_row(
                &format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_student_row,
            )
            .optional()?;
        Ok(student)
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let students = stmt
            .query_map([], parse_student_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    fn search_students(&self, name_fragment: &str) -> RepoResult<Vec<Student>> {
        let pattern = format!("%{}%", escape_like(name_fragment));
        let mut stmt = self.conn.prepare(&format!(
            "{STUDENT_SELECT_SQL} WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id ASC;"
        ))?;
        let students = stmt
            .query_map([pattern.as_str()], parse_student_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }
}

fn parse_student_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        name: row.get("name")?,
        group_name: row.get("group_name")?,
        age: row.get("age")?,
    })
}

/// Escapes `LIKE` wildcards so user text matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_escapes_wildcards_only() {
        assert_eq!(escape_like("ann"), "ann");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
