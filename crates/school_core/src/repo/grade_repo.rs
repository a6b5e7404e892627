//! Grade repository contract and SQLite implementation.
//!
//! # Invariants
//! - Inserts do not check that the referenced student or subject exists.
//! - Only finite grade values are stored; SQLite turns NaN into NULL and
//!   infinities break `AVG`.
//! - Rows with a NULL reference or value are rejected on read rather than
//!   silently defaulted.

use crate::model::grade::{Grade, NewGrade};
use crate::model::student::StudentId;
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

pub trait GradeRepository {
    fn create_grade(&self, grade: &NewGrade) -> RepoResult<Grade>;
    /// Lists raw grade rows for one student in insertion order.
    fn list_grades_for_student(&self, student_id: StudentId) -> RepoResult<Vec<Grade>>;
}

pub struct SqliteGradeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGradeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GradeRepository for SqliteGradeRepository<'_> {
    fn create_grade(&self, grade: &NewGrade) -> RepoResult<Grade> {
        if !grade.value.is_finite() {
            return Err(RepoError::InvalidData(format!(
                "grade value must be finite, got {}",
                grade.value
            )));
        }

        self.conn.execute(
            "INSERT INTO grades (student_id, subject_id, grade) VALUES (?1, ?2, ?3);",
            params![grade.student_id, grade.subject_id, grade.value],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(
            "event=grade_create module=repo status=ok grade_id={id} student_id={} subject_id={}",
            grade.student_id, grade.subject_id
        );
        Ok(grade.with_id(id))
    }

    fn list_grades_for_student(&self, student_id: StudentId) -> RepoResult<Vec<Grade>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, student_id, subject_id, grade
             FROM grades
             WHERE student_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([student_id])?;
        let mut grades = Vec::new();
        while let Some(row) = rows.next()? {
            grades.push(parse_grade_row(row)?);
        }
        Ok(grades)
    }
}

fn parse_grade_row(row: &Row<'_>) -> RepoResult<Grade> {
    let id: i64 = row.get("id")?;
    let required = |column: &str| -> RepoResult<i64> {
        row.get::<_, Option<i64>>(column)?.ok_or_else(|| {
            RepoError::InvalidData(format!("grades.{column} is NULL for grade id {id}"))
        })
    };

    Ok(Grade {
        id,
        student_id: required("student_id")?,
        subject_id: required("subject_id")?,
        value: row.get::<_, Option<f64>>("grade")?.ok_or_else(|| {
            RepoError::InvalidData(format!("grades.grade is NULL for grade id {id}"))
        })?,
    })
}
