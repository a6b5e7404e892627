//! Grade sheet, best-in-subject and average queries.
//!
//! # Invariants
//! - Empty results are `Vec::new()` / `None`, never an error.
//! - `best_student_in_subject` is deterministic: highest grade first, ties
//!   go to the lowest student id.
//! - Grades whose student or subject row was deleted are skipped by the
//!   joined queries but still count toward `average_grade`.

use crate::model::grade::{BestStudent, SubjectGrade};
use crate::model::student::StudentId;
use crate::model::subject::SubjectId;
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{Connection, OptionalExtension};

/// Returns `(subject name, grade)` pairs for one student in insertion order.
pub fn student_grades(conn: &Connection, student_id: StudentId) -> RepoResult<Vec<SubjectGrade>> {
    let mut stmt = conn.prepare(
        "SELECT subjects.name AS subject, grades.grade AS grade
         FROM grades
         JOIN subjects ON grades.subject_id = subjects.id
         WHERE grades.student_id = ?1
           AND grades.grade IS NOT NULL
         ORDER BY grades.id ASC;",
    )?;
    let grades = stmt
        .query_map([student_id], |row| {
            Ok(SubjectGrade {
                subject: row.get("subject")?,
                grade: row.get("grade")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "event=report_student_grades module=report status=ok student_id={student_id} rows={}",
        grades.len()
    );
    Ok(grades)
}

/// Returns the student holding the highest grade in `subject_id`.
///
/// Returns `None` when the subject has no grades from existing students.
pub fn best_student_in_subject(
    conn: &Connection,
    subject_id: SubjectId,
) -> RepoResult<Option<BestStudent>> {
    let best = conn
        .query_row(
            "SELECT students.id AS student_id, students.name AS name, grades.grade AS grade
             FROM grades
             JOIN students ON grades.student_id = students.id
             WHERE grades.subject_id = ?1
               AND grades.grade IS NOT NULL
             ORDER BY grades.grade DESC, students.id ASC
             LIMIT 1;",
            [subject_id],
            |row| {
                Ok(BestStudent {
                    student_id: row.get("student_id")?,
                    name: row.get("name")?,
                    grade: row.get("grade")?,
                })
            },
        )
        .optional()?;
    Ok(best)
}

/// Returns the arithmetic mean of a student's grades.
///
/// Returns `None` when the student has no grades; `Some(0.0)` is a real
/// average of zero-valued grades.
pub fn average_grade(conn: &Connection, student_id: StudentId) -> RepoResult<Option<f64>> {
    let average = conn.query_row(
        "SELECT AVG(grade) FROM grades WHERE student_id = ?1;",
        [student_id],
        |row| row.get::<_, Option<f64>>(0),
    )?;
    Ok(average)
}

/// Formats an average for display, rounded to 2 decimal places.
pub fn format_average(average: f64) -> String {
    format!("{average:.2}")
}

#[cfg(test)]
mod tests {
    use super::format_average;

    #[test]
    fn format_average_rounds_to_two_places() {
        assert_eq!(format_average(80.0), "80.00");
        assert_eq!(format_average(2.0 / 3.0), "0.67");
        assert_eq!(format_average(91.255_1), "91.26");
    }
}
