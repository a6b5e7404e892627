//! Student CSV export.
//!
//! Format: UTF-8, `\n` line endings, header `ID,Name,Group,Age`, one student
//! per line in id order. Fields holding `,`, `"`, CR or LF are quoted with
//! inner quotes doubled.

use crate::model::student::Student;
use crate::repo::student_repo::{SqliteStudentRepository, StudentRepository};
use crate::repo::RepoError;
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "students.csv";
const STUDENT_CSV_HEADER: [&str; 4] = ["ID", "Name", "Group", "Age"];

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    Repo(RepoError),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write export file: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for ExportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Writes every student to `path` as CSV and returns the row count.
///
/// # Side effects
/// - Creates or truncates the file at `path`.
/// - Emits an `export_students` logging event.
pub fn export_students_csv(conn: &Connection, path: impl AsRef<Path>) -> ExportResult<usize> {
    let path = path.as_ref();
    let students = SqliteStudentRepository::new(conn).list_students()?;

    if let Err(err) = write_students_csv(path, &students) {
        error!(
            "event=export_students module=export status=error path={} error={}",
            path.display(),
            err
        );
        return Err(err.into());
    }

    info!(
        "event=export_students module=export status=ok path={} rows={}",
        path.display(),
        students.len()
    );
    Ok(students.len())
}

fn write_students_csv(path: &Path, students: &[Student]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", STUDENT_CSV_HEADER.join(","))?;
    for student in students {
        writeln!(
            writer,
            "{},{},{},{}",
            student.id,
            escape_csv(&student.name),
            escape_csv(&student.group_name),
            student.age
        )?;
    }
    writer.flush()
}

fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::escape_csv;

    #[test]
    fn escape_csv_leaves_plain_values() {
        assert_eq!(escape_csv("Ann"), "Ann");
        assert_eq!(escape_csv("10-B"), "10-B");
    }

    #[test]
    fn escape_csv_quotes_delimiters_and_doubles_quotes() {
        assert_eq!(escape_csv("Smith, Ann"), "\"Smith, Ann\"");
        assert_eq!(escape_csv("Ann \"Jo\""), "\"Ann \"\"Jo\"\"\"");
        assert_eq!(escape_csv("line1\nline2"), "\"line1\nline2\"");
    }
}
