//! Interactive read-evaluate-print loop over the school store.
//!
//! # Responsibility
//! - Show the menu, read one selection per iteration and dispatch it.
//! - Prompt for each operation's fields in a fixed order.
//!
//! # Invariants
//! - Malformed numeric input re-prompts instead of aborting.
//! - Storage failures during one operation are reported and the loop goes on.
//! - End of input behaves like `Exit`.

use crate::menu::{render_menu, MenuChoice};
use log::{error, info};
use school_core::{
    format_average, format_grade, ExportError, MutationOutcome, NewGrade, NewStudent, NewTeacher,
    RepoError, SchoolService, SubjectAddOutcome,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const CHOICE_PROMPT: &str = "Choose option: ";

#[derive(Debug)]
pub enum ShellError {
    /// Reading stdin or writing stdout failed.
    Io(io::Error),
    /// Input ended while an operation was waiting for a field.
    InputClosed,
    Repo(RepoError),
    Export(ExportError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::InputClosed => write!(f, "input closed"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed => None,
            Self::Repo(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ShellError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ExportError> for ShellError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Menu-driven shell bound to one connection and one pair of streams.
pub struct Shell<'conn, R, W> {
    service: SchoolService<'conn>,
    input: R,
    output: W,
    export_path: PathBuf,
}

impl<'conn, R: BufRead, W: Write> Shell<'conn, R, W> {
    pub fn new(
        service: SchoolService<'conn>,
        input: R,
        output: W,
        export_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            service,
            input,
            output,
            export_path: export_path.into(),
        }
    }

    /// Runs until `Exit` is selected or input ends.
    ///
    /// # Errors
    /// Only terminal I/O failures end the loop with an error.
    pub fn run(&mut self) -> ShellResult<()> {
        loop {
            write!(self.output, "{}", render_menu())?;
            let Some(line) = self.read_line(CHOICE_PROMPT)? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice!")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            match self.execute(choice) {
                Ok(()) => {}
                Err(ShellError::InputClosed) => break,
                Err(err @ (ShellError::Repo(_) | ShellError::Export(_))) => {
                    error!(
                        "event=shell_op module=shell status=error op={} error={}",
                        choice.number(),
                        err
                    );
                    writeln!(self.output, "Error: {err}")?;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(self.output, "Exiting program...")?;
        self.output.flush()?;
        info!("event=shell_exit module=shell status=ok");
        Ok(())
    }

    fn execute(&mut self, choice: MenuChoice) -> ShellResult<()> {
        match choice {
            MenuChoice::AddStudent => {
                let name = self.prompt_text("Name: ")?;
                let group = self.prompt_text("Group: ")?;
                let age = self.prompt_parsed::<i64>("Age: ", "integer")?;
                let student = self
                    .service
                    .add_student(&NewStudent::new(name, group, age))?;
                writeln!(
                    self.output,
                    "Student {} added successfully! (ID: {})",
                    student.name, student.id
                )?;
            }
            MenuChoice::UpdateStudent => {
                let id = self.prompt_parsed::<i64>("Student ID: ", "integer")?;
                let name = self.prompt_text("New Name: ")?;
                let group = self.prompt_text("New Group: ")?;
                let age = self.prompt_parsed::<i64>("New Age: ", "integer")?;
                match self
                    .service
                    .update_student(id, &NewStudent::new(name, group, age))?
                {
                    MutationOutcome::Applied => writeln!(self.output, "Student ID {id} updated!")?,
                    MutationOutcome::NotFound => writeln!(
                        self.output,
                        "Student ID {id} not found; nothing updated."
                    )?,
                }
            }
            MenuChoice::DeleteStudent => {
                let id = self.prompt_parsed::<i64>("Student ID to delete: ", "integer")?;
                match self.service.delete_student(id)? {
                    MutationOutcome::Applied => writeln!(self.output, "Student ID {id} deleted!")?,
                    MutationOutcome::NotFound => writeln!(
                        self.output,
                        "Student ID {id} not found; nothing deleted."
                    )?,
                }
            }
            MenuChoice::ShowStudents => {
                let students = self.service.list_students()?;
                writeln!(self.output, "\nStudent List:")?;
                for student in students {
                    writeln!(self.output, "{student}")?;
                }
            }
            MenuChoice::SearchStudent => {
                let name = self.prompt_text("Enter student name to search: ")?;
                let students = self.service.search_students(&name)?;
                writeln!(self.output, "\nSearch results for '{name}':")?;
                if students.is_empty() {
                    writeln!(self.output, "No student found!")?;
                }
                for student in students {
                    writeln!(self.output, "{student}")?;
                }
            }
            MenuChoice::AddTeacher => {
                let name = self.prompt_text("Teacher Name: ")?;
                let subject = self.prompt_text("Subject: ")?;
                let teacher = self.service.add_teacher(&NewTeacher::new(name, subject))?;
                writeln!(
                    self.output,
                    "Teacher {} ({}) added! (ID: {})",
                    teacher.name, teacher.subject, teacher.id
                )?;
            }
            MenuChoice::ShowTeachers => {
                let teachers = self.service.list_teachers()?;
                writeln!(self.output, "\nTeachers:")?;
                for teacher in teachers {
                    writeln!(self.output, "{teacher}")?;
                }
            }
            MenuChoice::AddSubject => {
                let name = self.prompt_text("Subject name: ")?;
                match self.service.add_subject(&name)? {
                    SubjectAddOutcome::Added(subject) => writeln!(
                        self.output,
                        "Subject '{}' added! (ID: {})",
                        subject.name, subject.id
                    )?,
                    SubjectAddOutcome::AlreadyExists(name) => {
                        writeln!(self.output, "Subject '{name}' already exists!")?
                    }
                }
            }
            MenuChoice::ShowSubjects => {
                let subjects = self.service.list_subjects()?;
                writeln!(self.output, "\nSubjects:")?;
                for subject in subjects {
                    writeln!(self.output, "{subject}")?;
                }
            }
            MenuChoice::AddGrade => {
                let student_id = self.prompt_parsed::<i64>("Student ID: ", "integer")?;
                let subject_id = self.prompt_parsed::<i64>("Subject ID: ", "integer")?;
                let value = self.prompt_grade("Grade: ")?;
                let grade = self
                    .service
                    .add_grade(&NewGrade::new(student_id, subject_id, value))?;
                writeln!(
                    self.output,
                    "Grade added (Student {}, Subject {}, Grade {})",
                    grade.student_id,
                    grade.subject_id,
                    format_grade(grade.value)
                )?;
            }
            MenuChoice::ShowStudentGrades => {
                let id = self.prompt_parsed::<i64>("Student ID: ", "integer")?;
                let grades = self.service.student_grades(id)?;
                if grades.is_empty() {
                    writeln!(self.output, "No grades for this student.")?;
                } else {
                    writeln!(self.output, "\nGrades for Student ID {id}:")?;
                    for grade in grades {
                        writeln!(self.output, "{grade}")?;
                    }
                }
            }
            MenuChoice::BestStudentInSubject => {
                let id = self.prompt_parsed::<i64>("Subject ID: ", "integer")?;
                match self.service.best_student_in_subject(id)? {
                    Some(best) => writeln!(
                        self.output,
                        "\nBest student in Subject {id}: {} with Grade {}",
                        best.name,
                        format_grade(best.grade)
                    )?,
                    None => writeln!(self.output, "No grades for this subject yet.")?,
                }
            }
            MenuChoice::StudentAverageGrade => {
                let id = self.prompt_parsed::<i64>("Student ID: ", "integer")?;
                match self.service.average_grade(id)? {
                    Some(average) => writeln!(
                        self.output,
                        "Average grade for Student ID {id}: {}",
                        format_average(average)
                    )?,
                    None => writeln!(self.output, "No grades available.")?,
                }
            }
            MenuChoice::ExportStudents => {
                let rows = self.service.export_students(&self.export_path)?;
                writeln!(
                    self.output,
                    "Students exported to {} ({rows} rows)",
                    self.export_path.display()
                )?;
            }
            // Handled by `run` before dispatch.
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn prompt_text(&mut self, prompt: &str) -> ShellResult<String> {
        self.read_line(prompt)?.ok_or(ShellError::InputClosed)
    }

    fn prompt_parsed<T: FromStr>(&mut self, prompt: &str, kind: &str) -> ShellResult<T> {
        loop {
            let text = self.prompt_text(prompt)?;
            match text.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid {kind}, please try again.")?,
            }
        }
    }

    /// Like `prompt_parsed::<f64>`, but `nan`/`inf` are re-prompted too.
    fn prompt_grade(&mut self, prompt: &str) -> ShellResult<f64> {
        loop {
            let value = self.prompt_parsed::<f64>(prompt, "number")?;
            if value.is_finite() {
                return Ok(value);
            }
            writeln!(self.output, "Invalid number, please try again.")?;
        }
    }

    /// Returns the line without its terminator, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::Shell;
    use school_core::db::open_db_in_memory;
    use school_core::SchoolService;
    use std::io::Cursor;
    use std::path::Path;

    fn run_session(conn: &rusqlite::Connection, export_path: &Path, script: &str) -> String {
        let mut output = Vec::new();
        let mut shell = Shell::new(
            SchoolService::new(conn),
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
            export_path,
        );
        shell.run().unwrap();
        drop(shell);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn add_and_show_students() {
        let conn = open_db_in_memory().unwrap();
        let out = run_session(
            &conn,
            Path::new("unused.csv"),
            "1\nAnn\n10A\n16\n4\n0\n",
        );

        assert!(out.contains("Student Ann added successfully! (ID: 1)"));
        assert!(out.contains("ID: 1, Name: Ann, Group: 10A, Age: 16"));
        assert!(out.ends_with("Exiting program...\n"));
    }

    #[test]
    fn invalid_choice_reprompts_without_exiting() {
        let conn = open_db_in_memory().unwrap();
        let out = run_session(&conn, Path::new("unused.csv"), "42\nhello\n7\n0\n");

        assert_eq!(out.matches("Invalid choice!").count(), 2);
        assert!(out.contains("\nTeachers:\n"));
    }

    #[test]
    fn malformed_numbers_reprompt() {
        let conn = open_db_in_memory().unwrap();
        let out = run_session(
            &conn,
            Path::new("unused.csv"),
            "1\nBen\n9B\nfifteen\n15\n0\n",
        );

        assert!(out.contains("Invalid integer, please try again."));
        assert!(out.contains("Student Ben added successfully!"));
        assert_eq!(out.matches("Age: ").count(), 2);
    }

    #[test]
    fn duplicate_subject_is_reported_and_loop_continues() {
        let conn = open_db_in_memory().unwrap();
        let out = run_session(&conn, Path::new("unused.csv"), "8\nMath\n8\nMath\n9\n0\n");

        assert!(out.contains("Subject 'Math' added! (ID: 1)"));
        assert!(out.contains("Subject 'Math' already exists!"));
        assert!(out.contains("ID: 1, Subject: Math"));
    }

    #[test]
    fn grade_reports_render_outcomes() {
        let conn = open_db_in_memory().unwrap();
        let script = concat!(
            "1\nAnn\n10A\n16\n",
            "8\nMath\n",
            "13\n1\n",
            "12\n1\n",
            "11\n1\n",
            "10\n1\n1\n70\n",
            "10\n1\n1\n80\n",
            "10\n1\n1\n90.0\n",
            "13\n1\n",
            "12\n1\n",
            "11\n1\n",
            "0\n",
        );
        let out = run_session(&conn, Path::new("unused.csv"), script);

        assert!(out.contains("No grades available."));
        assert!(out.contains("No grades for this subject yet."));
        assert!(out.contains("No grades for this student."));
        assert!(out.contains("Average grade for Student ID 1: 80.00"));
        assert!(out.contains("Grade added (Student 1, Subject 1, Grade 70.0)"));
        assert!(out.contains("Best student in Subject 1: Ann with Grade 90.0"));
        assert!(out.contains("Grades for Student ID 1:\nMath: 70.0\nMath: 80.0\nMath: 90.0\n"));
    }

    #[test]
    fn non_finite_grades_reprompt() {
        let conn = open_db_in_memory().unwrap();
        let script = concat!(
            "1\nAnn\n10A\n16\n",
            "8\nMath\n",
            "10\n1\n1\nnan\ninf\n-inf\n85.5\n",
            "13\n1\n",
            "0\n",
        );
        let out = run_session(&conn, Path::new("unused.csv"), script);

        assert_eq!(out.matches("Invalid number, please try again.").count(), 3);
        assert_eq!(out.matches("Grade: ").count(), 4);
        assert!(out.contains("Grade added (Student 1, Subject 1, Grade 85.5)"));
        assert!(out.contains("Average grade for Student ID 1: 85.50"));
    }

    #[test]
    fn update_and_delete_report_missing_ids() {
        let conn = open_db_in_memory().unwrap();
        let out = run_session(
            &conn,
            Path::new("unused.csv"),
            "2\n5\nX\nY\n1\n3\n5\n0\n",
        );

        assert!(out.contains("Student ID 5 not found; nothing updated."));
        assert!(out.contains("Student ID 5 not found; nothing deleted."));
    }

    #[test]
    fn search_reports_no_match() {
        let conn = open_db_in_memory().unwrap();
        let out = run_session(&conn, Path::new("unused.csv"), "5\nzed\n0\n");

        assert!(out.contains("Search results for 'zed':\nNo student found!"));
    }

    #[test]
    fn export_writes_configured_path() {
        let conn = open_db_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        let out = run_session(&conn, &path, "1\nAnn\n10A\n16\n14\n0\n");

        assert!(out.contains("(1 rows)"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ID,Name,Group,Age\n1,Ann,10A,16\n");
    }

    #[test]
    fn export_failure_is_reported_and_loop_continues() {
        let conn = open_db_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("students.csv");
        let out = run_session(&conn, &path, "14\n4\n0\n");

        assert!(out.contains("Error: failed to write export file"));
        assert!(out.contains("Student List:"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let conn = open_db_in_memory().unwrap();
        let out = run_session(&conn, Path::new("unused.csv"), "1\nAnn\n");

        assert!(out.ends_with("Exiting program...\n"));
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
