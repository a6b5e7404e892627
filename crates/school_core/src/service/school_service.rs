//! School use-case service.
//!
//! # Responsibility
//! - Provide one entry point per menu operation over an explicit connection.
//! - Translate storage outcomes into shell-facing outcome enums.
//!
//! # Invariants
//! - The service owns no global state; every instance borrows the caller's
//!   connection.
//! - Update/delete of an absent student leaves the table unchanged and is
//!   reported as `MutationOutcome::NotFound`.

use crate::export::{export_students_csv, ExportResult};
use crate::model::grade::{BestStudent, Grade, NewGrade, SubjectGrade};
use crate::model::student::{NewStudent, Student, StudentId};
use crate::model::subject::{Subject, SubjectId};
use crate::model::teacher::{NewTeacher, Teacher};
use crate::report::grade_report;
use crate::repo::grade_repo::{GradeRepository, SqliteGradeRepository};
use crate::repo::student_repo::{SqliteStudentRepository, StudentRepository};
use crate::repo::subject_repo::{SqliteSubjectRepository, SubjectRepository};
use crate::repo::teacher_repo::{SqliteTeacherRepository, TeacherRepository};
use crate::repo::{RepoError, RepoResult};
use rusqlite::Connection;
use std::path::Path;

/// Result of an update/delete addressed by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Exactly one row was changed.
    Applied,
    /// No row has the identifier; nothing changed.
    NotFound,
}

impl MutationOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::NotFound
        }
    }
}

/// Result of adding a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectAddOutcome {
    Added(Subject),
    /// A subject with this name is already stored; nothing changed.
    AlreadyExists(String),
}

/// Use-case facade over the school store.
pub struct SchoolService<'conn> {
    conn: &'conn Connection,
    students: SqliteStudentRepository<'conn>,
    teachers: SqliteTeacherRepository<'conn>,
    subjects: SqliteSubjectRepository<'conn>,
    grades: SqliteGradeRepository<'conn>,
}

impl<'conn> SchoolService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            students: SqliteStudentRepository::new(conn),
            teachers: SqliteTeacherRepository::new(conn),
            subjects: SqliteSubjectRepository::new(conn),
            grades: SqliteGradeRepository::new(conn),
        }
    }

    pub fn add_student(&self, student: &NewStudent) -> RepoResult<Student> {
        self.students.create_student(student)
    }

    /// Overwrites name, group and age of the student with `id`.
    pub fn update_student(
        &self,
        id: StudentId,
        student: &NewStudent,
    ) -> RepoResult<MutationOutcome> {
        let changed = self.students.update_student(id, student)?;
        Ok(MutationOutcome::from_changed(changed))
    }

    /// Removes one student. Grades of that student are kept.
    pub fn delete_student(&self, id: StudentId) -> RepoResult<MutationOutcome> {
        let changed = self.students.delete_student(id)?;
        Ok(MutationOutcome::from_changed(changed))
    }

    pub fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        self.students.get_student(id)
    }

    pub fn list_students(&self) -> RepoResult<Vec<Student>> {
        self.students.list_students()
    }

    pub fn search_students(&self, name_fragment: &str) -> RepoResult<Vec<Student>> {
        self.students.search_students(name_fragment)
    }

    pub fn add_teacher(&self, teacher: &NewTeacher) -> RepoResult<Teacher> {
        self.teachers.create_teacher(teacher)
    }

    pub fn list_teachers(&self) -> RepoResult<Vec<Teacher>> {
        self.teachers.list_teachers()
    }

    /// Adds a subject, reporting a duplicate name as an outcome, not an error.
    pub fn add_subject(&self, name: &str) -> RepoResult<SubjectAddOutcome> {
        match self.subjects.create_subject(name) {
            Ok(subject) => Ok(SubjectAddOutcome::Added(subject)),
            Err(RepoError::AlreadyExists(name)) => Ok(SubjectAddOutcome::AlreadyExists(name)),
            Err(err) => Err(err),
        }
    }

    pub fn list_subjects(&self) -> RepoResult<Vec<Subject>> {
        self.subjects.list_subjects()
    }

    pub fn add_grade(&self, grade: &NewGrade) -> RepoResult<Grade> {
        self.grades.create_grade(grade)
    }

    pub fn student_grades(&self, student_id: StudentId) -> RepoResult<Vec<SubjectGrade>> {
        grade_report::student_grades(self.conn, student_id)
    }

    pub fn best_student_in_subject(
        &self,
        subject_id: SubjectId,
    ) -> RepoResult<Option<BestStudent>> {
        grade_report::best_student_in_subject(self.conn, subject_id)
    }

    pub fn average_grade(&self, student_id: StudentId) -> RepoResult<Option<f64>> {
        grade_report::average_grade(self.conn, student_id)
    }

    /// Writes a full student snapshot to `path`, returning the row count.
    pub fn export_students(&self, path: impl AsRef<Path>) -> ExportResult<usize> {
        export_students_csv(self.conn, path)
    }
}
