//! Core records, storage and queries for the school database.
//! The shell crate only talks to the store through this crate.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod report;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult, DEFAULT_DB_FILE_NAME};
pub use export::{export_students_csv, ExportError, ExportResult, DEFAULT_EXPORT_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, DEFAULT_LOG_DIR_NAME};
pub use model::grade::{format_grade, BestStudent, Grade, GradeId, NewGrade, SubjectGrade};
pub use model::student::{NewStudent, Student, StudentId};
pub use model::subject::{Subject, SubjectId};
pub use model::teacher::{NewTeacher, Teacher, TeacherId};
pub use report::grade_report::{
    average_grade, best_student_in_subject, format_average, student_grades,
};
pub use repo::grade_repo::{GradeRepository, SqliteGradeRepository};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use repo::subject_repo::{SqliteSubjectRepository, SubjectRepository};
pub use repo::teacher_repo::{SqliteTeacherRepository, TeacherRepository};
pub use repo::{RepoError, RepoResult};
pub use service::school_service::{MutationOutcome, SchoolService, SubjectAddOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
