//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define one data access contract per school record type.
//! - Isolate SQL details from service and shell orchestration.
//!
//! # Invariants
//! - Every write is a single statement in autocommit mode.
//! - Repository APIs return semantic errors (`AlreadyExists`) in addition to
//!   DB transport errors.

mod error;
pub mod grade_repo;
pub mod student_repo;
pub mod subject_repo;
pub mod teacher_repo;

pub use error::{RepoError, RepoResult};
