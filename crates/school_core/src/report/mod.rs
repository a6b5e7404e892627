//! Read-only aggregate queries over grades.
//!
//! # Responsibility
//! - Join grades with students/subjects to build derived views.
//! - Keep "no data" outcomes distinct from zero-valued results.

pub mod grade_report;
