//! School record model.
//!
//! # Responsibility
//! - Define the four record shapes stored by the school database.
//! - Provide the fixed human-readable line format for each record.
//!
//! # Invariants
//! - Every record is identified by a store-assigned integer that is never
//!   reused or changed.
//! - Grade references are logical foreign keys and may dangle.

pub mod grade;
pub mod student;
pub mod subject;
pub mod teacher;
