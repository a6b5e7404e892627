//! Flat-file export of school records.
//!
//! # Responsibility
//! - Serialize full table snapshots to delimited text files.
//!
//! # Invariants
//! - Export is a full snapshot, never incremental.
//! - An existing file at the target path is overwritten.

pub mod csv;

pub use self::csv::{export_students_csv, ExportError, ExportResult, DEFAULT_EXPORT_FILE_NAME};
