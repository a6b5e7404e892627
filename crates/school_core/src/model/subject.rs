//! Subject record.
//!
//! # Invariants
//! - `name` is unique across all subjects; a duplicate insert is rejected by
//!   the store and surfaced as `RepoError::AlreadyExists`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type SubjectId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {}, Subject: {}", self.id, self.name)
    }
}
