//! Teacher record.
//!
//! Teachers are append-only. `subject` is free text and is not linked to the
//! `subjects` table.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type TeacherId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub subject: String,
}

impl NewTeacher {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
        }
    }
}

impl Display for Teacher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Subject: {}",
            self.id, self.name, self.subject
        )
    }
}
