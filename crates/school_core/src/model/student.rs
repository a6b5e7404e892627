//! Student record.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned student identifier.
pub type StudentId = i64;

/// One row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Stored as `group_name`; serialized as `group` to match the export header.
    #[serde(rename = "group")]
    pub group_name: String,
    pub age: i64,
}

/// Insert/update payload for a student; the id is owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub group_name: String,
    pub age: i64,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, group_name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            group_name: group_name.into(),
            age,
        }
    }

    /// Attaches a store-assigned id, producing the persisted record shape.
    pub fn with_id(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            group_name: self.group_name,
            age: self.age,
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Group: {}, Age: {}",
            self.id, self.name, self.group_name, self.age
        )
    }
}
