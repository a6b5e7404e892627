//! Grade record and grade read models.
//!
//! # Invariants
//! - `value` is an arbitrary float; no range is enforced.
//! - `student_id`/`subject_id` may point at rows that no longer exist.

use crate::model::student::StudentId;
use crate::model::subject::SubjectId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type GradeId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    #[serde(rename = "grade")]
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewGrade {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub value: f64,
}

impl NewGrade {
    pub fn new(student_id: StudentId, subject_id: SubjectId, value: f64) -> Self {
        Self {
            student_id,
            subject_id,
            value,
        }
    }

    pub fn with_id(self, id: GradeId) -> Grade {
        Grade {
            id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            value: self.value,
        }
    }
}

/// One `(subject name, grade)` pair of a student's grade sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectGrade {
    pub subject: String,
    pub grade: f64,
}

impl Display for SubjectGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.subject, format_grade(self.grade))
    }
}

/// Formats a grade value, keeping one decimal for whole numbers (`90.0`).
pub fn format_grade(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Holder of the highest grade recorded for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestStudent {
    pub student_id: StudentId,
    pub name: String,
    pub grade: f64,
}

#[cfg(test)]
mod tests {
    use super::format_grade;

    #[test]
    fn format_grade_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_grade(90.0), "90.0");
        assert_eq!(format_grade(-5.0), "-5.0");
        assert_eq!(format_grade(91.5), "91.5");
        assert_eq!(format_grade(88.25), "88.25");
    }
}
