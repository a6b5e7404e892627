//! Numbered menu of shell operations.

use std::fmt::Write as _;

pub const MENU_TITLE: &str = "===== School Management System =====";

/// Closed set of operations offered by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    UpdateStudent,
    DeleteStudent,
    ShowStudents,
    SearchStudent,
    AddTeacher,
    ShowTeachers,
    AddSubject,
    ShowSubjects,
    AddGrade,
    ShowStudentGrades,
    BestStudentInSubject,
    StudentAverageGrade,
    ExportStudents,
    Exit,
}

impl MenuChoice {
    /// Display order; `Exit` is listed last but numbered 0.
    pub const ALL: [MenuChoice; 15] = [
        Self::AddStudent,
        Self::UpdateStudent,
        Self::DeleteStudent,
        Self::ShowStudents,
        Self::SearchStudent,
        Self::AddTeacher,
        Self::ShowTeachers,
        Self::AddSubject,
        Self::ShowSubjects,
        Self::AddGrade,
        Self::ShowStudentGrades,
        Self::BestStudentInSubject,
        Self::StudentAverageGrade,
        Self::ExportStudents,
        Self::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::AddStudent => 1,
            Self::UpdateStudent => 2,
            Self::DeleteStudent => 3,
            Self::ShowStudents => 4,
            Self::SearchStudent => 5,
            Self::AddTeacher => 6,
            Self::ShowTeachers => 7,
            Self::AddSubject => 8,
            Self::ShowSubjects => 9,
            Self::AddGrade => 10,
            Self::ShowStudentGrades => 11,
            Self::BestStudentInSubject => 12,
            Self::StudentAverageGrade => 13,
            Self::ExportStudents => 14,
            Self::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddStudent => "Add Student",
            Self::UpdateStudent => "Update Student",
            Self::DeleteStudent => "Delete Student",
            Self::ShowStudents => "Show All Students",
            Self::SearchStudent => "Search Student by Name",
            Self::AddTeacher => "Add Teacher",
            Self::ShowTeachers => "Show All Teachers",
            Self::AddSubject => "Add Subject",
            Self::ShowSubjects => "Show Subjects",
            Self::AddGrade => "Add Grade",
            Self::ShowStudentGrades => "Show Student Grades",
            Self::BestStudentInSubject => "Best Student in Subject",
            Self::StudentAverageGrade => "Student Average Grade",
            Self::ExportStudents => "Export Students to CSV",
            Self::Exit => "Exit",
        }
    }

    /// Parses a menu selection line. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

/// Renders the full menu block, one `N. Label` line per operation.
pub fn render_menu() -> String {
    let mut menu = format!("\n{MENU_TITLE}\n");
    for choice in MenuChoice::ALL {
        let _ = writeln!(menu, "{}. {}", choice.number(), choice.label());
    }
    menu
}

#[cfg(test)]
mod tests {
    use super::{render_menu, MenuChoice};

    #[test]
    fn parse_accepts_every_listed_number() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
        assert_eq!(MenuChoice::parse(" 14 \n"), Some(MenuChoice::ExportStudents));
    }

    #[test]
    fn parse_rejects_unknown_selections() {
        for input in ["", "15", "-1", "one", "1.0", "256"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn numbers_are_unique() {
        let mut numbers: Vec<_> = MenuChoice::ALL.iter().map(|c| c.number()).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), MenuChoice::ALL.len());
    }

    #[test]
    fn render_menu_lists_exit_last() {
        let menu = render_menu();
        assert!(menu.contains("1. Add Student\n"));
        assert!(menu.contains("14. Export Students to CSV\n"));
        assert!(menu.trim_end().ends_with("0. Exit"));
    }
}
