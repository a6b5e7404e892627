use school_core::db::open_db_in_memory;
use school_core::{
    NewTeacher, RepoError, SchoolService, SqliteSubjectRepository, SubjectAddOutcome,
    SubjectRepository,
};

#[test]
fn add_teacher_then_list() {
    let conn = open_db_in_memory().unwrap();
    let service = SchoolService::new(&conn);

    let teacher = service
        .add_teacher(&NewTeacher::new("Mr. Smith", "Physics"))
        .unwrap();
    let teachers = service.list_teachers().unwrap();
    assert_eq!(teachers, vec![teacher.clone()]);
    assert_eq!(
        teacher.to_string(),
        format!("ID: {}, Name: Mr. Smith, Subject: Physics", teacher.id)
    );
}

#[test]
fn teacher_subject_is_free_text() {
    let conn = open_db_in_memory().unwrap();
    let service = SchoolService::new(&conn);

    service
        .add_teacher(&NewTeacher::new("Ms. Lee", "Not A Stored Subject"))
        .unwrap();
    assert!(service.list_subjects().unwrap().is_empty());
    assert_eq!(service.list_teachers().unwrap().len(), 1);
}

#[test]
fn add_subject_then_list() {
    let conn = open_db_in_memory().unwrap();
    let service = SchoolService::new(&conn);

    let outcome = service.add_subject("Math").unwrap();
    let SubjectAddOutcome::Added(subject) = outcome else {
        panic!("expected subject to be added");
    };
    assert_eq!(subject.name, "Math");
    assert_eq!(service.list_subjects().unwrap(), vec![subject]);
}

#[test]
fn duplicate_subject_reports_already_exists_and_leaves_table_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = SchoolService::new(&conn);
    service.add_subject("Math").unwrap();
    let before = service.list_subjects().unwrap();

    let outcome = service.add_subject("Math").unwrap();
    assert_eq!(outcome, SubjectAddOutcome::AlreadyExists("Math".to_string()));
    assert_eq!(service.list_subjects().unwrap(), before);

    // The connection stays usable after the constraint failure.
    assert!(matches!(
        service.add_subject("History").unwrap(),
        SubjectAddOutcome::Added(_)
    ));
}

#[test]
fn repository_maps_unique_violation_to_already_exists() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSubjectRepository::new(&conn);
    repo.create_subject("Art").unwrap();

    let err = repo.create_subject("Art").unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists(ref name) if name == "Art"));
}
