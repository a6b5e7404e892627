use rusqlite::Connection;
use school_core::db::schema::{ensure_schema, SCHOOL_TABLES};
use school_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_creates_all_tables() {
    let conn = open_db_in_memory().unwrap();

    for table in SCHOOL_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn ensure_schema_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO subjects (name) VALUES ('Math');", [])
        .unwrap();

    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM subjects;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_same_database_twice_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("school.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO students (name, group_name, age) VALUES ('Ann', '10A', 16);",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_some_tables_adds_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            group_name TEXT NOT NULL,
            age INTEGER NOT NULL
        );
        INSERT INTO students (name, group_name, age) VALUES ('Ben', '9B', 15);",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    for table in SCHOOL_TABLES {
        assert_table_exists(&conn, table);
    }
    let name: String = conn
        .query_row("SELECT name FROM students WHERE id = 1;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "Ben");
}

#[test]
fn opening_database_ignores_recorded_user_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("versioned.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_table_exists(&conn, "grades");
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, 999);
}

#[test]
fn opening_path_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("school.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn foreign_keys_are_not_enforced() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 0);
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
