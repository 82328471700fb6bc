use grudgebook_core::db::migrations::latest_version;
use grudgebook_core::db::open_db_in_memory;
use grudgebook_core::{RepoError, SlotRepository, SqliteSlotRepository};
use rusqlite::Connection;

#[test]
fn read_of_absent_slot_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    assert_eq!(repo.read_slot("never_written").unwrap(), None);
}

#[test]
fn write_then_read_round_trips_exactly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    let payload = r#"{"2024-03-01":[{"id":"1","text":"x"}]}"#;
    repo.write_slot("journal_entries", payload).unwrap();

    assert_eq!(
        repo.read_slot("journal_entries").unwrap().as_deref(),
        Some(payload)
    );
}

#[test]
fn write_replaces_the_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.write_slot("slot", "first").unwrap();
    repo.write_slot("slot", "second").unwrap();

    assert_eq!(repo.read_slot("slot").unwrap().as_deref(), Some("second"));
}

#[test]
fn slots_are_independent_of_each_other() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.write_slot("a", "alpha").unwrap();
    repo.write_slot("b", "beta").unwrap();

    assert_eq!(repo.read_slot("a").unwrap().as_deref(), Some("alpha"));
    assert_eq!(repo.read_slot("b").unwrap().as_deref(), Some("beta"));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteSlotRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_slots_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(result, Err(RepoError::MissingRequiredTable("slots"))));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE slots (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "slots",
            column: "updated_at"
        })
    ));
}
