use rusqlite::Connection;
use todo_core::db::migrations::latest_version;
use todo_core::db::{open_db, open_db_in_memory, DbError};
use todo_core::{
    KeyValueStore, SqliteStore, StoreError, TodoListManager, TodoSession, TODOS_STORAGE_KEY,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = SqliteStore::open(&path).err().expect("store open should fail");
    assert!(matches!(err, StoreError::Db(DbError::UnsupportedSchemaVersion { .. })));
}

#[test]
fn list_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let saved = {
        let store = SqliteStore::open(&path).unwrap();
        let mut session = TodoSession::new(TodoListManager::load(store));
        let first = session.add("Buy milk", None).unwrap();
        session.add("Call mom", None).unwrap();
        session.toggle(first);
        session.into_manager().items().to_vec()
    };

    let store = SqliteStore::open(&path).unwrap();
    let reloaded = TodoListManager::load(store);
    assert_eq!(reloaded.items(), saved.as_slice());
    assert_eq!(reloaded.stats().completed, 1);
}

#[test]
fn corrupt_row_is_treated_as_no_data() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set(TODOS_STORAGE_KEY, "[{\"id\":").unwrap();

    let mut todos = TodoListManager::load(store);
    assert!(todos.is_empty());

    todos.add("fresh start", None).unwrap();
    let raw = todos.store().get(TODOS_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("fresh start"));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
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
