use rusqlite::Connection;

use crate::error::HolocronResult;

/// Initialize the snapshot schema. Creates all tables if they don't exist.
/// Contact and note snapshots live in separate files but share one schema.
pub fn initialize(conn: &Connection) -> HolocronResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            name TEXT PRIMARY KEY NOT NULL,
            address TEXT,
            birthday TEXT,
            email TEXT
        );

        CREATE TABLE IF NOT EXISTS contact_phones (
            contact_name TEXT NOT NULL REFERENCES contacts(name) ON DELETE CASCADE,
            phone TEXT NOT NULL,
            PRIMARY KEY (contact_name, phone)
        );

        CREATE TABLE IF NOT EXISTS notes (
            position INTEGER PRIMARY KEY NOT NULL,
            title TEXT NOT NULL UNIQUE,
            body TEXT NOT NULL,
            tags TEXT NOT NULL DEFAULT '[]'
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
