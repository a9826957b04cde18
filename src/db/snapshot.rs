use std::path::Path;

use log::info;
use rusqlite::Connection;

use crate::db::{contact_repo, note_repo, schema};
use crate::error::HolocronResult;
use crate::store::{ContactStore, NoteStore};

/// Loads the contact snapshot at `path`. Returns `None` when there is no file.
pub fn load_contacts(path: &Path) -> HolocronResult<Option<ContactStore>> {
    let conn = match open_existing(path)? {
        Some(c) => c,
        None => return Ok(None),
    };
    contacts_from(&conn).map(Some)
}

/// Loads the note snapshot at `path`. Returns `None` when there is no file.
pub fn load_notes(path: &Path) -> HolocronResult<Option<NoteStore>> {
    let conn = match open_existing(path)? {
        Some(c) => c,
        None => return Ok(None),
    };
    notes_from(&conn).map(Some)
}

pub fn save_contacts(path: &Path, store: &ContactStore) -> HolocronResult<()> {
    let mut conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    let count = contacts_into(&mut conn, store)?;
    info!("saved {} contact(s) to {}", count, path.display());
    Ok(())
}

pub fn save_notes(path: &Path, store: &NoteStore) -> HolocronResult<()> {
    let mut conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    let count = notes_into(&mut conn, store)?;
    info!("saved {} note(s) to {}", count, path.display());
    Ok(())
}

/// Writes the whole store in one transaction, replacing what was there.
pub fn contacts_into(conn: &mut Connection, store: &ContactStore) -> HolocronResult<usize> {
    let tx = conn.transaction()?;
    let count = contact_repo::replace_all(&tx, store.records())?;
    tx.commit()?;
    Ok(count)
}

pub fn notes_into(conn: &mut Connection, store: &NoteStore) -> HolocronResult<usize> {
    let tx = conn.transaction()?;
    let count = note_repo::replace_all(&tx, store.notes())?;
    tx.commit()?;
    Ok(count)
}

pub fn contacts_from(conn: &Connection) -> HolocronResult<ContactStore> {
    let mut store = ContactStore::new();
    for record in contact_repo::find_all(conn)? {
        store.insert(record)?;
    }
    Ok(store)
}

pub fn notes_from(conn: &Connection) -> HolocronResult<NoteStore> {
    let mut store = NoteStore::new();
    for note in note_repo::find_all(conn)? {
        store.insert(note)?;
    }
    Ok(store)
}

fn open_existing(path: &Path) -> HolocronResult<Option<Connection>> {
    if !path.exists() {
        return Ok(None);
    }
    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    info!("opened snapshot {}", path.display());
    Ok(Some(conn))
}
