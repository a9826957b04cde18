use rusqlite::{params, Connection};

use crate::error::HolocronResult;
use crate::model::Note;

/// Tags are stored as a JSON array so order and repeats survive.
pub fn insert(conn: &Connection, position: usize, note: &Note) -> HolocronResult<()> {
    let tags = serde_json::to_string(note.tags())?;
    conn.execute(
        "INSERT INTO notes (position, title, body, tags) VALUES (?1, ?2, ?3, ?4)",
        params![position as i64, note.title(), note.text(), tags],
    )?;
    Ok(())
}

pub fn delete_all(conn: &Connection) -> HolocronResult<()> {
    conn.execute("DELETE FROM notes", [])?;
    Ok(())
}

pub fn replace_all(conn: &Connection, notes: &[Note]) -> HolocronResult<usize> {
    delete_all(conn)?;
    for (position, note) in notes.iter().enumerate() {
        insert(conn, position, note)?;
    }
    Ok(notes.len())
}

pub fn find_all(conn: &Connection) -> HolocronResult<Vec<Note>> {
    let mut stmt = conn.prepare("SELECT title, body, tags FROM notes ORDER BY position")?;

    let rows: Vec<(String, String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut notes = Vec::with_capacity(rows.len());
    for (title, body, tags_json) in rows {
        let tags: Vec<String> = serde_json::from_str(&tags_json)?;
        notes.push(Note::create(&title, &body, tags));
    }
    Ok(notes)
}
