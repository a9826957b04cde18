use rusqlite::{params, Connection};

use crate::error::{HolocronError, HolocronResult};
use crate::model::Record;

pub fn insert(conn: &Connection, record: &Record) -> HolocronResult<()> {
    conn.execute(
        "INSERT INTO contacts (name, address, birthday, email) VALUES (?1, ?2, ?3, ?4)",
        params![
            record.name(),
            record.address(),
            record.birthday().map(|b| b.value()),
            record.email(),
        ],
    )?;

    for phone in record.phones() {
        conn.execute(
            "INSERT INTO contact_phones (contact_name, phone) VALUES (?1, ?2)",
            params![record.name(), phone.value()],
        )?;
    }

    Ok(())
}

pub fn delete_all(conn: &Connection) -> HolocronResult<()> {
    conn.execute("DELETE FROM contact_phones", [])?;
    conn.execute("DELETE FROM contacts", [])?;
    Ok(())
}

/// Replaces every stored contact with `records`.
pub fn replace_all<'a>(
    conn: &Connection,
    records: impl IntoIterator<Item = &'a Record>,
) -> HolocronResult<usize> {
    delete_all(conn)?;
    let mut count = 0;
    for record in records {
        insert(conn, record)?;
        count += 1;
    }
    Ok(count)
}

/// Loads every contact, re-validating each stored value.
pub fn find_all(conn: &Connection) -> HolocronResult<Vec<Record>> {
    let mut stmt = conn.prepare(
        "SELECT name, address, birthday, email FROM contacts ORDER BY name",
    )?;

    let rows: Vec<(String, Option<String>, Option<String>, Option<String>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = Vec::with_capacity(rows.len());
    for (name, address, birthday, email) in rows {
        records.push(row_to_record(conn, &name, address, birthday, email)?);
    }
    Ok(records)
}

pub fn find_phones(conn: &Connection, name: &str) -> HolocronResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT phone FROM contact_phones WHERE contact_name = ?1 ORDER BY phone",
    )?;
    let phones = stmt
        .query_map(params![name], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(phones)
}

pub fn count(conn: &Connection) -> HolocronResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n)
}

fn row_to_record(
    conn: &Connection,
    name: &str,
    address: Option<String>,
    birthday: Option<String>,
    email: Option<String>,
) -> HolocronResult<Record> {
    let phones = find_phones(conn, name)?;
    let (first, rest) = phones.split_first().ok_or_else(|| {
        HolocronError::Other(format!("Contact {} has no phone numbers", name))
    })?;

    let mut record = Record::new(name, first)?;
    for phone in rest {
        record.add_phone(phone)?;
    }
    if let Some(address) = address {
        record.add_address(&address)?;
    }
    if let Some(birthday) = birthday {
        record.add_birthday(&birthday)?;
    }
    if let Some(email) = email {
        record.add_email(&email)?;
    }
    Ok(record)
}
