//! Record store: every read and write against the `entries` table.

use crate::db::predicate::Predicate;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, RegisterType, ReturnStatus};
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const SELECT_ENTRIES: &str =
    "SELECT id, type, first_name, last_name, card, date, hour, returned, note FROM entries";

pub fn map_row(row: &Row) -> Result<Entry> {
    let type_str: String = row.get("type")?;
    let register = RegisterType::from_db_str(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRegister(type_str.clone())),
        )
    })?;

    let returned = match row.get::<_, Option<String>>("returned")? {
        Some(s) => Some(ReturnStatus::from_db_str(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidReturnStatus(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(Entry {
        id: row.get("id")?,
        register,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        card: row.get("card")?,
        date: row.get("date")?,
        hour: row.get("hour")?,
        returned,
        note: row.get("note")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, type, first_name, last_name, card, date, hour, returned, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            entry.id,
            entry.register.to_db_str(),
            entry.first_name,
            entry.last_name,
            entry.card,
            entry.date,
            entry.hour,
            entry.returned.map(|r| r.to_db_str()),
            entry.note,
        ],
    )?;
    Ok(())
}

/// All entries matching `predicate`, ordered by id ascending.
pub fn find_by(conn: &Connection, predicate: &Predicate) -> AppResult<Vec<Entry>> {
    let (where_sql, values) = predicate.to_sql();
    let sql = format!("{SELECT_ENTRIES} WHERE {where_sql} ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let sql = format!("{SELECT_ENTRIES} WHERE id = ?1");
    let entry = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(entry)
}

/// Replace the whole stored record with `body` (all columns, not a merge).
/// Returns the number of rows touched; 0 means no entry had that id.
pub fn update_by_id(conn: &Connection, id: i64, body: &Entry) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE entries
         SET id = ?1, type = ?2, first_name = ?3, last_name = ?4,
             card = ?5, date = ?6, hour = ?7, returned = ?8, note = ?9
         WHERE id = ?10",
        params![
            body.id,
            body.register.to_db_str(),
            body.first_name,
            body.last_name,
            body.card,
            body.date,
            body.hour,
            body.returned.map(|r| r.to_db_str()),
            body.note,
            id,
        ],
    )?;
    Ok(changed)
}

pub fn delete_by_id(conn: &Connection, id: i64) -> AppResult<usize> {
    let removed = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(removed)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    let removed = conn.execute("DELETE FROM entries", [])?;
    Ok(removed)
}

pub fn delete_where(conn: &Connection, predicate: &Predicate) -> AppResult<usize> {
    let (where_sql, values) = predicate.to_sql();
    let sql = format!("DELETE FROM entries WHERE {where_sql}");
    let removed = conn.execute(&sql, params_from_iter(values.iter()))?;
    Ok(removed)
}

/// Highest stored id, if any.
pub fn max_id(conn: &Connection) -> AppResult<Option<i64>> {
    let max: Option<i64> = conn.query_row("SELECT MAX(id) FROM entries", [], |row| row.get(0))?;
    Ok(max)
}
