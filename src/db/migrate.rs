use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `entries` table exists.
pub fn entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `entries` table.
///
/// `id` is supplied by the caller (millisecond timestamp), so it is a plain
/// INTEGER PRIMARY KEY without AUTOINCREMENT.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY,
            type        TEXT NOT NULL CHECK(type IN ('colleagues','visitors')),
            first_name  TEXT NOT NULL DEFAULT '',
            last_name   TEXT NOT NULL DEFAULT '',
            card        TEXT NOT NULL DEFAULT '',
            date        TEXT NOT NULL,
            hour        TEXT NOT NULL DEFAULT '',
            returned    TEXT CHECK(returned IS NULL OR returned IN ('Returned','Not Returned')),
            note        TEXT
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_entries_type_date ON entries(type, date);
        CREATE INDEX IF NOT EXISTS idx_entries_card ON entries(card);
        "#,
    )?;
    Ok(())
}

/// Public entry point: bring a register file up to the current schema.
///
/// Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !entries_table_exists(conn)? {
        create_entries_table(conn)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', 'entries', 'Created entries table')",
            [],
        )?;
    }

    ensure_indexes(conn)?;

    Ok(())
}
