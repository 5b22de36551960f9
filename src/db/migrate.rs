use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
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

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `sessions` table with the modern schema.
///
/// The three point columns hold values frozen at record creation; nothing
/// in the schema or the queries recomputes them.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            date             TEXT NOT NULL,
            subject          TEXT NOT NULL,
            duration_min     INTEGER NOT NULL CHECK(duration_min > 0),
            distraction_free INTEGER NOT NULL DEFAULT 1,
            base_points      INTEGER NOT NULL,
            bonus_points     INTEGER NOT NULL,
            total_points     INTEGER NOT NULL,
            source           TEXT NOT NULL DEFAULT 'cli',
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date);
        "#,
    )?;
    Ok(())
}

/// Create the `penalties` table with the modern schema.
fn create_penalties_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS penalties (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            reason     TEXT NOT NULL,
            points     INTEGER NOT NULL CHECK(points > 0),
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_penalties_date ON penalties(date);
        "#,
    )?;
    Ok(())
}

/// Early databases predate the `source` column; add it in place.
fn migrate_add_source(conn: &Connection, table: &str) -> Result<()> {
    if !table_exists(conn, table)? {
        return Ok(());
    }
    if table_has_column(conn, table, "source")? {
        return Ok(());
    }

    warning(format!("Adding 'source' column to {table} table..."));
    conn.execute_batch(&format!(
        "ALTER TABLE {table} ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';"
    ))?;

    let _ = ttlog(
        conn,
        "migration_applied",
        table,
        &format!("Added 'source' column to {table}"),
    );
    Ok(())
}

/// Bring the schema up to date. Safe to run on every startup: each step
/// checks before it changes anything.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    create_sessions_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    create_penalties_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    migrate_add_source(conn, "sessions").map_err(|e| AppError::Migration(e.to_string()))?;
    migrate_add_source(conn, "penalties").map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}
