use crate::errors::{AppError, AppResult};
use crate::models::penalty::Penalty;
use crate::models::session::Session;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn parse_row_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.to_string())),
        )
    })
}

pub fn map_session_row(row: &Row) -> Result<Session> {
    let date_str: String = row.get("date")?;

    Ok(Session {
        id: row.get("id")?,
        date: parse_row_date(&date_str)?,
        subject: row.get("subject")?,
        duration_min: row.get("duration_min")?,
        distraction_free: row.get::<_, i64>("distraction_free")? == 1,
        base_points: row.get("base_points")?,
        bonus_points: row.get("bonus_points")?,
        total_points: row.get("total_points")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_penalty_row(row: &Row) -> Result<Penalty> {
    let date_str: String = row.get("date")?;

    Ok(Penalty {
        id: row.get("id")?,
        date: parse_row_date(&date_str)?,
        reason: row.get("reason")?,
        points: row.get("points")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// All sessions in creation order. Date ordering is the engine's concern;
/// the store returns the raw list.
pub fn load_all_sessions(conn: &Connection) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare("SELECT * FROM sessions ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_sessions_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM sessions
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sessions whose date falls in the inclusive [start, end] range.
/// Day strings sort lexicographically, so BETWEEN on TEXT is exact.
pub fn load_sessions_in_range(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM sessions
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_session_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a session and return its assigned id.
pub fn insert_session(conn: &Connection, s: &Session) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sessions (date, subject, duration_min, distraction_free,
                               base_points, bonus_points, total_points, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            s.date_str(),
            s.subject,
            s.duration_min,
            if s.distraction_free { 1 } else { 0 },
            s.base_points,
            s.bonus_points,
            s.total_points,
            s.source,
            s.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute("DELETE FROM sessions WHERE id = ?", [id])?;
    if affected == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

pub fn load_all_penalties(conn: &Connection) -> AppResult<Vec<Penalty>> {
    let mut stmt = conn.prepare("SELECT * FROM penalties ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_penalty_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_penalties_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Penalty>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM penalties
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_penalty_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_penalties_in_range(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<Penalty>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM penalties
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_penalty_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a penalty and return its assigned id.
pub fn insert_penalty(conn: &Connection, p: &Penalty) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO penalties (date, reason, points, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![p.date_str(), p.reason, p.points, p.source, p.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_penalty(conn: &Connection, id: i64) -> AppResult<()> {
    let affected = conn.execute("DELETE FROM penalties WHERE id = ?", [id])?;
    if affected == 0 {
        return Err(AppError::PenaltyNotFound(id));
    }
    Ok(())
}

/// Wipe all study data. The audit log is preserved.
pub fn delete_all_records(conn: &Connection) -> AppResult<(usize, usize)> {
    let sessions = conn.execute("DELETE FROM sessions", [])?;
    let penalties = conn.execute("DELETE FROM penalties", [])?;
    Ok((sessions, penalties))
}

/// Convenience used by tests and seed scripts: build a session through the
/// factory (freezing its points) and insert it.
pub fn add_session(
    conn: &Connection,
    date: &str,
    subject: &str,
    duration_min: i64,
    distraction_free: bool,
) -> AppResult<i64> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.to_string()))?;
    let session = Session::new(d, subject, duration_min, distraction_free);
    insert_session(conn, &session)
}

/// Convenience counterpart for penalties.
pub fn add_penalty(conn: &Connection, date: &str, reason: &str, points: i64) -> AppResult<i64> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.to_string()))?;
    let penalty = Penalty::new(d, reason, points);
    insert_penalty(conn, &penalty)
}
