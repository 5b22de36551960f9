use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A point deduction for a named infraction on a given day.
/// Penalties carry no derived fields; their points are entered as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Penalty {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ penalties.date (TEXT "YYYY-MM-DD")
    pub reason: String,     // ⇔ penalties.reason (TEXT NOT NULL)
    pub points: i64,        // ⇔ penalties.points (INT, positive deduction)
    pub source: String,     // ⇔ penalties.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ penalties.created_at (TEXT, ISO8601)
}

impl Penalty {
    pub fn new(date: NaiveDate, reason: &str, points: i64) -> Self {
        Self {
            id: 0,
            date,
            reason: reason.to_string(),
            points,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
