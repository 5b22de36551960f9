use crate::core::points::{PointsBreakdown, calculate_points};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    pub date: NaiveDate,        // ⇔ sessions.date (TEXT "YYYY-MM-DD")
    pub subject: String,        // ⇔ sessions.subject (TEXT NOT NULL)
    pub duration_min: i64,      // ⇔ sessions.duration_min (INT, minutes)
    pub distraction_free: bool, // ⇔ sessions.distraction_free (INT 0/1)

    pub base_points: i64,  // ⇔ sessions.base_points (frozen at creation)
    pub bonus_points: i64, // ⇔ sessions.bonus_points (frozen at creation)
    pub total_points: i64, // ⇔ sessions.total_points (frozen at creation)

    pub source: String,     // ⇔ sessions.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ sessions.created_at (TEXT, ISO8601)
}

impl Session {
    /// High-level constructor for sessions created from the CLI.
    ///
    /// The points breakdown is computed here, once, and frozen into the
    /// record. The stored values are never recomputed afterwards, so
    /// existing sessions keep their score even if the formula changes
    /// for new ones.
    /// - `id = 0` until the row is inserted (AUTOINCREMENT assigns it)
    /// - `source = "cli"`
    /// - `created_at = now() in ISO8601`
    pub fn new(date: NaiveDate, subject: &str, duration_min: i64, distraction_free: bool) -> Self {
        let PointsBreakdown {
            base_points,
            bonus_points,
            total_points,
        } = calculate_points(duration_min, distraction_free);

        Self {
            id: 0,
            date,
            subject: subject.to_string(),
            duration_min,
            distraction_free,
            base_points,
            bonus_points,
            total_points,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Duration in hours, unrounded.
    pub fn hours(&self) -> f64 {
        self.duration_min as f64 / 60.0
    }
}
