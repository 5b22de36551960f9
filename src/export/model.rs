use crate::models::penalty::Penalty;
use crate::models::session::Session;
use serde::Serialize;

/// Flat session record for export.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: i64,
    pub date: String,
    pub subject: String,
    pub duration_min: i64,
    pub distraction_free: bool,
    pub base_points: i64,
    pub bonus_points: i64,
    pub total_points: i64,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id,
            date: s.date_str(),
            subject: s.subject.clone(),
            duration_min: s.duration_min,
            distraction_free: s.distraction_free,
            base_points: s.base_points,
            bonus_points: s.bonus_points,
            total_points: s.total_points,
        }
    }
}

/// Flat penalty record for export.
#[derive(Serialize, Clone, Debug)]
pub struct PenaltyExport {
    pub id: i64,
    pub date: String,
    pub reason: String,
    pub points: i64,
}

impl From<&Penalty> for PenaltyExport {
    fn from(p: &Penalty) -> Self {
        Self {
            id: p.id,
            date: p.date_str(),
            reason: p.reason.clone(),
            points: p.points,
        }
    }
}

/// Headers for CSV / XLSX.
pub(crate) fn session_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "subject",
        "duration_min",
        "distraction_free",
        "base_points",
        "bonus_points",
        "total_points",
    ]
}

pub(crate) fn session_to_row(s: &SessionExport) -> Vec<String> {
    vec![
        s.id.to_string(),
        s.date.clone(),
        s.subject.clone(),
        s.duration_min.to_string(),
        s.distraction_free.to_string(),
        s.base_points.to_string(),
        s.bonus_points.to_string(),
        s.total_points.to_string(),
    ]
}

pub(crate) fn penalty_headers() -> Vec<&'static str> {
    vec!["id", "date", "reason", "points"]
}

pub(crate) fn penalty_to_row(p: &PenaltyExport) -> Vec<String> {
    vec![
        p.id.to_string(),
        p.date.clone(),
        p.reason.clone(),
        p.points.to_string(),
    ]
}
