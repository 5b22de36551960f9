use crate::core::level::level_for_points;
use crate::core::period::stats_for_range;
use crate::models::penalty::Penalty;
use crate::models::session::Session;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the daily progress table.
#[derive(Debug, Clone, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub study_hours: f64,
    pub session_points: i64,
    pub penalty_points: i64,
    pub net_points: i64,
    pub level: i64,
    pub session_count: usize,
    pub penalty_count: usize,
}

/// One aggregate row per distinct date appearing in either list (union,
/// no duplicates), most recent date first. Each row is the single-day
/// period aggregate plus a level derived from that day's net points alone.
pub fn daily_breakdown(sessions: &[Session], penalties: &[Penalty]) -> Vec<DayStats> {
    let mut dates: Vec<NaiveDate> = sessions
        .iter()
        .map(|s| s.date)
        .chain(penalties.iter().map(|p| p.date))
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates.reverse();

    dates
        .into_iter()
        .map(|date| {
            let stats = stats_for_range(date, date, sessions, penalties);
            DayStats {
                date,
                study_hours: stats.total_hours,
                session_points: stats.session_points,
                penalty_points: stats.penalty_points,
                net_points: stats.net_points,
                level: level_for_points(stats.net_points),
                session_count: stats.session_count,
                penalty_count: stats.penalty_count,
            }
        })
        .collect()
}
