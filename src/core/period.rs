use crate::core::round1;
use crate::models::penalty::Penalty;
use crate::models::session::Session;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Day,
    Week,
    Month,
}

/// Resolve a period to the inclusive [start, end] day range containing
/// `today`. Weeks run Sunday through Saturday; months cover the first
/// through the last calendar day.
pub fn period_range(kind: PeriodKind, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match kind {
        PeriodKind::Day => (today, today),
        PeriodKind::Week => {
            let back = today.weekday().num_days_from_sunday() as i64;
            let start = today - Duration::days(back);
            (start, start + Duration::days(6))
        }
        PeriodKind::Month => {
            let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
            (start, last_day_of_month(today.year(), today.month()))
        }
    }
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}

/// Aggregate totals for one period. Recomputed from the raw record lists
/// on every read; never cached or persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodStats {
    pub total_hours: f64,
    pub session_points: i64,
    pub penalty_points: i64,
    pub net_points: i64,
    pub session_count: usize,
    pub penalty_count: usize,
}

/// Aggregate sessions and penalties for the period containing `today`.
pub fn period_stats(
    kind: PeriodKind,
    today: NaiveDate,
    sessions: &[Session],
    penalties: &[Penalty],
) -> PeriodStats {
    let (start, end) = period_range(kind, today);
    stats_for_range(start, end, sessions, penalties)
}

/// Aggregate over an inclusive [start, end] day range.
///
/// Penalties cannot drive net points negative: the net is floored at 0.
pub fn stats_for_range(
    start: NaiveDate,
    end: NaiveDate,
    sessions: &[Session],
    penalties: &[Penalty],
) -> PeriodStats {
    let mut stats = PeriodStats::default();
    let mut minutes = 0i64;

    for s in sessions.iter().filter(|s| s.date >= start && s.date <= end) {
        minutes += s.duration_min;
        stats.session_points += s.total_points;
        stats.session_count += 1;
    }

    for p in penalties.iter().filter(|p| p.date >= start && p.date <= end) {
        stats.penalty_points += p.points;
        stats.penalty_count += 1;
    }

    stats.total_hours = round1(minutes as f64 / 60.0);
    stats.net_points = (stats.session_points - stats.penalty_points).max(0);
    stats
}
