use crate::core::round1;
use crate::models::session::Session;
use chrono::NaiveDate;

/// Streak accounting policy.
///
/// The two variants answer different questions and are never merged:
/// `SessionRun` counts the trailing run of distraction-free sessions in
/// chronological order; `CalendarDay` walks backward one calendar day at a
/// time and stops at the first day without a distraction-free entry. For
/// the same data they can produce different results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreakMode {
    #[default]
    SessionRun,
    CalendarDay,
}

impl StreakMode {
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sessions" | "session-run" => Some(Self::SessionRun),
            "days" | "calendar-day" => Some(Self::CalendarDay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreakMode::SessionRun => "sessions",
            StreakMode::CalendarDay => "days",
        }
    }
}

/// Distraction-free streak in hours, rounded to one decimal place.
///
/// `today` is only consulted in `CalendarDay` mode; `SessionRun` depends
/// on the records alone.
pub fn calculate_streak(sessions: &[Session], mode: StreakMode, today: NaiveDate) -> f64 {
    let hours = match mode {
        StreakMode::SessionRun => session_run_hours(sessions),
        StreakMode::CalendarDay => calendar_day_hours(sessions, today),
    };
    round1(hours)
}

/// Walk backward from the most recent session in (date, id) order and
/// accumulate hours until the first non-distraction-free session. Ties on
/// the same calendar day are broken by creation id.
fn session_run_hours(sessions: &[Session]) -> f64 {
    let mut sorted: Vec<&Session> = sessions.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let mut streak = 0.0;
    for session in sorted.iter().rev() {
        if !session.distraction_free {
            break;
        }
        streak += session.duration_min as f64 / 60.0;
    }
    streak
}

/// Walk backward day by day from `today`. A day counts only if it has at
/// least one distraction-free session; the first day without one ends the
/// streak. Non-distraction-free sessions on a counted day contribute
/// nothing but do not break it.
fn calendar_day_hours(sessions: &[Session], today: NaiveDate) -> f64 {
    let mut streak = 0.0;
    let mut day = today;

    loop {
        let day_hours: f64 = sessions
            .iter()
            .filter(|s| s.date == day && s.distraction_free)
            .map(|s| s.duration_min as f64 / 60.0)
            .sum();

        if day_hours == 0.0 {
            break;
        }

        streak += day_hours;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    streak
}
