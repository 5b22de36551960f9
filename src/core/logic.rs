use crate::config::Config;
use crate::core::level::{level_for_points, progress_to_next, reward_text};
use crate::core::period::{PeriodKind, PeriodStats, period_stats};
use crate::core::streak::calculate_streak;
use crate::models::penalty::Penalty;
use crate::models::session::Session;
use chrono::NaiveDate;

/// Progress toward a study-hour goal. Percent is capped at 100; a zero or
/// negative goal reports 0 instead of dividing by it.
#[derive(Debug, Clone, Copy)]
pub struct GoalProgress {
    pub actual_hours: f64,
    pub goal_hours: f64,
    pub percent: f64,
}

impl GoalProgress {
    pub fn new(actual_hours: f64, goal_hours: f64) -> Self {
        let percent = if goal_hours > 0.0 {
            (actual_hours / goal_hours * 100.0).min(100.0)
        } else {
            0.0
        };
        Self {
            actual_hours,
            goal_hours,
            percent,
        }
    }
}

/// Everything the `stats` command renders, derived in one pass from the
/// raw record lists.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub streak_hours: f64,
    pub today: PeriodStats,
    pub week: PeriodStats,
    pub month: PeriodStats,
    pub daily_goal: GoalProgress,
    pub weekly_goal: GoalProgress,
    pub net_points: i64,
    pub level: i64,
    pub reward: String,
    /// (points into the current level, points per level)
    pub progress: (i64, i64),
}

pub struct Core;

impl Core {
    /// Re-derive the full dashboard. Outputs replace any previous
    /// derivation; nothing is cached between calls.
    ///
    /// Net points, level and reward are computed over the whole history;
    /// the period cards are scoped to the day/week/month containing
    /// `today`.
    pub fn build_dashboard(
        sessions: &[Session],
        penalties: &[Penalty],
        cfg: &Config,
        today: NaiveDate,
    ) -> Dashboard {
        let day = period_stats(PeriodKind::Day, today, sessions, penalties);
        let week = period_stats(PeriodKind::Week, today, sessions, penalties);
        let month = period_stats(PeriodKind::Month, today, sessions, penalties);

        let session_points: i64 = sessions.iter().map(|s| s.total_points).sum();
        let penalty_points: i64 = penalties.iter().map(|p| p.points).sum();
        let net_points = (session_points - penalty_points).max(0);
        let level = level_for_points(net_points);

        Dashboard {
            streak_hours: calculate_streak(sessions, cfg.streak_mode(), today),
            daily_goal: GoalProgress::new(day.total_hours, cfg.daily_goal_hours),
            weekly_goal: GoalProgress::new(week.total_hours, cfg.weekly_goal_hours),
            today: day,
            week,
            month,
            net_points,
            level,
            reward: reward_text(level),
            progress: progress_to_next(net_points),
        }
    }
}
