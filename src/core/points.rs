use serde::Serialize;

/// Points earned by a single study session.
///
/// `total_points = base_points + bonus_points` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub base_points: i64,
    pub bonus_points: i64,
    pub total_points: i64,
}

/// Score a session from its duration and distraction-free flag.
///
/// Base: 5 points per complete 10-minute block, remainder dropped.
/// Bonus (distraction-free only): 10 points per complete hour, except the
/// 30..60 minute band which earns a fixed 5.
///
/// Called exactly once per session, from `Session::new`; the result is
/// stored on the record and never recomputed.
pub fn calculate_points(duration_min: i64, distraction_free: bool) -> PointsBreakdown {
    let blocks = duration_min / 10;
    let base_points = blocks * 5;

    let mut bonus_points = 0;
    if distraction_free {
        bonus_points = (duration_min / 60) * 10;
        if (30..60).contains(&duration_min) {
            bonus_points = 5;
        }
    }

    PointsBreakdown {
        base_points,
        bonus_points,
        total_points: base_points + bonus_points,
    }
}
