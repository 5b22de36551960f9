/// Level from net points: one level per 100 points, floored at 1.
/// Shared by the dashboard and the daily breakdown table.
pub fn level_for_points(net_points: i64) -> i64 {
    (net_points / 100 + 1).max(1)
}

/// Points into the current level, out of 100, for the progress bar.
pub fn progress_to_next(net_points: i64) -> (i64, i64) {
    (net_points % 100, 100)
}

/// Reward attached to a level. Levels 1-3 have fixed rewards; everything
/// above falls back to the templated string.
pub fn reward_text(level: i64) -> String {
    match level {
        1 => "Keep studying to reach level 2!".to_string(),
        2 => "Reward: Watch one episode of your favorite anime!".to_string(),
        3 => "Reward: Enjoy a special treat or snack!".to_string(),
        _ => format!("Reward: Level {} - Choose a special activity!", level),
    }
}
