/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Net / delta color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_net(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Table chrome color honoring the persisted dark-mode flag: dim chrome on
/// dark terminals, cyan otherwise. Never affects derived values.
pub fn chrome_color(dark_mode: bool) -> &'static str {
    if dark_mode { GREY } else { CYAN }
}
