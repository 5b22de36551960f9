//! Formatting utilities used for CLI outputs.

/// Label for an hour amount already rounded to one decimal.
/// Whole values print without the trailing `.0`: `8h`, `1.5h`.
pub fn hours_label(hours: f64) -> String {
    format!("{}h", hours)
}

/// Text progress bar for goal tracking, e.g. `[#####---------------] 25%`.
/// `percent` is expected in 0..=100.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..width {
        bar.push('-');
    }
    bar.push(']');
    format!("{} {:.0}%", bar, percent)
}
