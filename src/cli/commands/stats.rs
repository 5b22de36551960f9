use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::daily::daily_breakdown;
use crate::core::logic::{Core, Dashboard, GoalProgress};
use crate::core::period::PeriodStats;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_penalties, load_all_sessions};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, RED, RESET, chrome_color, color_for_net};
use crate::utils::formatting::{hours_label, progress_bar};
use crate::utils::table::{Column, Table};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { daily, streak } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        // the engine re-derives everything from the full record lists
        let sessions = load_all_sessions(&pool.conn)?;
        let penalties = load_all_penalties(&pool.conn)?;
        let today = date::today();

        let dashboard = Core::build_dashboard(&sessions, &penalties, cfg, today);

        if *streak {
            println!(
                "Distraction-free streak: {} ({} mode)",
                hours_label(dashboard.streak_hours),
                cfg.streak_mode().as_str()
            );
            return Ok(());
        }

        print_dashboard(&dashboard);

        if *daily {
            println!();
            print_daily_table(&sessions, &penalties, cfg);
        }
    }

    Ok(())
}

fn print_dashboard(d: &Dashboard) {
    header("Analytics Dashboard");
    println!(
        "🔥 Distraction-free streak: {}",
        hours_label(d.streak_hours)
    );
    println!();

    print_period_card("Today", &d.today);
    print_period_card("This week", &d.week);
    print_period_card("This month", &d.month);

    println!();
    print_goal("Daily goal", &d.daily_goal);
    print_goal("Weekly goal", &d.weekly_goal);

    println!();
    println!(
        "Net points: {} | Level: {}",
        d.net_points, d.level
    );
    println!("{}", d.reward);
    println!(
        "Progress to level {}: {}/{}",
        d.level + 1,
        d.progress.0,
        d.progress.1
    );
}

fn print_period_card(label: &str, stats: &PeriodStats) {
    println!(
        "📅 {:<11} {:>6} studied | {} sessions | {}+{}{} | {}-{}{} | {}net {}{}",
        label,
        hours_label(stats.total_hours),
        stats.session_count,
        GREEN,
        stats.session_points,
        RESET,
        RED,
        stats.penalty_points,
        RESET,
        color_for_net(stats.net_points),
        stats.net_points,
        RESET
    );
}

fn print_goal(label: &str, goal: &GoalProgress) {
    println!(
        "{:<12} {:>6}/{:<5} {}",
        label,
        hours_label(goal.actual_hours),
        hours_label(goal.goal_hours),
        progress_bar(goal.percent, 20)
    );
}

fn print_daily_table(
    sessions: &[crate::models::session::Session],
    penalties: &[crate::models::penalty::Penalty],
    cfg: &Config,
) {
    let rows = daily_breakdown(sessions, penalties);
    if rows.is_empty() {
        println!("No data available yet.");
        return;
    }

    header("Daily Progress");

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Hours", 6),
        Column::new("Sessions", 8),
        Column::new("Penalties", 9),
        Column::new("Points", 6),
        Column::new("Level", 5),
    ]);

    for day in &rows {
        table.add_row(vec![
            day.date.format("%Y-%m-%d").to_string(),
            hours_label(day.study_hours),
            format!("+{} ({})", day.session_points, day.session_count),
            format!("-{} ({})", day.penalty_points, day.penalty_count),
            day.net_points.to_string(),
            day.level.to_string(),
        ]);
    }

    let chrome = chrome_color(cfg.dark_mode);
    print!(
        "{}{}",
        chrome,
        table.render_with_separator(Some(&cfg.separator_char))
    );
    print!("{}", RESET);
}
