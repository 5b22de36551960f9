use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{
    load_all_penalties, load_all_sessions, load_penalties_by_date, load_sessions_by_date,
};
use crate::errors::{AppError, AppResult};
use crate::models::penalty::Penalty;
use crate::models::session::Session;
use crate::utils::colors::{RESET, chrome_color};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        all,
        penalties,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        // --all wins; otherwise a single day (explicit or today)
        let day = if *all {
            None
        } else {
            Some(match date_arg {
                Some(raw) => {
                    date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
                }
                None => date::today(),
            })
        };

        if *penalties {
            let records = match &day {
                Some(d) => load_penalties_by_date(&pool.conn, d)?,
                None => load_all_penalties(&pool.conn)?,
            };
            print_penalties(&records, day.is_none(), cfg);
        } else {
            let records = match &day {
                Some(d) => load_sessions_by_date(&pool.conn, d)?,
                None => load_all_sessions(&pool.conn)?,
            };
            print_sessions(&records, day.is_none(), cfg);
        }
    }

    Ok(())
}

fn print_sessions(sessions: &[Session], with_date: bool, cfg: &Config) {
    if sessions.is_empty() {
        println!("No study sessions found for this view.");
        return;
    }

    let mut columns = Vec::new();
    if with_date {
        columns.push(Column::new("Date", 10));
    }
    columns.extend([
        Column::new("Id", 4),
        Column::new("Subject", 18),
        Column::new("Min", 5),
        Column::new("Free", 4),
        Column::new("Base", 5),
        Column::new("Bonus", 5),
        Column::new("Total", 5),
    ]);

    let mut table = Table::new(columns);
    for s in sessions {
        let mut row = Vec::new();
        if with_date {
            row.push(s.date_str());
        }
        row.extend([
            s.id.to_string(),
            s.subject.clone(),
            s.duration_min.to_string(),
            if s.distraction_free { "yes" } else { "no" }.to_string(),
            s.base_points.to_string(),
            s.bonus_points.to_string(),
            s.total_points.to_string(),
        ]);
        table.add_row(row);
    }

    let chrome = chrome_color(cfg.dark_mode);
    print!(
        "{}{}",
        chrome,
        table.render_with_separator(Some(&cfg.separator_char))
    );
    print!("{}", RESET);

    let total: i64 = sessions.iter().map(|s| s.total_points).sum();
    println!("Total session points: {}", total);
}

fn print_penalties(penalties: &[Penalty], with_date: bool, cfg: &Config) {
    if penalties.is_empty() {
        println!("No penalties found for this view.");
        return;
    }

    let mut columns = Vec::new();
    if with_date {
        columns.push(Column::new("Date", 10));
    }
    columns.extend([
        Column::new("Id", 4),
        Column::new("Reason", 24),
        Column::new("Points", 6),
    ]);

    let mut table = Table::new(columns);
    for p in penalties {
        let mut row = Vec::new();
        if with_date {
            row.push(p.date_str());
        }
        row.extend([
            p.id.to_string(),
            p.reason.clone(),
            format!("-{}", p.points),
        ]);
        table.add_row(row);
    }

    let chrome = chrome_color(cfg.dark_mode);
    print!(
        "{}{}",
        chrome,
        table.render_with_separator(Some(&cfg.separator_char))
    );
    print!("{}", RESET);

    let total: i64 = penalties.iter().map(|p| p.points).sum();
    println!("Total penalty points: -{}", total);
}
