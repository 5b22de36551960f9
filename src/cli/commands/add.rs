use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_session;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::messages::success;
use crate::utils::date;

/// Log a study session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        subject,
        duration,
        date: date_arg,
        distracted,
    } = cmd
    {
        //
        // 1. Validate subject (non-empty after trimming)
        //
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(AppError::EmptySubject);
        }

        //
        // 2. Validate duration (positive minutes)
        //
        if *duration <= 0 {
            return Err(AppError::InvalidDuration(format!(
                "{duration} (must be a positive number of minutes)"
            )));
        }

        //
        // 3. Parse date (default = today)
        //
        let d = match date_arg {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            None => date::today(),
        };

        //
        // 4. Build the record; points are frozen here, in the factory
        //
        let session = Session::new(d, subject, *duration, !*distracted);

        //
        // 5. Insert
        //
        let pool = DbPool::new(&cfg.database)?;
        let id = insert_session(&pool.conn, &session)?;

        success(format!(
            "Session #{id} logged: {} on {} ({} min{})",
            session.subject,
            session.date_str(),
            session.duration_min,
            if session.distraction_free {
                ", distraction-free"
            } else {
                ""
            }
        ));
        println!(
            "   Base: {} | Bonus: {} | Total: {} points",
            session.base_points, session.bonus_points, session.total_points
        );

        ttlog(
            &pool.conn,
            "add",
            &format!("session #{id}"),
            &format!(
                "{} {} min on {} -> {} points",
                session.subject, session.duration_min, session.date_str(), session.total_points
            ),
        )?;
    }

    Ok(())
}
