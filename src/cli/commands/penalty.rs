use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_penalty;
use crate::errors::{AppError, AppResult};
use crate::models::penalty::Penalty;
use crate::ui::messages::success;
use crate::utils::date;

/// Record a rule-violation penalty.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Penalty {
        reason,
        points,
        date: date_arg,
    } = cmd
    {
        //
        // 1. Validate reason
        //
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::EmptyReason);
        }

        //
        // 2. Points: explicit or config default, always positive
        //
        let points = points.unwrap_or(cfg.default_penalty_points);
        if points <= 0 {
            return Err(AppError::InvalidPoints(format!(
                "{points} (must be a positive deduction)"
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
        // 4. Insert
        //
        let penalty = Penalty::new(d, reason, points);
        let pool = DbPool::new(&cfg.database)?;
        let id = insert_penalty(&pool.conn, &penalty)?;

        success(format!(
            "Penalty #{id} recorded: {} on {} (-{} points)",
            penalty.reason,
            penalty.date_str(),
            penalty.points
        ));

        ttlog(
            &pool.conn,
            "penalty",
            &format!("penalty #{id}"),
            &format!("{} -> -{} points on {}", penalty.reason, penalty.points, penalty.date_str()),
        )?;
    }

    Ok(())
}
