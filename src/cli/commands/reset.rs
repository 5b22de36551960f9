use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_all_records;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Delete all sessions and penalties and restore default goals.
/// The audit log is kept so the reset itself stays visible.
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes {
            warning("This deletes ALL sessions and penalties. Re-run with --yes to confirm.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let (sessions, penalties) = delete_all_records(&pool.conn)?;

        // goals back to defaults, db path untouched
        if !cli.test {
            let mut updated = Config::load();
            updated.daily_goal_hours = Config::default().daily_goal_hours;
            updated.weekly_goal_hours = Config::default().weekly_goal_hours;
            updated
                .save()
                .map_err(|_| AppError::Config("Failed to save configuration".to_string()))?;
        }

        ttlog(
            &pool.conn,
            "reset",
            "",
            &format!("Deleted {sessions} sessions and {penalties} penalties"),
        )?;

        success(format!(
            "All data has been reset ({sessions} sessions, {penalties} penalties removed)"
        ));
    }

    Ok(())
}
