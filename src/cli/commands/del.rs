use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_penalty, delete_session};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Delete a single session or penalty by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { session, penalty } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match (session, penalty) {
            (Some(id), None) => {
                delete_session(&pool.conn, *id)?;
                info(format!("Deleted session #{id}"));
                ttlog(
                    &pool.conn,
                    "del",
                    &format!("session #{id}"),
                    "Session deleted",
                )?;
            }
            (None, Some(id)) => {
                delete_penalty(&pool.conn, *id)?;
                info(format!("Deleted penalty #{id}"));
                ttlog(
                    &pool.conn,
                    "del",
                    &format!("penalty #{id}"),
                    "Penalty deleted",
                )?;
            }
            _ => {
                return Err(AppError::Other(
                    "Specify exactly one of --session <ID> or --penalty <ID>".to_string(),
                ));
            }
        }
    }

    Ok(())
}
