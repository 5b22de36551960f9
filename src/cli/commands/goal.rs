use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::formatting::hours_label;

/// Show or update the study-hour goals.
/// Updates are persisted to the config file, except in test mode.
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { daily, weekly } = cmd {
        if daily.is_none() && weekly.is_none() {
            println!("Daily goal:  {}", hours_label(cfg.daily_goal_hours));
            println!("Weekly goal: {}", hours_label(cfg.weekly_goal_hours));
            return Ok(());
        }

        // Re-load so an update only touches the goal slots
        let mut updated = Config::load();

        if let Some(h) = daily {
            if *h <= 0.0 {
                return Err(AppError::Config(format!(
                    "Daily goal must be positive, got {h}"
                )));
            }
            updated.daily_goal_hours = *h;
        }

        if let Some(h) = weekly {
            if *h <= 0.0 {
                return Err(AppError::Config(format!(
                    "Weekly goal must be positive, got {h}"
                )));
            }
            updated.weekly_goal_hours = *h;
        }

        if !cli.test {
            updated
                .save()
                .map_err(|_| AppError::Config("Failed to save configuration".to_string()))?;
        }

        success(format!(
            "Goals updated: daily {} / weekly {}",
            hours_label(updated.daily_goal_hours),
            hours_label(updated.weekly_goal_hours)
        ));
    }

    Ok(())
}
