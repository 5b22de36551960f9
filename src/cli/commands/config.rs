use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::streak::StreakMode;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let mut problems = 0;

            if cfg.database.trim().is_empty() {
                warning("database path is empty");
                problems += 1;
            }
            if cfg.daily_goal_hours <= 0.0 {
                warning(format!(
                    "daily_goal_hours must be positive (found {})",
                    cfg.daily_goal_hours
                ));
                problems += 1;
            }
            if cfg.weekly_goal_hours <= 0.0 {
                warning(format!(
                    "weekly_goal_hours must be positive (found {})",
                    cfg.weekly_goal_hours
                ));
                problems += 1;
            }
            if cfg.default_penalty_points <= 0 {
                warning(format!(
                    "default_penalty_points must be positive (found {})",
                    cfg.default_penalty_points
                ));
                problems += 1;
            }
            if StreakMode::from_config_str(&cfg.streak_mode).is_none() {
                warning(format!(
                    "streak_mode '{}' is not recognized (use 'sessions' or 'days')",
                    cfg.streak_mode
                ));
                problems += 1;
            }

            if problems == 0 {
                success("Configuration OK");
            } else {
                return Err(AppError::Config(format!(
                    "{problems} problem(s) found in configuration"
                )));
            }
        }
    }

    Ok(())
}
