use crate::core::streak::StreakMode;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_daily_goal")]
    pub daily_goal_hours: f64,
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal_hours: f64,
    #[serde(default = "default_penalty_points")]
    pub default_penalty_points: i64,
    #[serde(default = "default_streak_mode")]
    pub streak_mode: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_daily_goal() -> f64 {
    8.0
}
fn default_weekly_goal() -> f64 {
    40.0
}
fn default_penalty_points() -> i64 {
    5
}
fn default_streak_mode() -> String {
    "sessions".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            dark_mode: false,
            daily_goal_hours: default_daily_goal(),
            weekly_goal_hours: default_weekly_goal(),
            default_penalty_points: default_penalty_points(),
            streak_mode: default_streak_mode(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("studylogger")
        } else {
            match dirs::home_dir() {
                Some(home) => home.join(".studylogger"),
                None => PathBuf::from(".studylogger"),
            }
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studylogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("studylogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or unparseable file also falls back to defaults; the
    /// engine never sees that failure.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Configuration file is not valid YAML ({}), using defaults",
                        e
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Failed to read configuration file ({}), using defaults",
                    e
                ));
                Config::default()
            }
        }
    }

    /// Persist the current configuration to the config file.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
    }

    /// Streak policy, parsed from the config string. Unknown values fall
    /// back to the default mode.
    pub fn streak_mode(&self) -> StreakMode {
        StreakMode::from_config_str(&self.streak_mode).unwrap_or_default()
    }

    /// Initialize configuration and database files.
    /// In test mode only the database file is touched.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
