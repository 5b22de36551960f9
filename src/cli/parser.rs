use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for studylogger
/// CLI application to log study sessions and penalties with SQLite
#[derive(Parser)]
#[command(
    name = "studylogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple study logging CLI: track sessions, penalties, points and streaks using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,
    },

    /// Log a study session
    Add {
        /// Subject studied (e.g. "Digital Electronics", "JLPT")
        subject: String,

        /// Session length in minutes
        duration: i64,

        /// Session date (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Mark the session as NOT distraction-free
        #[arg(long = "distracted")]
        distracted: bool,
    },

    /// Record a rule-violation penalty
    Penalty {
        /// Reason for the penalty (e.g. "Social media distraction")
        reason: String,

        /// Points to deduct (default taken from the configuration)
        #[arg(long = "points")]
        points: Option<i64>,

        /// Penalty date (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Delete a session or penalty by id
    Del {
        #[arg(long = "session", help = "Session id to delete")]
        session: Option<i64>,

        #[arg(long = "penalty", help = "Penalty id to delete")]
        penalty: Option<i64>,
    },

    /// List sessions (or penalties)
    List {
        /// Show records for a single date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,

        /// Show the full history
        #[arg(long = "all")]
        all: bool,

        /// List penalties instead of sessions
        #[arg(long = "penalties")]
        penalties: bool,
    },

    /// Show the analytics dashboard (streak, periods, goals, level)
    Stats {
        #[arg(long = "daily", help = "Show the per-day progress table")]
        daily: bool,

        #[arg(long = "streak", help = "Show only the distraction-free streak")]
        streak: bool,
    },

    /// Show or update study-hour goals
    Goal {
        /// Daily goal in hours
        #[arg(long = "daily")]
        daily: Option<f64>,

        /// Weekly goal in hours
        #[arg(long = "weekly")]
        weekly: Option<f64>,
    },

    /// Export sessions or penalties to a file
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        /// Restrict to a period: YYYY, YYYY-MM, YYYY-MM-DD or start:end
        #[arg(long = "period")]
        period: Option<String>,

        /// Export penalties instead of sessions
        #[arg(long = "penalties")]
        penalties: bool,

        /// Overwrite the output file if it exists
        #[arg(long = "force")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(long = "force", help = "Overwrite the destination if it exists")]
        force: bool,
    },

    /// Manage the database (integrity checks, maintenance)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log,

    /// Delete all sessions and penalties and reset goals
    Reset {
        #[arg(long = "yes", help = "Confirm the reset (required)")]
        yes: bool,
    },
}
