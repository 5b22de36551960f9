use crate::db::pool::DbPool;
use crate::db::queries::{
    load_all_penalties, load_all_sessions, load_penalties_in_range, load_sessions_in_range,
};
use crate::errors::AppResult;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::{
    PenaltyExport, SessionExport, penalty_headers, penalty_to_row, session_headers, session_to_row,
};
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Export sessions (or penalties, with `penalties = true`).
    ///
    /// `range` is `None` / `"all"` for everything, or an expression like:
    /// - `YYYY`
    /// - `YYYY-MM`
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM:YYYY-MM` (any two period forms joined by `:`)
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        penalties: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = crate::utils::path::expand_tilde(file);

        ensure_writable(&path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        if penalties {
            let records: Vec<PenaltyExport> = match bounds {
                Some((start, end)) => load_penalties_in_range(&pool.conn, &start, &end)?,
                None => load_all_penalties(&pool.conn)?,
            }
            .iter()
            .map(PenaltyExport::from)
            .collect();

            if records.is_empty() {
                warning("No penalties found for selected range.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = records.iter().map(penalty_to_row).collect();
            match format {
                ExportFormat::Csv => export_csv(&penalty_headers(), &rows, &path),
                ExportFormat::Json => export_json(&records, &path),
                ExportFormat::Xlsx => export_xlsx(&penalty_headers(), &rows, &path),
            }
        } else {
            let records: Vec<SessionExport> = match bounds {
                Some((start, end)) => load_sessions_in_range(&pool.conn, &start, &end)?,
                None => load_all_sessions(&pool.conn)?,
            }
            .iter()
            .map(SessionExport::from)
            .collect();

            if records.is_empty() {
                warning("No sessions found for selected range.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = records.iter().map(session_to_row).collect();
            match format {
                ExportFormat::Csv => export_csv(&session_headers(), &rows, &path),
                ExportFormat::Json => export_json(&records, &path),
                ExportFormat::Xlsx => export_xlsx(&session_headers(), &rows, &path),
            }
        }
    }
}
