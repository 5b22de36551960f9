use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

fn to_export_error(e: csv::Error) -> AppError {
    AppError::Export(e.to_string())
}

/// Write headers plus pre-flattened rows as CSV.
pub(crate) fn export_csv(
    headers: &[&'static str],
    rows: &[Vec<String>],
    path: &Path,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(to_export_error)?;

    wtr.write_record(headers).map_err(to_export_error)?;
    for row in rows {
        wtr.write_record(row).map_err(to_export_error)?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
