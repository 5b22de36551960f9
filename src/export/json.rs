use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use serde::Serialize;
use std::path::Path;

/// Write the typed records as pretty-printed JSON.
pub(crate) fn export_json<T: Serialize>(records: &[T], path: &Path) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(records).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
