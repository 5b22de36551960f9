use crate::errors::{AppError, AppResult};
use crate::utils::date::period_bounds;
use chrono::NaiveDate;

/// Parse an export range expression into inclusive day bounds.
///
/// Single periods (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a `start:end` pair
/// of periods, where the range runs from the start of the first to the end
/// of the second.
pub(crate) fn parse_range(expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((lhs, rhs)) = expr.split_once(':') {
        let (start, _) = period_bounds(lhs).map_err(AppError::InvalidDate)?;
        let (_, end) = period_bounds(rhs).map_err(AppError::InvalidDate)?;

        if start > end {
            return Err(AppError::InvalidDate(format!(
                "Range start after end: {expr}"
            )));
        }
        return Ok((start, end));
    }

    period_bounds(expr).map_err(AppError::InvalidDate)
}
