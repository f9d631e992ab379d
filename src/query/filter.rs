//! Date filters over in-memory expense lists

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Records dated within `[start, end]`, both ends inclusive
///
/// Fails with `InvalidRange` when `start > end`. Input order is preserved.
pub fn filter_by_date_range(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> ExpenseResult<Vec<ExpenseRecord>> {
    if start > end {
        return Err(ExpenseError::InvalidRange { start, end });
    }

    Ok(records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .cloned()
        .collect())
}

/// Records dated exactly `date`
pub fn filter_by_date(records: &[ExpenseRecord], date: NaiveDate) -> Vec<ExpenseRecord> {
    records.iter().filter(|r| r.date == date).cloned().collect()
}

/// Earliest and latest dates present, or `None` for an empty list
pub fn date_bounds(records: &[ExpenseRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|r| r.date).min()?;
    let max = records.iter().map(|r| r.date).max()?;
    Some((min, max))
}
