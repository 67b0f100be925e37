use chrono::{Datelike, Duration, NaiveDate};

use crate::aggregate::week_window;
use crate::error::ValidationError;

// Grid builders are pure and deterministic. Anything resembling "today" is
// the caller's problem; nothing here reads a clock.

pub fn days_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    Ok((next - first).num_days() as u32)
}

/// Slot sequence for a month: one leading `None` per weekday index of day 1
/// (Sunday = 0), then one `Some(date)` per day in order. No trailing padding.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<Option<NaiveDate>>, ValidationError> {
    let first = first_of_month(year, month)?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month)?;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    cells.extend(first.iter_days().take(days as usize).map(Some));
    Ok(cells)
}

/// Exactly 7 consecutive dates starting at the Sunday on or before
/// `reference`.
pub fn week_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let (start, _) = week_window(reference);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// The 12 month numbers of a year in order, each summarized independently.
pub fn year_months() -> impl Iterator<Item = u32> {
    1..=12
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::InvalidMonth(month))
}
