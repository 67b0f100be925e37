use chrono::NaiveDate;

use crate::error::ValidationError;

/// Parses an ISO `YYYY-MM-DD` string from the form layer.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Parses a shot count from the form layer. Negative or non-numeric input is
/// rejected before it can reach the store.
pub fn parse_shots(input: &str) -> Result<u32, ValidationError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidShots(input.to_string()))
}
