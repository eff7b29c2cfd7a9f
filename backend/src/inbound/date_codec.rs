//! ISO-8601 calendar date codec shared by every protocol adapter.
//!
//! All facades exchange dates as `YYYY-MM-DD` strings. chrono's `%Y-%m-%d`
//! also takes unpadded fields and signed years, so the shape is checked
//! before parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Wire format for reservation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_LEN: usize = 10;

/// Rejected date text.
#[derive(Debug, Error)]
pub enum DateError {
    #[error("expected YYYY-MM-DD")]
    Shape,
    #[error("not a calendar date: {0}")]
    Calendar(#[from] chrono::ParseError),
}

fn has_iso_shape(raw: &str) -> bool {
    raw.len() == DATE_LEN
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Parse a `YYYY-MM-DD` date. Surrounding whitespace is ignored.
///
/// # Examples
/// ```
/// use hotel_backend::inbound::date_codec::{format_date, parse_date};
///
/// let date = parse_date("2024-01-10").expect("valid date");
/// assert_eq!(format_date(date), "2024-01-10");
/// assert!(parse_date("10/01/2024").is_err());
/// ```
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let trimmed = raw.trim();
    if !has_iso_shape(trimmed) {
        return Err(DateError::Shape);
    }
    Ok(NaiveDate::parse_from_str(trimmed, DATE_FORMAT)?)
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
