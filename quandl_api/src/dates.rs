//! Conversion between calendar dates and the `yyyy-MM-dd` form the API uses.

use chrono::NaiveDate;

use crate::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders a date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `yyyy-MM-dd` string.
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}
