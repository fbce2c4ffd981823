//! Display dates for the intake form.
//!
//! Dates are shown as `D mmm YYYY` with Spanish month abbreviations, e.g.
//! `5 mar 2024`. Parsing accepts that format (month in any case) and
//! falls back to ISO `YYYY-MM-DD` and `DD/MM/YYYY`.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Formats a date as `D mmm YYYY`, day not zero padded.
pub fn format_display_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Parses a display date, an ISO date or a `DD/MM/YYYY` date.
///
/// Returns `None` for anything else, including impossible calendar dates.
pub fn parse_display_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    parse_spanish(input)
        .or_else(|| NaiveDate::parse_from_str(input, "%Y-%m-%d").ok())
        .or_else(|| NaiveDate::parse_from_str(input, "%d/%m/%Y").ok())
}

fn parse_spanish(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split_whitespace();
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    let month = month.to_lowercase();
    let month = MONTHS.iter().position(|m| *m == month)? as u32 + 1;
    let year: i32 = year.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
