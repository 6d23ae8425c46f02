//! Display strings for partial dates and date ranges.

use chrono::Month;

use crate::profile::raw::DateInfo;

pub const PRESENT: &str = "Present";

/// Year of a date, if it has a usable one. A zero year counts as missing.
fn year_of(date: Option<&DateInfo>) -> Option<i32> {
    date.and_then(|d| d.year).filter(|y| *y != 0)
}

/// Abbreviated English month name for 1..=12, `None` otherwise.
fn short_month(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    let month = Month::try_from(month).ok()?;
    Some(&month.name()[..3])
}

/// Formats a partial date for display.
///
/// - missing date or missing year → `"Present"`
/// - month in 1..=12 → `"Mar 2020"`
/// - otherwise → `"2020"`
///
/// The day is never shown.
pub fn format_date(date: Option<&DateInfo>) -> String {
    let Some(year) = year_of(date) else {
        return PRESENT.to_string();
    };
    match date.and_then(|d| d.month).and_then(short_month) {
        Some(month) => format!("{month} {year}"),
        None => year.to_string(),
    }
}

/// `"<start> - <end>"`, with `" · <location>"` appended for a non-empty location.
pub fn position_date_range(
    start: Option<&DateInfo>,
    end: Option<&DateInfo>,
    location: Option<&str>,
) -> String {
    let mut range = format!("{} - {}", format_date(start), format_date(end));
    if let Some(location) = location.filter(|l| !l.is_empty()) {
        range.push_str(" · ");
        range.push_str(location);
    }
    range
}

/// Year-only range for education entries. `None` when neither side has a year.
pub fn education_date_range(start: Option<&DateInfo>, end: Option<&DateInfo>) -> Option<String> {
    let start_year = year_of(start);
    let end_year = year_of(end);
    if start_year.is_none() && end_year.is_none() {
        return None;
    }
    let start = start_year.map(|y| y.to_string()).unwrap_or_default();
    let end = end_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| PRESENT.to_string());
    Some(format!("{start} - {end}"))
}
