//! Clock display strings.
//!
//! The tables are fixed English abbreviations; no locale support.

use crate::civil::CivilTime;

pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a civil time as `("HH:MM:SS", "<Wkd>, DD <Mon> YYYY")`.
///
/// If `weekday` is outside 0..=6 or `month` outside 1..=12 the date string
/// is empty. The time string is always produced.
pub fn format_clock(civil: &CivilTime) -> (String, String) {
    let time = format!("{:02}:{:02}:{:02}", civil.hour, civil.minute, civil.second);
    let date = format_date(civil).unwrap_or_default();
    (time, date)
}

/// `"HH:MM"`, as shown on the matrix face.
pub fn format_hour_minute(civil: &CivilTime) -> String {
    format!("{:02}:{:02}", civil.hour, civil.minute)
}

fn format_date(civil: &CivilTime) -> Option<String> {
    let weekday = WEEKDAY_ABBREVIATIONS.get(usize::try_from(civil.weekday).ok()?)?;
    let month_index = usize::try_from(civil.month).ok()?.checked_sub(1)?;
    let month = MONTH_ABBREVIATIONS.get(month_index)?;
    Some(format!(
        "{}, {:02} {} {}",
        weekday, civil.day, month, civil.year
    ))
}
