use chrono::{Datelike, Days, NaiveDate};

/// Fixed weekday header row, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Get the month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Format a date in YYYY-MM-DD form
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Format a month/year pair for panel headers and month-picker triggers
/// (e.g. "February 2024")
pub fn format_month_year(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// First day of a calendar month. Falls back to the epoch for an invalid
/// month number, which callers never pass.
pub fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// Last day of a calendar month (accounting for leap years).
pub fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next) = next_month(year, month);
    first_of_month(next_year, next)
        .pred_opt()
        .unwrap_or_else(|| first_of_month(year, month))
}

/// Previous month with January -> December rollover.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Next month with December -> January rollover.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Start of the week (Sunday) containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// End of the week (Saturday) containing `date`.
fn week_end(date: NaiveDate) -> NaiveDate {
    date + Days::new(u64::from(6 - date.weekday().num_days_from_sunday()))
}

/// Generate the calendar grid for the month containing `anchor`.
///
/// Covers full weeks from the Sunday on or before the 1st through the
/// Saturday on or after the last day, so the result includes the leading
/// and trailing days of adjacent months. Length is always a multiple of 7
/// and at least 28.
pub fn month_matrix(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(first_of_month(anchor.year(), anchor.month()));
    let end = week_end(last_of_month(anchor.year(), anchor.month()));
    let span = (end - start).num_days() + 1;
    start.iter_days().take(span as usize).collect()
}

/// The 12 month-first dates of `year`, January through December.
pub fn year_months(year: i32) -> Vec<NaiveDate> {
    (1..=12).map(|month| first_of_month(year, month)).collect()
}

/// Current date from the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use chrono::Datelike;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn today_comes_from_the_browser_clock() {
        let now = today();
        assert!(now.year() >= 2024);
        assert!((1..=12).contains(&now.month()));
        assert!((1..=31).contains(&now.day()));
    }
}
