//! Date strings as the register stores them.
//!
//! Entries keep `date` as formatted text (`15/03/2024` by default), so every
//! helper here produces strings in the configured chrono format instead of
//! structured dates.

use chrono::{Local, Months, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

/// `(today, yesterday)` formatted for the daily listing.
pub fn today_and_yesterday(today: NaiveDate, fmt: &str) -> (String, String) {
    let yesterday = today.pred_opt().unwrap_or(today);
    (format_date(today, fmt), format_date(yesterday, fmt))
}

/// Month string `months` months before `today`, e.g. `04/2026` for
/// 18/10/2026 and 6 months. Day overflow clamps to the month's last day.
pub fn months_ago_month(today: NaiveDate, months: u32, month_fmt: &str) -> String {
    let past = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN);
    past.format(month_fmt).to_string()
}

/// Parse a user supplied date in the register format.
pub fn parse_date(s: &str, fmt: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, fmt).ok()
}

/// Validate a user supplied month (`03/2024`) by parsing it as the 1st of that month.
pub fn is_valid_month(s: &str, month_fmt: &str) -> bool {
    NaiveDate::parse_from_str(&format!("01 {s}"), &format!("%d {month_fmt}")).is_ok()
}
