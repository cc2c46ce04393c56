//! Age-based purge: drop every entry dated in the month N months back.

use crate::db::predicate::{Field, Predicate};
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Month string to purge for `today`, computed once per purge request.
pub fn cutoff_month(today: NaiveDate, months: u32, month_fmt: &str) -> String {
    date::months_ago_month(today, months, month_fmt)
}

/// Remove entries whose `date` contains `month`; returns the removed count.
/// Only that one month is matched, not everything before it.
pub fn purge_month(conn: &Connection, month: &str) -> AppResult<usize> {
    if month.is_empty() {
        // an empty needle would match every entry
        return Ok(0);
    }
    let predicate = Predicate::new().contains(Field::Date, month);
    queries::delete_where(conn, &predicate)
}
