mod common;
use common::{colleague, ids, visitor};

use chrono::NaiveDate;
use rsignin::core::purge::{cutoff_month, purge_month};
use rsignin::core::register::Register;
use rsignin::models::RegisterType;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_cutoff_month_six_months_back() {
    assert_eq!(cutoff_month(day(2026, 10, 18), 6, "%m/%Y"), "04/2026");
    // crosses the year boundary
    assert_eq!(cutoff_month(day(2026, 3, 1), 6, "%m/%Y"), "09/2025");
}

#[test]
fn test_cutoff_month_clamps_day() {
    // 31 August minus 6 months has no 31 February
    assert_eq!(cutoff_month(day(2026, 8, 31), 6, "%m/%Y"), "02/2026");
}

#[test]
fn test_purge_removes_only_the_target_month() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "A", "A", "C1", "15/03/2024")).unwrap();
    reg.add(&visitor(2, "B", "B", "02/03/2024")).unwrap();
    // older than the target month: kept
    reg.add(&colleague(3, "C", "C", "C2", "28/02/2024")).unwrap();
    reg.add(&colleague(4, "D", "D", "C3", "01/04/2024")).unwrap();

    assert_eq!(reg.purge_month("03/2024").unwrap(), 2);

    assert_eq!(ids(&reg.all(RegisterType::Colleagues).unwrap()), vec![3, 4]);
    assert!(reg.all(RegisterType::Visitors).unwrap().is_empty());
}

#[test]
fn test_purge_without_matches_reports_zero() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "A", "A", "C1", "15/03/2024")).unwrap();

    assert_eq!(reg.purge_month("04/2024").unwrap(), 0);
    assert_eq!(ids(&reg.all(RegisterType::Colleagues).unwrap()), vec![1]);
}

#[test]
fn test_purge_empty_month_is_a_noop() {
    let reg = Register::in_memory().unwrap();
    let mut other = Register::in_memory().unwrap();
    other.add(&colleague(1, "A", "A", "C1", "15/03/2024")).unwrap();

    assert_eq!(purge_month(reg.conn(), "").unwrap(), 0);
    assert_eq!(purge_month(other.conn(), "").unwrap(), 0);
    assert_eq!(other.all(RegisterType::Colleagues).unwrap().len(), 1);
}
