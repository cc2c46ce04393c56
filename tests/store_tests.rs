mod common;
use common::{colleague, ids, setup_test_db, visitor};

use rsignin::core::register::Register;
use rsignin::db::predicate::{Field, Predicate};
use rsignin::db::queries;
use rsignin::errors::AppError;
use rsignin::models::{RegisterType, ReturnStatus};

#[test]
fn test_find_by_type_is_sorted_by_id() {
    let mut reg = Register::in_memory().expect("open register");

    for e in [
        colleague(30, "Carla", "Rossi", "C3", "02/01/2024"),
        colleague(10, "Aldo", "Bianchi", "C1", "01/01/2024"),
        visitor(15, "Vera", "Neri", "01/01/2024"),
        colleague(20, "Bruno", "Verdi", "C2", "01/01/2024"),
    ] {
        reg.add(&e).expect("insert");
    }

    let colleagues =
        queries::find_by(reg.conn(), &Predicate::register(RegisterType::Colleagues)).unwrap();
    assert_eq!(ids(&colleagues), vec![10, 20, 30]);

    let visitors = reg.all(RegisterType::Visitors).unwrap();
    assert_eq!(ids(&visitors), vec![15]);
}

#[test]
fn test_insert_then_find_by_date_and_type() {
    let mut reg = Register::in_memory().unwrap();
    let e = colleague(1, "Jo", "Smith", "C1", "15/03/2024");
    reg.add(&e).unwrap();
    reg.add(&colleague(2, "Al", "Other", "C2", "16/03/2024")).unwrap();
    reg.add(&visitor(3, "Vi", "Same", "15/03/2024")).unwrap();

    let p = Predicate::register(RegisterType::Colleagues).eq(Field::Date, "15/03/2024");
    let found = queries::find_by(reg.conn(), &p).unwrap();
    assert_eq!(found, vec![e]);
}

#[test]
fn test_entries_survive_reopen() {
    let db_path = setup_test_db("store_reopen");
    {
        let mut reg = Register::open(&db_path).unwrap();
        reg.add(&colleague(5, "Jo", "Smith", "C1", "15/03/2024"))
            .unwrap();
    }

    let reg = Register::open(&db_path).unwrap();
    let got = reg.get(5).unwrap().expect("entry persisted");
    assert_eq!(got.last_name, "Smith");
    assert_eq!(got.returned, Some(ReturnStatus::NotReturned));
}

#[test]
fn test_duplicate_id_is_an_error() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "Jo", "Smith", "C1", "15/03/2024"))
        .unwrap();

    let err = reg
        .add(&colleague(1, "Al", "Other", "C2", "15/03/2024"))
        .unwrap_err();
    assert!(matches!(err, AppError::Db(_)));
}

#[test]
fn test_delete_by_id_is_idempotent() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "Jo", "Smith", "C1", "15/03/2024"))
        .unwrap();
    reg.add(&colleague(2, "Al", "Other", "C2", "15/03/2024"))
        .unwrap();

    assert!(reg.delete(1).unwrap());
    assert!(reg.get(1).unwrap().is_none());
    assert!(!reg.delete(1).unwrap());

    assert_eq!(ids(&reg.all(RegisterType::Colleagues).unwrap()), vec![2]);
}

#[test]
fn test_delete_all_empties_every_register() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "Jo", "Smith", "C1", "15/03/2024"))
        .unwrap();
    reg.add(&visitor(2, "Vi", "Same", "15/03/2024")).unwrap();

    assert_eq!(reg.clear().unwrap(), 2);
    assert!(reg.all(RegisterType::Colleagues).unwrap().is_empty());
    assert!(reg.all(RegisterType::Visitors).unwrap().is_empty());
}

#[test]
fn test_update_replaces_whole_record() {
    let mut reg = Register::in_memory().unwrap();
    let mut original = colleague(1, "Jo", "Smith", "C1", "15/03/2024");
    original.note = Some("left umbrella".into());
    reg.add(&original).unwrap();

    // the new body has no note: replace must drop it, not merge
    let body = colleague(1, "Joe", "Smith", "C9", "15/03/2024")
        .with_status(Some(ReturnStatus::Returned), None);
    assert!(reg.replace(&body).unwrap());

    let stored = reg.get(1).unwrap().unwrap();
    assert_eq!(stored, body);
    assert_eq!(stored.note, None);
}

#[test]
fn test_update_missing_id_is_a_noop() {
    let mut reg = Register::in_memory().unwrap();
    let ghost = colleague(42, "No", "Body", "", "15/03/2024");
    assert!(!reg.replace(&ghost).unwrap());
    assert!(reg.get(42).unwrap().is_none());
}

#[test]
fn test_substring_match_is_literal() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "Jo", "100%", "", "15/03/2024")).unwrap();
    reg.add(&colleague(2, "Jo", "1000", "", "15/03/2024")).unwrap();
    reg.add(&colleague(3, "jo", "smith", "", "15/03/2024")).unwrap();

    let percent = Predicate::new().contains(Field::LastName, "0%");
    assert_eq!(ids(&queries::find_by(reg.conn(), &percent).unwrap()), vec![1]);

    // case-sensitive, like a plain substring test
    let upper = Predicate::new().contains(Field::FirstName, "Jo");
    assert_eq!(ids(&queries::find_by(reg.conn(), &upper).unwrap()), vec![1, 2]);
}

#[test]
fn test_delete_where_reports_count() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "A", "A", "", "01/01/2024")).unwrap();
    reg.add(&colleague(2, "B", "B", "", "02/01/2024")).unwrap();
    reg.add(&colleague(3, "C", "C", "", "01/02/2024")).unwrap();

    let p = Predicate::new().contains(Field::Date, "01/2024");
    // 01/02/2024 is February: only the first two match
    let removed = queries::delete_where(reg.conn(), &p).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(ids(&reg.all(RegisterType::Colleagues).unwrap()), vec![3]);
}

#[test]
fn test_next_id_is_monotonic() {
    let mut reg = Register::in_memory().unwrap();
    let first = reg.next_id().unwrap();
    reg.add(&colleague(first, "A", "A", "", "01/01/2024")).unwrap();

    // a stored id in the future forces max + 1
    let future = first + 10_000_000;
    reg.add(&colleague(future, "B", "B", "", "01/01/2024")).unwrap();
    assert_eq!(reg.next_id().unwrap(), future + 1);
}

#[test]
fn test_predicate_sql_shape() {
    let p = Predicate::register(RegisterType::Visitors)
        .contains(Field::FirstName, "Jo")
        .any_of(Field::Date, ["01/01/2024", "31/12/2023"]);

    let (sql, params) = p.to_sql();
    assert_eq!(
        sql,
        "type = ? AND instr(first_name, ?) > 0 AND date IN (?, ?)"
    );
    assert_eq!(params, vec!["visitors", "Jo", "01/01/2024", "31/12/2023"]);

    let (all, none) = Predicate::new().to_sql();
    assert_eq!(all, "1 = 1");
    assert!(none.is_empty());
}
