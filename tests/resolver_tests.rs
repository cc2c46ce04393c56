mod common;
use common::{colleague, ids, visitor};

use rsignin::core::register::Register;
use rsignin::core::resolver::{FilterRequest, FilterShape, resolve};
use rsignin::models::RegisterType::{Colleagues, Visitors};

/// Inserted out of id order on purpose.
fn sample_register() -> Register {
    let mut reg = Register::in_memory().expect("open register");
    for e in [
        colleague(4, "Mary", "Jones", "C3", "15/03/2024"),
        colleague(1, "Jo", "Smith", "C1", "01/01/2024"),
        colleague(3, "Joanna", "Brown", "C1", "15/03/2024"),
        colleague(2, "John", "Smithers", "C2", "01/01/2024"),
        visitor(10, "Jo", "Guest", "01/01/2024"),
        visitor(11, "Anne", "Smith", "20/03/2024"),
    ] {
        reg.add(&e).expect("insert");
    }
    reg
}

fn run(reg: &Register, req: FilterRequest) -> Option<Vec<i64>> {
    resolve(reg.conn(), &req).expect("query").map(|docs| ids(&docs))
}

#[test]
fn test_date_only() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues).date("01/01/2024");
    assert!(matches!(req.shape(), FilterShape::Date { .. }));
    assert_eq!(run(&reg, req), Some(vec![1, 2]));
}

#[test]
fn test_last_name_only() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues).last_name("Smith");
    assert!(matches!(req.shape(), FilterShape::LastName { .. }));
    assert_eq!(run(&reg, req), Some(vec![1, 2]));
}

#[test]
fn test_first_name_only() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues).first_name("Jo");
    assert!(matches!(req.shape(), FilterShape::FirstName { .. }));
    assert_eq!(run(&reg, req), Some(vec![1, 2, 3]));
}

#[test]
fn test_last_name_on_date() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues)
        .last_name("Brown")
        .date("15/03/2024");
    assert!(matches!(req.shape(), FilterShape::LastNameOnDate { .. }));
    assert_eq!(run(&reg, req), Some(vec![3]));
}

#[test]
fn test_last_name_in_month() {
    let reg = sample_register();

    let req = FilterRequest::new(Colleagues).last_name("Jones").month("03/2024");
    assert!(matches!(req.shape(), FilterShape::LastNameInMonth { .. }));
    assert_eq!(run(&reg, req), Some(vec![4]));

    // the only March "Smith" is a visitor
    let req = FilterRequest::new(Colleagues).last_name("Smith").month("03/2024");
    assert_eq!(run(&reg, req), Some(vec![]));
}

#[test]
fn test_first_name_on_date() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues)
        .first_name("Jo")
        .date("01/01/2024");
    assert!(matches!(req.shape(), FilterShape::FirstNameOnDate { .. }));
    // visitor 10 shares name and date but not the register
    assert_eq!(run(&reg, req), Some(vec![1, 2]));
}

#[test]
fn test_first_name_in_month() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues).first_name("Jo").month("03/2024");
    assert!(matches!(req.shape(), FilterShape::FirstNameInMonth { .. }));
    assert_eq!(run(&reg, req), Some(vec![3]));
}

#[test]
fn test_full_name() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues)
        .first_name("Jo")
        .last_name("Smith");
    assert!(matches!(req.shape(), FilterShape::FullName { .. }));
    assert_eq!(run(&reg, req), Some(vec![1, 2]));
}

#[test]
fn test_full_name_on_date() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues)
        .first_name("Joanna")
        .last_name("Brown")
        .date("15/03/2024");
    assert!(matches!(req.shape(), FilterShape::FullNameOnDate { .. }));
    assert_eq!(run(&reg, req), Some(vec![3]));
}

#[test]
fn test_full_name_in_month() {
    let reg = sample_register();

    let req = FilterRequest::new(Colleagues)
        .first_name("Jo")
        .last_name("Smith")
        .month("01/2024");
    assert!(matches!(req.shape(), FilterShape::FullNameInMonth { .. }));
    assert_eq!(run(&reg, req), Some(vec![1, 2]));

    let req = FilterRequest::new(Colleagues)
        .first_name("Jo")
        .last_name("Smith")
        .month("03/2024");
    assert_eq!(run(&reg, req), Some(vec![]));
}

#[test]
fn test_card_only() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues).card("C1");
    assert!(matches!(req.shape(), FilterShape::Card { .. }));
    assert_eq!(run(&reg, req), Some(vec![1, 3]));

    // exact match, not substring
    let req = FilterRequest::new(Colleagues).card("C");
    assert_eq!(run(&reg, req), Some(vec![]));
}

#[test]
fn test_card_on_date() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues).card("C1").date("15/03/2024");
    assert!(matches!(req.shape(), FilterShape::CardOnDate { .. }));
    assert_eq!(run(&reg, req), Some(vec![3]));
}

#[test]
fn test_card_in_month() {
    let reg = sample_register();
    let req = FilterRequest::new(Colleagues).card("C1").month("01/2024");
    assert!(matches!(req.shape(), FilterShape::CardInMonth { .. }));
    assert_eq!(run(&reg, req), Some(vec![1]));
}

#[test]
fn test_month_only() {
    let reg = sample_register();

    let req = FilterRequest::new(Colleagues).month("03/2024");
    assert!(matches!(req.shape(), FilterShape::Month { .. }));
    assert_eq!(run(&reg, req), Some(vec![3, 4]));

    let req = FilterRequest::new(Colleagues).month("04/2024");
    assert_eq!(run(&reg, req), Some(vec![]));

    let req = FilterRequest::new(Visitors).month("03/2024");
    assert_eq!(run(&reg, req), Some(vec![11]));
}

#[test]
fn test_month_matches_as_date_substring() {
    let mut reg = Register::in_memory().unwrap();
    reg.add(&colleague(1, "A", "B", "", "15/03/2024")).unwrap();

    let march = FilterRequest::new(Colleagues).month("03/2024");
    let april = FilterRequest::new(Colleagues).month("04/2024");
    assert_eq!(run(&reg, march), Some(vec![1]));
    assert_eq!(run(&reg, april), Some(vec![]));
}

#[test]
fn test_visitor_name_search() {
    let reg = sample_register();
    let req = FilterRequest::new(Visitors).first_name("Jo");
    assert_eq!(run(&reg, req), Some(vec![10]));
}

#[test]
fn test_unsupported_combinations_yield_no_result_set() {
    let reg = sample_register();

    let unsupported = [
        // date and month together
        FilterRequest::new(Colleagues)
            .date("01/01/2024")
            .month("01/2024"),
        FilterRequest::new(Colleagues)
            .first_name("Jo")
            .date("01/01/2024")
            .month("01/2024"),
        // card with a name
        FilterRequest::new(Colleagues).card("C1").first_name("Jo"),
        FilterRequest::new(Colleagues).card("C1").last_name("Smith"),
        // card on the visitors register
        FilterRequest::new(Visitors).card("C1"),
        // nothing at all
        FilterRequest::new(Colleagues),
    ];

    for req in unsupported {
        assert_eq!(req.shape(), FilterShape::Unsupported, "{req:?}");
        assert!(!req.shape().is_supported());
        assert_eq!(run(&reg, req), None);
    }
}

#[test]
fn test_empty_strings_count_as_absent() {
    let req = FilterRequest::new(Colleagues)
        .date("")
        .month("")
        .first_name("Jo");
    assert!(matches!(req.shape(), FilterShape::FirstName { .. }));
}

#[test]
fn test_filter_request_from_form_json() {
    let json = r#"{
        "searchDate": "//",
        "month": "03/2024",
        "firstName": "Jo",
        "lastName": "",
        "card": "",
        "type": "colleagues"
    }"#;
    let req: FilterRequest = serde_json::from_str(json).expect("parse filter");
    assert_eq!(
        req.shape(),
        FilterShape::FirstNameInMonth {
            first: "Jo".into(),
            month: "03/2024".into()
        }
    );

    // absent fields default to their sentinels
    let req: FilterRequest =
        serde_json::from_str(r#"{"type":"visitors","lastName":"Smith"}"#).unwrap();
    assert_eq!(req.search_date, "//");
    assert_eq!(req.month, "/");
    assert!(matches!(req.shape(), FilterShape::LastName { .. }));
}
