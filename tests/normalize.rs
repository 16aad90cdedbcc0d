// tests/normalize.rs
//
// Raw export → typed StaffTable.
//
use std::path::PathBuf;

use indoc::indoc;
use pretty_assertions::assert_eq;
use staff_search::attributes::ATTRIBUTES;
use staff_search::export::{load_export, parse_export};
use staff_search::normalize::normalize;
use staff_search::table::{ColumnData, StaffTable};

fn fixture_table() -> StaffTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/staff.rtf");
    normalize(load_export(&path).unwrap()).unwrap()
}

fn table(text: &str) -> StaffTable {
    normalize(parse_export(text).unwrap()).unwrap()
}

#[test]
fn placeholder_column_is_dropped() {
    let t = fixture_table();
    assert_eq!(t.headers()[0], "Name");
    assert_eq!(t.headers().len(), 21);
}

#[test]
fn rows_without_attributes_are_dropped() {
    let t = fixture_table();
    assert_eq!(t.len(), 3);
    assert!(t.records().all(|r| r.name() != "Empty Row"));
}

#[test]
fn vocabulary_columns_are_integers_and_the_rest_text() {
    let t = fixture_table();
    for col in t.columns() {
        let is_attr = ATTRIBUTES.contains(&col.name.as_str());
        match &col.data {
            ColumnData::Int(_) => assert!(is_attr, "{} should be text", col.name),
            ColumnData::Text(_) => assert!(!is_attr, "{} should be integer", col.name),
        }
    }

    let costa = t.record(1).unwrap();
    assert_eq!(costa.name(), "Bruno Costa");
    assert_eq!(costa.int("Att"), Some(20));
    assert_eq!(costa.int("Judge A"), Some(15));
    assert_eq!(costa.text("Preferred Formation"), Some("4-3-3 DM Wide"));
}

#[test]
fn every_surviving_row_has_some_attribute() {
    let t = fixture_table();
    let attrs = t.attribute_columns();
    for r in t.records() {
        assert!(attrs.iter().any(|a| r.int(a).is_some()), "row {} is empty", r.index());
    }
}

#[test]
fn out_of_range_values_are_kept() {
    let t = table(indoc! {"
        | Name | Att | Det |
        | A    | -3  | 45  |
    "});
    let a = t.record(0).unwrap();
    assert_eq!(a.int("Att"), Some(-3));
    assert_eq!(a.int("Det"), Some(45));
}

#[test]
fn partly_blank_rows_survive_with_missing_cells() {
    let t = table(indoc! {"
        | Name | Att | Det | Club |
        | A    |     | 12  | Lech |
        | B    |     |     | Lech |
    "});
    assert_eq!(t.len(), 1);
    assert_eq!(t.record(0).unwrap().int("Att"), None);
    assert_eq!(t.record(0).unwrap().int("Det"), Some(12));
}

#[test]
fn non_integer_attribute_is_an_error() {
    let raw = parse_export(indoc! {"
        | Name | Att | Det |
        | A    | 10  | 12  |
        | B    | 9   | x1  |
    "})
    .unwrap();

    let err = normalize(raw).unwrap_err();
    assert_eq!(err.column, "Det");
    assert_eq!(err.row, 2);
    assert_eq!(err.value, "x1");
}

#[test]
fn table_without_vocabulary_keeps_every_row() {
    let t = table(indoc! {"
        | Name | Club   | Nation |
        | A    | Lech   | POL    |
        | B    |        | POL    |
    "});
    assert_eq!(t.len(), 2);
    assert!(t.attribute_columns().is_empty());
}
