// tests/scoring.rs
//
// Aptitude schemes over hand-built tables.
//
use pretty_assertions::assert_eq;
use staff_search::rank::top_n;
use staff_search::scoring::{score, Scheme, COACHING_APTITUDES, MAX_COACHING, TOTAL_COACHING};
use staff_search::table::{Column, StaffTable, Value};

fn ints(v: &[i64]) -> Vec<Option<i64>> {
    v.iter().copied().map(Some).collect()
}

/// Two coaches: A is flat 10s, B is an attacking technician.
fn two_coaches() -> StaffTable {
    StaffTable::from_columns(vec![
        Column::text("Name", vec!["A".into(), "B".into()]),
        Column::int("Att", ints(&[10, 20])),
        Column::int("Def", ints(&[10, 5])),
        Column::int("Men", ints(&[10, 5])),
        Column::int("Tec", ints(&[10, 20])),
        Column::int("TCo", ints(&[10, 5])),
        Column::int("Det", ints(&[10, 10])),
        Column::int("Dis", ints(&[10, 10])),
        Column::int("Mot", ints(&[10, 10])),
    ])
}

#[test]
fn coaching_end_to_end() {
    let mut t = two_coaches();
    score(&mut t, Scheme::Coaching).unwrap();

    let a = t.record(0).unwrap();
    for col in COACHING_APTITUDES {
        assert_eq!(a.int(col), Some(150), "A {col}");
    }
    assert_eq!(a.int(MAX_COACHING), Some(150));
    assert_eq!(a.int(TOTAL_COACHING), Some(900));

    let b = t.record(1).unwrap();
    assert_eq!(b.int("Att-Tec"), Some(240));
    assert_eq!(b.int("Att-TCo"), Some(195));
    assert_eq!(b.int(MAX_COACHING), Some(240));

    let report = top_n(&t, MAX_COACHING, 2, &[MAX_COACHING.to_string()]).unwrap();
    assert_eq!(report.column("Name").unwrap(), vec![&Value::Text("B".into()), &Value::Text("A".into())]);
}

#[test]
fn max_and_total_agree_with_the_six_aptitudes() {
    let mut t = two_coaches();
    score(&mut t, Scheme::Coaching).unwrap();

    for r in t.records() {
        let six: Vec<i64> = COACHING_APTITUDES.iter().map(|c| r.int(c).unwrap()).collect();
        assert_eq!(r.int(MAX_COACHING), six.iter().copied().max());
        assert_eq!(r.int(TOTAL_COACHING), Some(six.iter().sum()));
    }
}

#[test]
fn rescoring_overwrites_instead_of_accumulating() {
    let mut t = two_coaches();
    score(&mut t, Scheme::Coaching).unwrap();
    let once = t.clone();
    score(&mut t, Scheme::Coaching).unwrap();

    assert_eq!(t, once);
    assert_eq!(t.headers().len(), 9 + 8);
}

#[test]
fn overall_sums_whatever_attributes_exist() {
    let mut t = two_coaches();
    score(&mut t, Scheme::Overall).unwrap();
    assert_eq!(t.ints("sum_all_attributes").unwrap(), &[Some(80), Some(85)]);
}

#[test]
fn single_formula_schemes() {
    let mut t = StaffTable::from_columns(vec![
        Column::text("Name", vec!["K".into()]),
        Column::int("GkD", ints(&[15])),
        Column::int("GkH", ints(&[14])),
        Column::int("GkS", ints(&[13])),
        Column::int("Fit", ints(&[12])),
        Column::int("Det", ints(&[11])),
        Column::int("Dis", ints(&[10])),
        Column::int("Mot", ints(&[9])),
        Column::int("Judge A", ints(&[8])),
        Column::int("Judge P", ints(&[7])),
        Column::int("Youth", ints(&[6])),
        Column::int("Man", ints(&[5])),
        Column::int("Tac Knw", ints(&[4])),
    ]);

    score(&mut t, Scheme::GoalkeeperCoaching).unwrap();
    score(&mut t, Scheme::FitnessCoaching).unwrap();
    score(&mut t, Scheme::HeadYouthDev).unwrap();
    score(&mut t, Scheme::HeadCoach).unwrap();

    let k = t.record(0).unwrap();
    assert_eq!(k.int("gk_coaching_aptitude"), Some(42));
    assert_eq!(k.int("fitness_coaching_aptitude"), Some(9 * 12 + 2 * 30));
    assert_eq!(k.int("head_yth_dev_aptitude"), Some(21));
    assert_eq!(k.int("head_coach_aptitude"), Some(5 + 9 + 8 + 7 + 4));
}

#[test]
fn missing_input_column_is_a_configuration_error() {
    let mut t = two_coaches();
    let before = t.clone();

    let err = score(&mut t, Scheme::GoalkeeperCoaching).unwrap_err();
    assert_eq!(err.scheme, "goalkeeper_coaching");
    assert_eq!(err.column, "GkD");
    // nothing was written
    assert_eq!(t, before);
}

#[test]
fn overall_needs_at_least_one_attribute() {
    let mut t = StaffTable::from_columns(vec![Column::text("Name", vec!["X".into()])]);
    assert!(score(&mut t, Scheme::Overall).is_err());
}

#[test]
fn missing_cells_give_missing_scores() {
    let mut t = StaffTable::from_columns(vec![
        Column::text("Name", vec!["A".into(), "B".into()]),
        Column::int("GkD", vec![Some(10), None]),
        Column::int("GkH", ints(&[10, 10])),
        Column::int("GkS", ints(&[10, 10])),
    ]);
    score(&mut t, Scheme::GoalkeeperCoaching).unwrap();
    assert_eq!(t.ints("gk_coaching_aptitude").unwrap(), &[Some(30), None]);
}
