use table_processing::processing::{
    process_table, FilterCriteria, LoadState, PageDescriptor, PageRange, SortDirective, TableState,
};
use table_processing::types::{row, Row, Value};

fn numbered(n: i64) -> Vec<Row> {
    (1..=n).map(|i| row([("id", Value::from(i))])).collect()
}

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter()
        .map(|r| match r.get("id") {
            Some(Value::Int64(v)) => *v,
            _ => -1,
        })
        .collect()
}

#[test]
fn sort_by_name_ascending_single_page() {
    let records = vec![
        row([("id", Value::from(1)), ("name", Value::from("Bob"))]),
        row([("id", Value::from(2)), ("name", Value::from("Alice"))]),
    ];
    let state = TableState::new(
        FilterCriteria::new(),
        SortDirective::ascending("name"),
        PageDescriptor::new(0, 10).unwrap(),
    );

    let view = process_table(&records, &state);
    assert_eq!(ids(&view.rows), vec![2, 1]);
    assert_eq!(view.total_count, 2);
    assert_eq!(view.page_count, 1);
    assert!(!view.has_next_page);
    assert!(!view.has_previous_page);
    assert_eq!(view.current_page_range, PageRange { start: 1, end: 2 });

    // Input untouched.
    assert_eq!(ids(&records), vec![1, 2]);
}

#[test]
fn third_page_of_twenty_five_records() {
    let records = numbered(25);
    let state = TableState {
        page: PageDescriptor::new(2, 10).unwrap(),
        ..Default::default()
    };

    let view = process_table(&records, &state);
    assert_eq!(ids(&view.rows), vec![21, 22, 23, 24, 25]);
    assert_eq!(view.total_count, 25);
    assert_eq!(view.page_count, 3);
    assert_eq!(view.current_page_range, PageRange { start: 21, end: 25 });
    assert!(!view.has_next_page);
    assert!(view.has_previous_page);
}

#[test]
fn filter_with_no_match_is_empty_when_not_loading() {
    let records = vec![
        row([("id", Value::from(1)), ("name", Value::from("Bob"))]),
        row([("id", Value::from(2)), ("name", Value::from("Alice"))]),
    ];
    let state = TableState {
        filter: FilterCriteria::new().with("name", "zzz"),
        ..Default::default()
    };

    let view = process_table(&records, &state);
    assert_eq!(view.total_count, 0);
    assert_eq!(view.page_count, 0);
    assert!(view.rows.is_empty());
    assert!(view.is_empty(&LoadState::<String>::Ready));
    assert!(!view.is_empty(&LoadState::<String>::Loading));
    assert!(!view.is_empty(&LoadState::Failed("timeout".to_string())));
}

#[test]
fn page_past_the_end_returns_nothing() {
    let records = numbered(3);
    let state = TableState {
        page: PageDescriptor::new(5, 10).unwrap(),
        ..Default::default()
    };

    let view = process_table(&records, &state);
    assert!(view.rows.is_empty());
    assert_eq!(view.total_count, 3);
    assert_eq!(view.page_count, 1);
    assert!(!view.has_next_page);
    assert!(view.has_previous_page);
}

#[test]
fn missing_sort_values_trail_in_both_directions() {
    let records = vec![
        row([("id", Value::from(1)), ("score", Value::from(5))]),
        row([("id", Value::from(2))]),
        row([("id", Value::from(3)), ("score", Value::from(9.5))]),
        row([("id", Value::from(4)), ("score", Value::Null)]),
        row([("id", Value::from(5)), ("score", Value::from(-1))]),
    ];

    let asc = TableState {
        sort: SortDirective::ascending("score"),
        ..Default::default()
    };
    assert_eq!(ids(&process_table(&records, &asc).rows), vec![5, 1, 3, 2, 4]);

    let desc = TableState {
        sort: SortDirective::descending("score"),
        ..Default::default()
    };
    assert_eq!(ids(&process_table(&records, &desc).rows), vec![3, 1, 5, 2, 4]);
}

#[test]
fn state_from_json_drives_the_pipeline() {
    let records: Vec<Row> = ["Ada", "alan", "Grace", "Barbara"]
        .iter()
        .enumerate()
        .map(|(i, name)| row([("id", Value::from(i as i64 + 1)), ("name", Value::from(*name))]))
        .collect();
    let json = r#"{
        "filter": {"name": "A"},
        "sort": {"field": "name", "direction": "desc"},
        "page": {"index": 0, "size": 2}
    }"#;
    let state = TableState::from_json_str(json).unwrap();

    let view = process_table(&records, &state);
    // All four names contain an "a"; descending: Grace, Barbara, alan, Ada.
    assert_eq!(view.total_count, 4);
    assert_eq!(ids(&view.rows), vec![3, 4]);
    assert!(view.has_next_page);
}
