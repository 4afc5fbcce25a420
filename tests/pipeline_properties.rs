use proptest::prelude::*;

use table_processing::processing::{
    filter_records, page_count, process_table, sort_records, FilterCriteria, PageDescriptor,
    SortDirective, TableState,
};
use table_processing::types::{row, Row, Value};

prop_compose! {
    fn arb_value()(
        choice in 0u8..5,
        i in -50i64..50,
        s in "[a-eA-E]{0,4}",
        b in any::<bool>(),
    ) -> Value {
        match choice {
            0 => Value::Null,
            1 => Value::Int64(i),
            2 => Value::Float64(i as f64 / 4.0),
            3 => Value::Bool(b),
            _ => Value::Utf8(s),
        }
    }
}

prop_compose! {
    fn arb_row()(
        id in any::<u32>(),
        name in proptest::option::of(arb_value()),
        score in arb_value(),
    ) -> Row {
        let mut r = row([("id", Value::Int64(i64::from(id))), ("score", score)]);
        if let Some(name) = name {
            r.insert("name".to_string(), name);
        }
        r
    }
}

prop_compose! {
    fn arb_criteria()(
        name in proptest::option::of(arb_value()),
        score in proptest::option::of(arb_value()),
    ) -> FilterCriteria {
        let mut c = FilterCriteria::new();
        if let Some(v) = name {
            c.set("name", v);
        }
        if let Some(v) = score {
            c.set("score", v);
        }
        c
    }
}

fn arb_rows(max: usize) -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(arb_row(), 0..max)
}

fn directive(field: &str, descending: bool) -> SortDirective {
    if descending {
        SortDirective::descending(field)
    } else {
        SortDirective::ascending(field)
    }
}

proptest! {
    #[test]
    fn filtering_never_grows_the_collection(rows in arb_rows(40), criteria in arb_criteria()) {
        prop_assert!(filter_records(&rows, &criteria).len() <= rows.len());
    }

    #[test]
    fn empty_criteria_are_identity(rows in arb_rows(40)) {
        let criteria = FilterCriteria::new().with("name", "").with("score", Value::Null);
        let out: Vec<Row> = filter_records(&rows, &criteria).into_iter().cloned().collect();
        prop_assert_eq!(out, rows);
    }

    #[test]
    fn pipeline_is_deterministic(
        rows in arb_rows(40),
        criteria in arb_criteria(),
        index in 0usize..6,
        size in 1usize..12,
        descending in any::<bool>(),
    ) {
        let sort = directive(if descending { "score" } else { "name" }, descending);
        let state = TableState::new(criteria, sort, PageDescriptor::new(index, size).unwrap());
        prop_assert_eq!(process_table(&rows, &state), process_table(&rows, &state));
    }

    #[test]
    fn page_count_is_ceiling(n in 0usize..10_000, size in 1usize..500) {
        let pages = page_count(n, size);
        prop_assert_eq!(pages, n.div_ceil(size));
        prop_assert_eq!(pages == 0, n == 0);
    }

    #[test]
    fn view_metadata_is_consistent(
        rows in arb_rows(60),
        criteria in arb_criteria(),
        index in 0usize..8,
        size in 1usize..15,
    ) {
        let page = PageDescriptor::new(index, size).unwrap();
        let state = TableState::new(criteria.clone(), SortDirective::none(), page);
        let view = process_table(&rows, &state);
        prop_assert_eq!(view.total_count, filter_records(&rows, &criteria).len());
        prop_assert!(view.rows.len() <= size);
        prop_assert_eq!(view.has_previous_page, index > 0);
        prop_assert_eq!(view.has_next_page, (index + 1) * size < view.total_count);
    }

    #[test]
    fn descending_is_reversed_ascending_without_ties(
        ids in prop::collection::hash_set(-1000i64..1000, 0..40),
    ) {
        let base: Vec<Row> = ids.iter().map(|i| row([("k", Value::Int64(*i))])).collect();

        let mut asc = base.clone();
        sort_records(&mut asc, &SortDirective::ascending("k"));
        asc.reverse();

        let mut desc = base.clone();
        sort_records(&mut desc, &SortDirective::descending("k"));

        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn large_integers_sort_exactly(
        offsets in prop::collection::vec(0i64..64, 0..40),
    ) {
        let base = 1i64 << 53;
        let mut rows: Vec<Row> = offsets
            .iter()
            .map(|o| row([("k", Value::Int64(base + o))]))
            .collect();
        sort_records(&mut rows, &SortDirective::ascending("k"));

        let keys: Vec<i64> = rows
            .iter()
            .filter_map(|r| match r.get("k") {
                Some(Value::Int64(k)) => Some(*k),
                _ => None,
            })
            .collect();
        let mut expected: Vec<i64> = offsets.iter().map(|o| base + o).collect();
        expected.sort();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn missing_sort_field_always_trails(rows in arb_rows(40), descending in any::<bool>()) {
        let mut sorted = rows.clone();
        sort_records(&mut sorted, &directive("name", descending));

        let present: Vec<bool> = sorted
            .iter()
            .map(|r| r.get("name").is_some_and(|v| !v.is_null()))
            .collect();
        let first_missing = present.iter().position(|p| !p).unwrap_or(present.len());
        prop_assert!(present[first_missing..].iter().all(|p| !p));
    }
}
