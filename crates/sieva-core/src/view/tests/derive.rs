use crate::{
    record::{Record, RecordId},
    test_fixtures::{careers_schema, job, product, products_schema, scenario_jobs},
    types::Timestamp,
    value::Value,
    view::{Direction, SortSpec, ViewError, ViewState, derive},
};

#[test]
fn empty_state_returns_all_in_default_order() {
    let schema = careers_schema();
    let jobs = scenario_jobs();
    let state = ViewState::default_for(&schema);

    let view = derive(&schema, &jobs, &state).unwrap();
    let ids: Vec<&str> = view.iter().map(|r| r.id().as_str()).collect();

    // newest first
    assert_eq!(ids, ["j3", "j2", "j1"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let schema = careers_schema();
    let jobs = scenario_jobs();
    let mut state = ViewState::default_for(&schema);
    state.search_term = "engineer".to_string();

    let view = derive(&schema, &jobs, &state).unwrap();
    let ids: Vec<&str> = view.iter().map(|r| r.id().as_str()).collect();

    // both engineers, newest first, analyst excluded
    assert_eq!(ids, ["j2", "j1"]);
}

#[test]
fn filters_apply_exact_equality() {
    let schema = careers_schema();
    let jobs = scenario_jobs();
    let mut state = ViewState::default_for(&schema);
    state
        .filters
        .insert("category".to_string(), "Tech".to_string());

    let view = derive(&schema, &jobs, &state).unwrap();
    assert!(view.iter().all(|r| r.field("category").unwrap().to_string() == "Tech"));
    assert_eq!(view.len(), 2);
}

#[test]
fn empty_filter_value_is_no_constraint() {
    let schema = careers_schema();
    let jobs = scenario_jobs();
    let mut state = ViewState::default_for(&schema);
    state.filters.insert("category".to_string(), String::new());

    let view = derive(&schema, &jobs, &state).unwrap();
    assert_eq!(view.len(), 3);
}

#[test]
fn search_and_filter_compose() {
    let schema = careers_schema();
    let mut jobs = scenario_jobs();
    jobs.push(job("j4", "Engineer III", "Finance", 4_000));

    let mut state = ViewState::default_for(&schema);
    state.search_term = "Engineer".to_string();
    state
        .filters
        .insert("category".to_string(), "Finance".to_string());

    let view = derive(&schema, &jobs, &state).unwrap();
    let ids: Vec<&str> = view.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, ["j4"]);
}

#[test]
fn sort_ascending_on_numeric_field() {
    let schema = products_schema();
    let records = vec![
        product("p1", "Panel A", "Solar", 900),
        product("p2", "Panel B", "Solar", 400),
        product("p3", "Inverter", "Power", 1_500),
    ];
    let state = ViewState::default_for(&schema);

    let view = derive(&schema, &records, &state).unwrap();
    let ids: Vec<&str> = view.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, ["p2", "p1", "p3"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let schema = products_schema();
    let records = vec![
        product("p1", "Panel A", "Solar", 500),
        product("p2", "Panel B", "Solar", 500),
        product("p3", "Panel C", "Solar", 500),
    ];
    let mut state = ViewState::default_for(&schema);

    for direction in [Direction::Asc, Direction::Desc] {
        state.sort = SortSpec::new("price", direction);
        let view = derive(&schema, &records, &state).unwrap();
        let ids: Vec<&str> = view.iter().map(|r| r.id().as_str()).collect();

        // equal keys keep input order under either direction
        assert_eq!(ids, ["p1", "p2", "p3"]);
    }
}

#[test]
fn mixed_kind_sort_cells_still_yield_a_coherent_order() {
    // a malformed collection can mix cell kinds in the sort field;
    // the comparator must stay a strict weak order so the comparable
    // cells actually come back sorted
    let schema = products_schema();
    let records: Vec<Record> = (0..200)
        .map(|i| {
            let record = Record::new(RecordId::new(format!("p{i}")))
                .with("productName", "Panel")
                .with("category", "Solar");
            if i % 2 == 0 {
                record.with("price", 200 - u64::try_from(i).unwrap())
            } else {
                record.with("price", Timestamp::from_millis(i))
            }
        })
        .collect();
    let state = ViewState::default_for(&schema);

    let view = derive(&schema, &records, &state).unwrap();

    // ascending sort: numeric cells first (canonical rank), in
    // ascending numeric order, then the timestamp cells in theirs
    let prices: Vec<u64> = view
        .iter()
        .filter_map(|r| match r.field("price") {
            Some(Value::Uint(v)) => Some(*v),
            _ => None,
        })
        .collect();
    assert_eq!(prices.len(), 100);
    assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));

    let first_timestamp = view
        .iter()
        .position(|r| matches!(r.field("price"), Some(Value::Timestamp(_))))
        .unwrap();
    assert_eq!(first_timestamp, 100);

    // and the relation is deterministic across re-derivation
    let again = derive(&schema, &records, &state).unwrap();
    let ids: Vec<&str> = view.iter().map(|r| r.id().as_str()).collect();
    let again_ids: Vec<&str> = again.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, again_ids);
}

#[test]
fn records_missing_sort_cell_rank_last() {
    let schema = products_schema();
    let records = vec![
        product("p1", "Panel A", "Solar", 900),
        Record::new("p2".into()).with("productName", "Mystery"),
        product("p3", "Panel B", "Solar", 100),
    ];
    let state = ViewState::default_for(&schema);

    let view = derive(&schema, &records, &state).unwrap();
    let ids: Vec<&str> = view.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, ["p3", "p1", "p2"]);
}

#[test]
fn unknown_sort_field_fails_fast() {
    let schema = careers_schema();
    let jobs = scenario_jobs();
    let mut state = ViewState::default_for(&schema);
    state.sort = SortSpec::new("nonexistentField", Direction::Asc);

    let err = derive(&schema, &jobs, &state).unwrap_err();
    assert_eq!(
        err,
        ViewError::UnknownField {
            listing: "careers",
            field: "nonexistentField".to_string()
        }
    );
}

#[test]
fn non_categorical_filter_field_fails_fast() {
    let schema = careers_schema();
    let jobs = scenario_jobs();
    let mut state = ViewState::default_for(&schema);
    state
        .filters
        .insert("position".to_string(), "Engineer".to_string());

    let err = derive(&schema, &jobs, &state).unwrap_err();
    assert!(matches!(err, ViewError::NotFilterable { .. }));
}

#[test]
fn derive_does_not_mutate_input() {
    let schema = careers_schema();
    let jobs = scenario_jobs();
    let before = jobs.clone();

    let mut state = ViewState::default_for(&schema);
    state.search_term = "Engineer".to_string();
    let _ = derive(&schema, &jobs, &state).unwrap();

    assert_eq!(jobs, before);
}
