use emission_viewer::data::loader::ingest_path;
use emission_viewer::{
    Dataset, EmissionQuery, EmissionStore, EmptySeriesError, QueryError, Row, SortMode,
};

fn loaded(ds: &Dataset) -> EmissionStore {
    let mut store = EmissionStore::open_in_memory().unwrap();
    store.load(ds).unwrap();
    store
}

fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

#[test]
fn sorted_views_are_ordered_permutations_of_unsorted_view() {
    let ds = ingest_path("tests/fixtures/emissions.csv").unwrap();
    let store = loaded(&ds);
    let q = EmissionQuery::new(&store, Some(&ds));

    for entity in q.distinct_entities().unwrap() {
        let plain = q.view_for(&entity, SortMode::None).unwrap();
        let asc = q.view_for(&entity, SortMode::Ascending).unwrap();
        let desc = q.view_for(&entity, SortMode::Descending).unwrap();

        assert!(asc.ys.windows(2).all(|w| w[0] <= w[1]));
        assert!(desc.ys.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sorted(asc.ys.clone()), sorted(plain.ys.clone()));
        assert_eq!(sorted(desc.ys.clone()), sorted(plain.ys.clone()));
        assert_eq!(asc.xs.len(), asc.ys.len());
    }
}

#[test]
fn ties_keep_original_relative_order() {
    let ds = ingest_path("tests/fixtures/emissions.csv").unwrap();
    let store = loaded(&ds);
    let q = EmissionQuery::new(&store, Some(&ds));

    // France: (2000, 6.1), (1999, 6.3), (2001, 6.1)
    let asc = q.view_for("France", SortMode::Ascending).unwrap();
    assert_eq!(asc.xs, vec![2000, 2001, 1999]);
    let desc = q.view_for("France", SortMode::Descending).unwrap();
    assert_eq!(desc.xs, vec![1999, 2000, 2001]);
}

#[test]
fn statistics_example() {
    let ds = Dataset::new(vec![
        Row::new("X", 2000, 1.0).unwrap(),
        Row::new("X", 2001, 2.0).unwrap(),
        Row::new("X", 2002, 3.0).unwrap(),
    ]);
    let store = loaded(&ds);
    let summary = EmissionQuery::new(&store, Some(&ds))
        .statistics_for("X")
        .unwrap();

    assert_eq!(summary.count, 3);
    assert_eq!(summary.mean, 2.00);
    assert_eq!(summary.stddev, 1.00);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 3.0);
}

#[test]
fn statistics_for_unknown_entity_is_empty_series_error() {
    let ds = Dataset::new(vec![Row::new("X", 2000, 1.0).unwrap()]);
    let store = loaded(&ds);
    let err = EmissionQuery::new(&store, Some(&ds))
        .statistics_for("Nonexistent")
        .unwrap_err();

    match err {
        QueryError::EmptySeries(e) => assert_eq!(
            e,
            EmptySeriesError {
                entity: "Nonexistent".to_string()
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn view_summary_matches_statistics_for() {
    let ds = ingest_path("tests/fixtures/emissions.csv").unwrap();
    let store = loaded(&ds);
    let q = EmissionQuery::new(&store, Some(&ds));

    let view = q.view_for("Afghanistan", SortMode::Descending).unwrap();
    assert_eq!(view.summary().unwrap(), q.statistics_for("Afghanistan").unwrap());
}

#[test]
fn empty_store_gives_empty_views() {
    let store = EmissionStore::open_in_memory().unwrap();
    let q = EmissionQuery::new(&store, None);
    assert!(q.distinct_entities().unwrap().is_empty());
    assert!(q.view_for("France", SortMode::None).unwrap().is_empty());
    assert!(q.view_for("France", SortMode::Ascending).unwrap().is_empty());
    assert_eq!(q.dataset_info().unwrap().total_rows, 0);
}
