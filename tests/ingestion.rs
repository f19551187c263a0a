use emission_viewer::data::loader::{ingest_path, ingest_reader};
use emission_viewer::{IngestionError, Row};

const HEADER: &str = "Entity,Year,Annual CO₂ emissions (per capita)\n";

#[test]
fn ingest_path_cleans_fixture() {
    let ds = ingest_path("tests/fixtures/emissions.csv").unwrap();

    assert_eq!(ds.len(), 6);
    assert!(ds.source.as_ref().unwrap().ends_with("emissions.csv"));
    assert_eq!(ds.ignored_columns, vec!["Code"]);
    for row in &ds.rows {
        assert!(row.emission > 0.0);
        assert!(!row.entity.trim().is_empty());
    }
    // Source order is kept.
    assert_eq!(ds.rows[0], Row::new("France", 2000, 6.1).unwrap());
    assert_eq!(ds.rows[5], Row::new("Brazil", 2003, 1.9).unwrap());
}

#[test]
fn negative_and_zero_emissions_are_dropped() {
    let input = format!("{HEADER}E,2000,-5\nE,2001,0\nE,2002,4.2\n");
    let ds = ingest_reader(input.as_bytes()).unwrap();
    assert_eq!(ds.rows, vec![Row::new("E", 2002, 4.2).unwrap()]);
}

#[test]
fn entity_text_is_kept_verbatim() {
    let input = format!("{HEADER}\" France\",2000,6.1\nFrance,2000,6.2\n\"   \",2000,1.0\n");
    let ds = ingest_reader(input.as_bytes()).unwrap();
    assert_eq!(
        ds.rows,
        vec![
            Row::new(" France", 2000, 6.1).unwrap(),
            Row::new("France", 2000, 6.2).unwrap(),
        ]
    );
    assert_eq!(ds.distinct_entities(), vec![" France", "France"]);
}

#[test]
fn canonical_column_names_are_accepted() {
    let input = "Co2,Annee,Entite\n3.5,1990,Chile\n";
    let ds = ingest_reader(input.as_bytes()).unwrap();
    assert_eq!(ds.rows, vec![Row::new("Chile", 1990, 3.5).unwrap()]);
}

#[test]
fn unparseable_years_and_emissions_drop_rows_only() {
    let input = format!("{HEADER}E,abc,1.0\nE,2000.0,2.0\nE,2001,lots\nE,2002, 3.0 \nE,2003,inf\n");
    let ds = ingest_reader(input.as_bytes()).unwrap();
    assert_eq!(
        ds.rows,
        vec![
            Row::new("E", 2000, 2.0).unwrap(),
            Row::new("E", 2002, 3.0).unwrap(),
        ]
    );
}

#[test]
fn missing_emission_column_fails() {
    let err = ingest_path("tests/fixtures/missing_emission.csv").unwrap_err();
    assert!(matches!(
        err,
        IngestionError::MissingColumn { canonical: "Co2", .. }
    ));
    assert!(err.to_string().contains("missing required column"));
}

#[test]
fn unreadable_source_fails() {
    let err = ingest_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, IngestionError::Io(_)));
}

#[test]
fn ragged_csv_fails_whole_import() {
    let input = format!("{HEADER}E,2000,1.0\nE,2001\n");
    let err = ingest_reader(input.as_bytes()).unwrap_err();
    assert!(matches!(err, IngestionError::Csv(_)));
}

#[test]
fn invalid_utf8_fails_whole_import() {
    let mut input = HEADER.as_bytes().to_vec();
    input.extend_from_slice(b"Fran\xE7e,2000,1.0\n");
    let err = ingest_reader(input.as_slice()).unwrap_err();
    assert!(matches!(err, IngestionError::Csv(_)));
}
