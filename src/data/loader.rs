use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::{IngestionError, IngestionResult};
use super::model::{Dataset, Row, RowRejected};

// ---------------------------------------------------------------------------
// Column renaming table
// ---------------------------------------------------------------------------

/// Source column name → canonical (persisted) column name.
pub const COLUMN_RENAMES: [(&str, &str); 3] = [
    ("Entity", "Entite"),
    ("Year", "Annee"),
    ("Annual CO₂ emissions (per capita)", "Co2"),
];

/// One CSV record restricted to the required columns, still untyped.
/// Either the source or the canonical header name is accepted.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Entity", alias = "Entite", default)]
    entity: Option<String>,
    #[serde(rename = "Year", alias = "Annee", default)]
    year: Option<String>,
    #[serde(rename = "Annual CO₂ emissions (per capita)", alias = "Co2", default)]
    emission: Option<String>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Ingest an emissions CSV file into a cleaned [`Dataset`].
pub fn ingest_path(path: impl AsRef<Path>) -> IngestionResult<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let mut dataset = ingest_reader(file)?;
    log::info!(
        "Imported {} rows from {}",
        dataset.len(),
        path.display()
    );
    dataset.source = Some(path.to_path_buf());
    Ok(dataset)
}

/// Ingest emissions CSV data from any reader.
///
/// Rules:
///
/// - A header row is required and must contain the entity, year and emission
///   columns under their source or canonical names. Other columns are ignored.
/// - Rows whose emission is not a positive finite number are dropped.
/// - Rows with a blank entity or a non-integer year are dropped.
/// - Malformed CSV fails the whole import.
pub fn ingest_reader<R: Read>(reader: R) -> IngestionResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let header_names: Vec<String> = headers.iter().map(str::to_owned).collect();

    for (source_name, canonical) in COLUMN_RENAMES {
        if !header_names.iter().any(|h| h == source_name || h == canonical) {
            return Err(IngestionError::MissingColumn {
                source_name,
                canonical,
                headers: header_names,
            });
        }
    }

    let ignored_columns = header_names
        .iter()
        .filter(|h| {
            !COLUMN_RENAMES
                .iter()
                .any(|(src, canon)| h.as_str() == *src || h.as_str() == *canon)
        })
        .cloned()
        .collect();

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, +1 for the header line.
        let user_row = row_idx0 + 2;
        let record = result?;
        let raw: RawRecord = record.deserialize(Some(&headers))?;

        match clean_record(raw) {
            Ok(row) => rows.push(row),
            Err(reason) => {
                log::debug!("Dropping CSV row {user_row}: {reason}");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::info!("Dropped {dropped} rows that failed cleaning");
    }

    Ok(Dataset {
        rows,
        source: None,
        ignored_columns,
    })
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

fn clean_record(raw: RawRecord) -> Result<Row, RowRejected> {
    let emission_raw = raw.emission.unwrap_or_default();
    let emission = parse_emission(&emission_raw)
        .ok_or(RowRejected::NonNumericEmission(emission_raw))?;
    if !(emission.is_finite() && emission > 0.0) {
        return Err(RowRejected::NonPositiveEmission(emission));
    }

    let year_raw = raw.year.unwrap_or_default();
    let year = parse_year(&year_raw).ok_or(RowRejected::InvalidYear(year_raw))?;

    // Kept verbatim: " France" and "France" are different entities.
    Row::new(raw.entity.unwrap_or_default(), year, emission)
}

fn parse_emission(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Parse an integer year, accepting integral decimals such as `2000.0`.
pub fn parse_year(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_year_accepts_integral_values_only() {
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year(" 2000.0 "), Some(2000));
        assert_eq!(parse_year("2000.5"), None);
        assert_eq!(parse_year("abc"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("NaN"), None);
    }

    #[test]
    fn clean_record_reports_reason() {
        let raw = RawRecord {
            entity: Some("E".into()),
            year: Some("2001".into()),
            emission: Some("n/a".into()),
        };
        assert_eq!(
            clean_record(raw),
            Err(RowRejected::NonNumericEmission("n/a".into()))
        );

        let raw = RawRecord {
            entity: Some("".into()),
            year: Some("2001".into()),
            emission: Some("3.5".into()),
        };
        assert_eq!(clean_record(raw), Err(RowRejected::BlankEntity));

        let raw = RawRecord {
            entity: Some("E".into()),
            year: Some("later".into()),
            emission: Some("3.5".into()),
        };
        assert_eq!(
            clean_record(raw),
            Err(RowRejected::InvalidYear("later".into()))
        );
    }

    #[test]
    fn ignored_columns_are_recorded() {
        let input = "Entity,Code,Year,Annual CO₂ emissions (per capita)\nFrance,FRA,2000,6.1\n";
        let ds = ingest_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.ignored_columns, vec!["Code"]);
        assert_eq!(ds.rows, vec![Row::new("France", 2000, 6.1).unwrap()]);
    }
}
