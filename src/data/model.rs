use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::error::EmptySeriesError;

// ---------------------------------------------------------------------------
// Row – one (entity, year, emission) observation
// ---------------------------------------------------------------------------

/// A single cleaned observation, stored as `Emission(Entite, Annee, Co2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub entity: String,
    pub year: i64,
    pub emission: f64,
}

/// Why a candidate row was not admitted into a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowRejected {
    #[error("blank entity")]
    BlankEntity,
    #[error("year '{0}' is not an integer")]
    InvalidYear(String),
    #[error("emission '{0}' is not a number")]
    NonNumericEmission(String),
    #[error("emission {0} is not strictly positive")]
    NonPositiveEmission(f64),
}

impl Row {
    /// Build a row, rejecting blank entities and non-positive or non-finite emissions.
    pub fn new(entity: impl Into<String>, year: i64, emission: f64) -> Result<Self, RowRejected> {
        let entity = entity.into();
        if entity.trim().is_empty() {
            return Err(RowRejected::BlankEntity);
        }
        if !(emission.is_finite() && emission > 0.0) {
            return Err(RowRejected::NonPositiveEmission(emission));
        }
        Ok(Row {
            entity,
            year,
            emission,
        })
    }
}

// ---------------------------------------------------------------------------
// Dataset – the cleaned rows of one import
// ---------------------------------------------------------------------------

/// Cleaned rows of one source file, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Row>,
    /// File the rows came from (None for in-memory readers).
    pub source: Option<PathBuf>,
    /// Source columns that were not mapped to a canonical column.
    pub ignored_columns: Vec<String>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Dataset {
            rows,
            ..Default::default()
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows belonging to `entity`, in source order.
    pub fn rows_for<'a>(&'a self, entity: &'a str) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows.iter().filter(move |r| r.entity == entity)
    }

    /// Sorted unique entities.
    pub fn distinct_entities(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.entity.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Query value objects
// ---------------------------------------------------------------------------

/// Ordering applied to a series before display.
///
/// Ascending / descending order by emission value, not by year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    None,
    Ascending,
    Descending,
}

/// The (year, emission) axes of one entity, index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesView {
    pub entity: String,
    pub xs: Vec<i64>,
    pub ys: Vec<f64>,
}

impl SeriesView {
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// Summary statistics over the values on display.
    pub fn summary(&self) -> Result<EntitySummary, EmptySeriesError> {
        EntitySummary::from_values(&self.entity, &self.ys)
    }
}

/// Count, mean, sample standard deviation and extrema of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySummary {
    pub count: usize,
    /// Rounded to two decimals.
    pub mean: f64,
    /// Sample standard deviation rounded to two decimals; NaN for a single value.
    pub stddev: f64,
    pub max: f64,
    pub min: f64,
}

impl EntitySummary {
    pub fn from_values(entity: &str, values: &[f64]) -> Result<Self, EmptySeriesError> {
        if values.is_empty() {
            return Err(EmptySeriesError {
                entity: entity.to_owned(),
            });
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let stddev = if count > 1 {
            let sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sq / (n - 1.0)).sqrt()
        } else {
            f64::NAN
        };
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);

        Ok(EntitySummary {
            count,
            mean: round2(mean),
            stddev: round2(stddev),
            max,
            min,
        })
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl fmt::Display for EntitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Mean: {:.2}", self.mean)?;
        if self.stddev.is_nan() {
            writeln!(f, "Std. dev.: n/a")?;
        } else {
            writeln!(f, "Std. dev.: {:.2}", self.stddev)?;
        }
        writeln!(f, "Max: {}", self.max)?;
        write!(f, "Min: {}", self.min)
    }
}

// ---------------------------------------------------------------------------
// DatasetInfo – "data info" summary of the store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    pub total_rows: usize,
    pub distinct_entities: usize,
    /// (column name, kind) of the persisted table.
    pub columns: Vec<(&'static str, &'static str)>,
}

impl fmt::Display for DatasetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The store holds {} rows across {} unique entities.",
            self.total_rows, self.distinct_entities
        )?;
        write!(f, "Columns:")?;
        for (name, kind) in &self.columns {
            write!(f, "\n  {name}: {kind}")?;
        }
        Ok(())
    }
}
