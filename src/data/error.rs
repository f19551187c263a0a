use thiserror::Error;

/// Failure of a whole import attempt. No partial dataset is ever produced.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The source could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (bad quoting, ragged records, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent under both its source and canonical names.
    #[error("missing required column '{source_name}' (or '{canonical}'). headers={headers:?}")]
    MissingColumn {
        source_name: &'static str,
        canonical: &'static str,
        headers: Vec<String>,
    },
}

/// Persistence-layer failure during load or query.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Statistics were requested over a series with no rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no emission data for '{entity}'")]
pub struct EmptySeriesError {
    pub entity: String,
}

/// Errors returned by [`crate::data::query::EmissionQuery::statistics_for`].
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    EmptySeries(#[from] EmptySeriesError),
}

pub type IngestionResult<T> = Result<T, IngestionError>;
pub type StoreResult<T> = Result<T, StoreError>;
