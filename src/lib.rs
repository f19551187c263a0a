//! Per-capita CO2 emissions: CSV ingestion, a local SQLite cache and
//! per-entity views with summary statistics.

pub mod config;
pub mod data;

pub use data::error::{EmptySeriesError, IngestionError, QueryError, StoreError};
pub use data::loader::{ingest_path, ingest_reader};
pub use data::model::{Dataset, DatasetInfo, EntitySummary, Row, SeriesView, SortMode};
pub use data::query::EmissionQuery;
pub use data::store::EmissionStore;
