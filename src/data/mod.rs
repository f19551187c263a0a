//! Data layer: row model, CSV ingestion, SQLite store and queries.
//!
//! Architecture:
//! ```text
//!   emissions .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + clean → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  store    │  Emission(Entite, Annee, Co2) in SQLite
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  query    │  per-entity SeriesView + EntitySummary
//!   └──────────┘
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod store;
