use std::path::Path;

use rusqlite::{params, Connection};

use super::error::StoreResult;
use super::model::Dataset;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS Emission(Entite, Annee, Co2)";

// ---------------------------------------------------------------------------
// EmissionStore – the persisted `Emission` table
// ---------------------------------------------------------------------------

/// SQLite-backed store holding the rows of the most recent import.
///
/// The table has untyped columns and no key, so duplicate (entity, year)
/// pairs are kept. Row order is insertion order (`rowid`).
#[derive(Debug)]
pub struct EmissionStore {
    conn: Connection,
}

impl EmissionStore {
    /// Open (or create) a store file. An existing `Emission` table is reused.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(CREATE_TABLE)?;
        Ok(Self { conn })
    }

    /// Replace every persisted row with the rows of `dataset`.
    ///
    /// Runs in a single transaction: on failure the previous table is kept.
    pub fn load(&mut self, dataset: &Dataset) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS Emission; {CREATE_TABLE};"))?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO Emission (Entite, Annee, Co2) VALUES (?1, ?2, ?3)")?;
            for row in &dataset.rows {
                stmt.execute(params![row.entity, row.year, row.emission])?;
            }
        }
        tx.commit()?;

        log::info!("Loaded {} rows into the emission store", dataset.len());
        Ok(())
    }

    /// All unique entities, ascending.
    pub fn distinct_entities(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT Entite FROM Emission ORDER BY Entite ASC")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Years of every row of `entity`, in insertion order.
    pub fn years_for(&self, entity: &str) -> StoreResult<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Annee FROM Emission WHERE Entite = ?1 ORDER BY rowid")?;
        let rows = stmt.query_map(params![entity], |r| r.get::<_, i64>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Emissions of every row of `entity`, index-aligned with [`Self::years_for`].
    pub fn emissions_for(&self, entity: &str) -> StoreResult<Vec<f64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Co2 FROM Emission WHERE Entite = ?1 ORDER BY rowid")?;
        let rows = stmt.query_map(params![entity], |r| r.get::<_, f64>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// (year, emission) pairs of `entity`, in insertion order.
    pub fn rows_for(&self, entity: &str) -> StoreResult<Vec<(i64, f64)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Annee, Co2 FROM Emission WHERE Entite = ?1 ORDER BY rowid")?;
        let rows = stmt.query_map(params![entity], |r| {
            Ok((r.get::<_, i64>(0)?, r.get::<_, f64>(1)?))
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn total_row_count(&self) -> StoreResult<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Emission", [], |r| r.get(0))?;
        Ok(n as usize)
    }

    pub fn distinct_entity_count(&self) -> StoreResult<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(DISTINCT Entite) FROM Emission", [], |r| {
                r.get(0)
            })?;
        Ok(n as usize)
    }
}
