use super::error::{QueryError, StoreResult};
use super::model::{Dataset, DatasetInfo, EntitySummary, SeriesView, SortMode};
use super::store::EmissionStore;

/// Persisted columns as reported by [`EmissionQuery::dataset_info`].
const STORED_COLUMNS: [(&str, &str); 3] = [
    ("Entite", "text"),
    ("Annee", "integer"),
    ("Co2", "real"),
];

// ---------------------------------------------------------------------------
// EmissionQuery – per-entity views and statistics
// ---------------------------------------------------------------------------

/// Read-only facade over the store and, when one is held, the in-memory
/// dataset it was loaded from.
pub struct EmissionQuery<'a> {
    store: &'a EmissionStore,
    dataset: Option<&'a Dataset>,
}

impl<'a> EmissionQuery<'a> {
    pub fn new(store: &'a EmissionStore, dataset: Option<&'a Dataset>) -> Self {
        Self { store, dataset }
    }

    pub fn distinct_entities(&self) -> StoreResult<Vec<String>> {
        self.store.distinct_entities()
    }

    /// Axes for `entity` under `sort`.
    ///
    /// Unsorted views come straight from the store. Sorted views order the
    /// entity's rows by emission (stable), so years follow their values.
    /// An unknown entity yields an empty view.
    pub fn view_for(&self, entity: &str, sort: SortMode) -> StoreResult<SeriesView> {
        let (xs, ys) = match sort {
            SortMode::None => (self.store.years_for(entity)?, self.store.emissions_for(entity)?),
            SortMode::Ascending | SortMode::Descending => {
                let mut rows = self.entity_rows(entity)?;
                // sort_by is stable: equal emissions keep their source order.
                if sort == SortMode::Ascending {
                    rows.sort_by(|a, b| a.1.total_cmp(&b.1));
                } else {
                    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
                }
                rows.into_iter().unzip()
            }
        };

        log::debug!("View for '{entity}' ({sort:?}): {} rows", ys.len());
        Ok(SeriesView {
            entity: entity.to_owned(),
            xs,
            ys,
        })
    }

    /// Statistics over the rows of `entity` currently in use for display.
    pub fn statistics_for(&self, entity: &str) -> Result<EntitySummary, QueryError> {
        let values: Vec<f64> = self.entity_rows(entity)?.into_iter().map(|(_, v)| v).collect();
        Ok(EntitySummary::from_values(entity, &values)?)
    }

    /// Row and entity totals of the store.
    pub fn dataset_info(&self) -> StoreResult<DatasetInfo> {
        Ok(DatasetInfo {
            total_rows: self.store.total_row_count()?,
            distinct_entities: self.store.distinct_entity_count()?,
            columns: STORED_COLUMNS.to_vec(),
        })
    }

    /// The entity's (year, emission) rows: from the dataset when held, else the store.
    fn entity_rows(&self, entity: &str) -> StoreResult<Vec<(i64, f64)>> {
        match self.dataset {
            Some(ds) => Ok(ds.rows_for(entity).map(|r| (r.year, r.emission)).collect()),
            None => self.store.rows_for(entity),
        }
    }
}
