use std::path::Path;

use anyhow::{Context, Result};

use emission_viewer::{
    ingest_path, Dataset, DatasetInfo, EmissionQuery, EmissionStore, EntitySummary, QueryError,
    SeriesView, SortMode,
};

// ---------------------------------------------------------------------------
// Selection – what the user picked in the side panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Bars,
    Lines,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The user's current choices. Compared by value to detect changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub entity: Option<String>,
    pub chart: ChartKind,
    /// The "Sort" checkbox; `direction` only applies while it is ticked.
    pub sorted: bool,
    pub direction: SortDirection,
}

impl Selection {
    pub fn sort_mode(&self) -> SortMode {
        match (self.sorted, self.direction) {
            (false, _) => SortMode::None,
            (true, SortDirection::Ascending) => SortMode::Ascending,
            (true, SortDirection::Descending) => SortMode::Descending,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    store: EmissionStore,

    /// Rows of the last successful import (None if the store was reused as-is).
    pub dataset: Option<Dataset>,

    /// Entities offered in the selector.
    pub entities: Vec<String>,

    pub selection: Selection,

    /// Series on display for the current selection.
    pub view: Option<SeriesView>,

    /// Statistics of `view`; None when they could not be computed.
    pub summary: Option<EntitySummary>,

    /// Store totals for the "Data info" window; None before any data exists.
    pub info: Option<DatasetInfo>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    pub show_about: bool,
    pub show_info: bool,
}

impl AppState {
    /// Wrap an opened store, picking up rows left by a previous session.
    pub fn new(store: EmissionStore) -> Self {
        let mut state = Self {
            store,
            dataset: None,
            entities: Vec::new(),
            selection: Selection::default(),
            view: None,
            summary: None,
            info: None,
            status_message: None,
            show_about: false,
            show_info: false,
        };
        if let Err(e) = state.reload_entities() {
            log::error!("Failed to read the emission store: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
        state
    }

    fn query(&self) -> EmissionQuery<'_> {
        EmissionQuery::new(&self.store, self.dataset.as_ref())
    }

    /// Import a CSV file, replacing the dataset and the store content.
    ///
    /// On failure nothing changes except the status message.
    pub fn import(&mut self, path: &Path) {
        match self.try_import(path) {
            Ok(()) => {
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to import {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn try_import(&mut self, path: &Path) -> Result<()> {
        let dataset =
            ingest_path(path).with_context(|| format!("importing {}", path.display()))?;
        self.store
            .load(&dataset)
            .context("writing the emission store")?;
        self.dataset = Some(dataset);
        self.reload_entities()
    }

    /// Refresh entity list and totals from the store, keeping the current
    /// entity when it is still present.
    fn reload_entities(&mut self) -> Result<()> {
        let query = self.query();
        let entities = query.distinct_entities().context("listing entities")?;
        let info = query.dataset_info().context("counting rows")?;

        let keep = self
            .selection
            .entity
            .as_ref()
            .filter(|e| entities.contains(e))
            .cloned();
        self.selection.entity = keep.or_else(|| entities.first().cloned());
        self.info = (info.total_rows > 0).then_some(info);
        self.entities = entities;
        self.refresh();
        Ok(())
    }

    /// Apply a new selection from the UI.
    pub fn set_selection(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.refresh();
        }
    }

    /// Recompute the displayed series and its statistics.
    pub fn refresh(&mut self) {
        let Some(entity) = self.selection.entity.clone() else {
            self.view = None;
            self.summary = None;
            return;
        };

        let query = self.query();
        let view = match query.view_for(&entity, self.selection.sort_mode()) {
            Ok(view) => view,
            Err(e) => {
                log::error!("Failed to query '{entity}': {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.view = None;
                self.summary = None;
                return;
            }
        };
        let summary = query.statistics_for(&entity);

        self.status_message = None;
        self.summary = match summary {
            Ok(summary) => Some(summary),
            Err(QueryError::EmptySeries(e)) => {
                self.status_message = Some(e.to_string());
                None
            }
            Err(e) => {
                log::error!("Failed to compute statistics for '{entity}': {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                None
            }
        };
        self.view = Some(view);
    }
}
