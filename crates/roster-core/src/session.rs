//! A [`RosterGrid`] mirrored into a [`KvStore`].
//!
//! The store is a best-effort mirror: after every mutation the changed
//! pieces are written back, and a failed write is logged without touching
//! in-memory state. Loading never fails; unreadable values fall back to
//! defaults or to freshly generated records.

use roster_model::{Record, RecordGenerator};
use roster_persistence::{
    KvStore, PersistenceError, ViewSession, ViewSettings, clear_all, load_column_order,
    load_column_visibility, load_records, load_view_session, load_view_settings,
    save_column_order, save_column_visibility, save_records, save_view_session,
    save_view_settings,
};
use roster_validate::Validator;

use crate::engine::{Changes, RosterGrid};
use crate::options::EngineOptions;

pub struct Session<S> {
    grid: RosterGrid,
    store: S,
}

impl<S: KvStore> Session<S> {
    /// Restore a grid from the store, generating records when none are
    /// stored (or the stored snapshot is unreadable).
    ///
    /// Stored records that fail validation are dropped with a warning and the
    /// pruned snapshot is written back. A snapshot with no valid record left
    /// is discarded and replaced by generated records.
    pub fn open<G>(store: S, options: EngineOptions, generator: &mut G) -> Self
    where
        G: RecordGenerator + ?Sized,
    {
        let validator = Validator::new(options.validation());
        let loaded = load_records(&store).and_then(|records| {
            let stored = records.len();
            let valid = retain_valid(records, &validator);
            if valid.is_empty() && stored > 0 {
                tracing::warn!(stored, "no valid persisted records, discarding snapshot");
                return None;
            }
            tracing::info!(records = valid.len(), "loaded persisted records");
            Some((valid.len() != stored, valid))
        });

        let (mut grid, rewrite) = match loaded {
            Some((pruned, records)) => (RosterGrid::new(records, options), pruned),
            None => {
                tracing::info!(count = options.record_count, "generating initial records");
                (RosterGrid::generate(generator, options), true)
            }
        };

        restore_view(&mut grid, &store);
        grid.take_changes();

        let mut session = Self { grid, store };
        if rewrite {
            session.write(Changes {
                records: true,
                ..Changes::default()
            });
        }
        session
    }

    pub fn grid(&self) -> &RosterGrid {
        &self.grid
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (RosterGrid, S) {
        (self.grid, self.store)
    }

    /// Run a mutation, then mirror whatever it changed.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut RosterGrid) -> R) -> R {
        let result = mutate(&mut self.grid);
        self.flush();
        result
    }

    /// Write pending changes. Returns the writes that failed; each is also
    /// logged.
    pub fn flush(&mut self) -> Vec<PersistenceError> {
        let changes = self.grid.take_changes();
        self.write(changes)
    }

    /// Wipe the store, regenerate the records and reset the view.
    pub fn reset<G>(&mut self, generator: &mut G) -> Vec<PersistenceError>
    where
        G: RecordGenerator + ?Sized,
    {
        let mut failures = Vec::new();
        if let Err(error) = clear_all(&mut self.store) {
            tracing::warn!(%error, "failed to clear persisted roster state");
            failures.push(error);
        }
        self.grid.reset_all(generator);
        failures.extend(self.flush());
        failures
    }

    fn write(&mut self, changes: Changes) -> Vec<PersistenceError> {
        if !changes.any() {
            return Vec::new();
        }
        let grid = &self.grid;
        let store = &mut self.store;
        let layout = grid.state().layout();

        let mut results = Vec::with_capacity(5);
        if changes.records {
            results.push(("records", save_records(store, grid.records())));
        }
        if changes.layout {
            results.push(("column order", save_column_order(store, layout.order())));
            results.push((
                "column visibility",
                save_column_visibility(store, layout.visibility()),
            ));
        }
        if changes.layout || changes.settings {
            results.push(("view settings", save_view_settings(store, &view_settings(grid))));
        }
        if changes.session {
            results.push(("view session", save_view_session(store, &view_session(grid))));
        }

        let mut failures = Vec::new();
        for (what, result) in results {
            match result {
                Ok(()) => tracing::debug!(what, "mirrored"),
                Err(error) => {
                    tracing::warn!(what, %error, "failed to persist roster state");
                    failures.push(error);
                }
            }
        }
        failures
    }
}

fn retain_valid(records: Vec<Record>, validator: &Validator) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| {
            let issues = validator.validate_record(record);
            if issues.is_empty() {
                return true;
            }
            let columns: Vec<&str> = issues.iter().map(|issue| issue.column.label()).collect();
            tracing::warn!(
                id = %record.id,
                columns = ?columns,
                "dropping invalid persisted record"
            );
            false
        })
        .collect()
}

fn view_settings(grid: &RosterGrid) -> ViewSettings {
    let state = grid.state();
    let mut settings = ViewSettings::new(state.pagination().page_size());
    settings.sort = state.sort_rules().to_vec();
    settings.column_visibility = state.layout().visibility().clone();
    settings
}

fn view_session(grid: &RosterGrid) -> ViewSession {
    let state = grid.state();
    ViewSession {
        page_index: state.pagination().page_index(),
        global_filter: state.filters().global().to_string(),
        field_filters: state
            .filters()
            .field_filters()
            .map(|(column, allowed)| {
                (column, allowed.iter().map(|value| (*value).to_string()).collect())
            })
            .collect(),
        selection: state.selection().iter().copied().collect(),
    }
}

fn restore_view<S: KvStore + ?Sized>(grid: &mut RosterGrid, store: &S) {
    if let Some(order) = load_column_order(store) {
        grid.set_column_order(&order);
    }

    let settings = load_view_settings(store);
    let visibility = load_column_visibility(store)
        .or_else(|| settings.as_ref().map(|s| s.column_visibility.clone()));
    if let Some(visibility) = visibility {
        grid.set_column_visibility_map(&visibility);
    }
    if let Some(settings) = settings {
        grid.set_page_size(settings.page_size);
        grid.set_sort_rules(&settings.sort);
    }

    if let Some(session) = load_view_session(store) {
        grid.set_global_filter(&session.global_filter);
        for (column, allowed) in &session.field_filters {
            grid.set_field_filter(*column, allowed);
        }
        for id in session.selection {
            grid.set_selected(id, true);
        }
        grid.go_to_page(session.page_index);
    }
}
