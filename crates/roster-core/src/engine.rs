//! The roster view engine.

use std::collections::{BTreeMap, BTreeSet};

use roster_model::{ColumnId, Record, RecordGenerator, RecordId, SortDirection, SortRule};
use roster_validate::{Validation, Validator};

use crate::derive::{self, DerivedView};
use crate::error::{CommitOutcome, DeleteOutcome, EditError};
use crate::options::EngineOptions;
use crate::state::{EditCursor, FocusedCell, ViewState};

/// Which persisted pieces changed since the last [`RosterGrid::take_changes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub records: bool,
    /// Column order or visibility.
    pub layout: bool,
    /// Page size or sort rules.
    pub settings: bool,
    /// Filters, selection or page index.
    pub session: bool,
}

impl Changes {
    pub fn any(&self) -> bool {
        self.records || self.layout || self.settings || self.session
    }

    fn merge(&mut self, other: Changes) {
        self.records |= other.records;
        self.layout |= other.layout;
        self.settings |= other.settings;
        self.session |= other.session;
    }
}

/// Header checkbox state over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

/// Records plus the view state that shapes them.
///
/// All operations are total: unknown ids and out-of-range values are ignored
/// or clamped. The only failure a caller sees is a rejected
/// [`commit_edit`](Self::commit_edit).
#[derive(Debug, Clone)]
pub struct RosterGrid {
    records: Vec<Record>,
    state: ViewState,
    options: EngineOptions,
    validator: Validator,
    changes: Changes,
}

impl RosterGrid {
    /// Build an engine over `records`. Records with a duplicate id are
    /// dropped, keeping the first occurrence.
    pub fn new(records: Vec<Record>, options: EngineOptions) -> Self {
        Self {
            records: dedupe(records),
            state: ViewState::new(options.default_page_size),
            options,
            validator: Validator::new(options.validation()),
            changes: Changes::default(),
        }
    }

    /// Build an engine over freshly generated records.
    pub fn generate<G>(generator: &mut G, options: EngineOptions) -> Self
    where
        G: RecordGenerator + ?Sized,
    {
        let records = generator.generate(options.record_count);
        let mut grid = Self::new(records, options);
        grid.changes.records = true;
        grid
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Drain the set of persisted pieces touched since the last call.
    pub fn take_changes(&mut self) -> Changes {
        std::mem::take(&mut self.changes)
    }

    // ---- derived model ----

    /// Filtered, sorted and paginated rows. Pure: calling it twice without an
    /// intervening mutation yields identical output.
    pub fn derive(&self) -> DerivedView<'_> {
        derive::derive(&self.records, &self.state)
    }

    /// Every row passing the filters, sorted, ignoring pagination.
    pub fn ordered_rows(&self) -> Vec<&Record> {
        derive::ordered(&self.records, &self.state)
    }

    pub fn filtered_count(&self) -> usize {
        derive::filter(&self.records, &self.state).len()
    }

    pub fn page_count(&self) -> usize {
        self.state.pagination.page_count(self.filtered_count())
    }

    pub fn page_index(&self) -> usize {
        self.state.pagination.page_index()
    }

    // ---- filters ----

    pub fn set_global_filter(&mut self, text: &str) {
        self.state.filters.set_global(text);
        tracing::debug!(len = text.len(), "global filter set");
        self.clamp_page();
    }

    /// Replace the inclusion set for a categorical column. An empty set
    /// excludes every row. Non-categorical columns are ignored.
    pub fn set_field_filter<I, S>(&mut self, column: ColumnId, allowed: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.state.filters.set_field(column, allowed) {
            tracing::debug!(column = column.as_str(), "field filter set");
            self.clamp_page();
        }
    }

    pub fn clear_field_filter(&mut self, column: ColumnId) {
        if self.state.filters.clear_field(column) {
            tracing::debug!(column = column.as_str(), "field filter cleared");
            self.clamp_page();
        }
    }

    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        tracing::debug!("filters cleared");
        self.clamp_page();
    }

    // ---- sorting ----

    /// Cycle a column through absent, ascending, descending, absent.
    ///
    /// A column entering the rules is prepended as the highest priority key;
    /// a column already present keeps its position.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !column.is_data() {
            return;
        }
        let rules = &mut self.state.sort;
        match rules.iter().position(|rule| rule.column == column) {
            None => rules.insert(0, SortRule::ascending(column)),
            Some(index) if rules[index].direction == SortDirection::Ascending => {
                rules[index].direction = SortDirection::Descending;
            }
            Some(index) => {
                rules.remove(index);
            }
        }
        tracing::debug!(column = column.as_str(), rules = rules.len(), "sort toggled");
        self.changes.settings = true;
    }

    pub fn remove_sort(&mut self, column: ColumnId) {
        let before = self.state.sort.len();
        self.state.sort.retain(|rule| rule.column != column);
        if self.state.sort.len() != before {
            tracing::debug!(column = column.as_str(), "sort rule removed");
            self.changes.settings = true;
        }
    }

    pub fn clear_sort(&mut self) {
        if !self.state.sort.is_empty() {
            self.state.sort.clear();
            tracing::debug!("sort cleared");
            self.changes.settings = true;
        }
    }

    /// Replace the sort rules wholesale, dropping duplicates and the marker
    /// column. Used when restoring persisted settings.
    pub fn set_sort_rules(&mut self, rules: &[SortRule]) {
        let mut normalized: Vec<SortRule> = Vec::with_capacity(rules.len());
        for rule in rules {
            if rule.column.is_data() && !normalized.iter().any(|r| r.column == rule.column) {
                normalized.push(*rule);
            }
        }
        self.state.sort = normalized;
        self.changes.settings = true;
    }

    // ---- selection ----

    pub fn set_selected(&mut self, id: RecordId, selected: bool) {
        if self.record(id).is_none() {
            return;
        }
        if selected {
            self.state.selection.insert(id);
        } else {
            self.state.selection.remove(&id);
        }
        self.changes.session = true;
        tracing::debug!(%id, selected, "selection changed");
    }

    /// Select or deselect every row passing the current filters.
    pub fn toggle_all(&mut self, selected: bool) {
        let ids: Vec<RecordId> = derive::filter(&self.records, &self.state)
            .into_iter()
            .map(|record| record.id)
            .collect();
        for id in &ids {
            if selected {
                self.state.selection.insert(*id);
            } else {
                self.state.selection.remove(id);
            }
        }
        self.changes.session = true;
        tracing::debug!(rows = ids.len(), selected, "bulk selection changed");
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
        self.changes.session = true;
    }

    pub fn selected_ids(&self) -> &BTreeSet<RecordId> {
        &self.state.selection
    }

    pub fn header_selection(&self) -> SelectionState {
        let filtered = derive::filter(&self.records, &self.state);
        let selected = filtered
            .iter()
            .filter(|record| self.state.selection.contains(&record.id))
            .count();
        match selected {
            0 => SelectionState::None,
            n if n == filtered.len() => SelectionState::All,
            _ => SelectionState::Some,
        }
    }

    // ---- editing ----

    /// Open the editor on a cell, replacing any edit in progress.
    ///
    /// Returns `false` (and leaves state alone) for unknown ids and
    /// non-editable columns.
    pub fn begin_edit(&mut self, id: RecordId, column: ColumnId) -> bool {
        if !column.is_editable() {
            return false;
        }
        let Some(record) = self.record(id) else {
            return false;
        };
        let staged = record.display(column);
        self.state.edit = Some(EditCursor {
            record: id,
            column,
            staged,
            error: None,
        });
        if let Some(focus) = self.locate(id, column) {
            self.state.focus = Some(focus);
        }
        tracing::debug!(%id, column = column.as_str(), "edit opened");
        true
    }

    pub fn stage_edit_value(&mut self, raw: &str) {
        if let Some(cursor) = self.state.edit.as_mut() {
            cursor.staged = raw.to_string();
            cursor.error = None;
        }
    }

    /// Validate the staged value and write it into the record.
    ///
    /// On rejection the message is kept on the cursor, the cursor stays open
    /// and the record is untouched.
    pub fn commit_edit(&mut self) -> Result<CommitOutcome, EditError> {
        let Some(cursor) = self.state.edit.as_mut() else {
            return Ok(CommitOutcome::NoActiveEdit);
        };
        let (id, column) = (cursor.record, cursor.column);

        if let Validation::Invalid(message) = self.validator.validate(column, &cursor.staged) {
            cursor.error = Some(message.clone());
            tracing::debug!(%id, column = column.as_str(), "edit rejected");
            return Err(EditError::Invalid { column, message });
        }

        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            self.state.edit = None;
            return Ok(CommitOutcome::NoActiveEdit);
        };
        if let Err(error) = record.assign(column, &cursor.staged) {
            let message = error.to_string();
            cursor.error = Some(message.clone());
            return Err(EditError::Invalid { column, message });
        }

        self.state.edit = None;
        self.changes.records = true;
        tracing::debug!(%id, column = column.as_str(), "edit committed");
        self.clamp_page();
        Ok(CommitOutcome::Committed { record: id, column })
    }

    pub fn cancel_edit(&mut self) {
        if self.state.edit.take().is_some() {
            tracing::debug!("edit cancelled");
        }
    }

    // ---- record set ----

    /// Remove the given records, pruning selection and any edit on them.
    pub fn delete_records<'a, I>(&mut self, ids: I) -> DeleteOutcome
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let ids: BTreeSet<RecordId> = ids.into_iter().copied().collect();
        if ids.is_empty() {
            return DeleteOutcome::NothingSelected;
        }

        let before = self.records.len();
        self.records.retain(|record| !ids.contains(&record.id));
        let removed = before - self.records.len();

        self.state.selection.retain(|id| !ids.contains(id));
        if self
            .state
            .edit
            .as_ref()
            .is_some_and(|cursor| ids.contains(&cursor.record))
        {
            self.state.edit = None;
        }
        if removed > 0 {
            self.changes.records = true;
        }
        tracing::debug!(requested = ids.len(), removed, "records deleted");
        self.clamp_page();
        DeleteOutcome::Deleted(removed)
    }

    pub fn delete_selected(&mut self) -> DeleteOutcome {
        let ids = self.state.selection.clone();
        self.delete_records(&ids)
    }

    /// Move `source` to the index `target` occupies, shifting the records in
    /// between. Returns `false` when either id is unknown or they are equal.
    pub fn reorder(&mut self, source: RecordId, target: RecordId) -> bool {
        let (Some(from), Some(to)) = (self.position(source), self.position(target)) else {
            return false;
        };
        if from == to {
            return false;
        }
        let record = self.records.remove(from);
        self.records.insert(to, record);
        self.changes.records = true;
        tracing::debug!(%source, %target, "record moved");
        true
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Replace every record and reset the view state to defaults.
    pub fn reset_all<G>(&mut self, generator: &mut G)
    where
        G: RecordGenerator + ?Sized,
    {
        self.records = dedupe(generator.generate(self.options.record_count));
        self.state = ViewState::new(self.options.default_page_size);
        self.changes.merge(Changes {
            records: true,
            layout: true,
            settings: true,
            session: true,
        });
        tracing::info!(records = self.records.len(), "roster reset");
    }

    // ---- columns ----

    pub fn set_column_order(&mut self, sequence: &[ColumnId]) {
        self.state.layout.set_order(sequence);
        self.changes.layout = true;
        self.clamp_focus();
    }

    pub fn move_column(&mut self, column: ColumnId, target: ColumnId) -> bool {
        let moved = self.state.layout.move_column(column, target);
        if moved {
            self.changes.layout = true;
            tracing::debug!(column = column.as_str(), target = target.as_str(), "column moved");
        }
        moved
    }

    pub fn set_column_visibility(&mut self, column: ColumnId, visible: bool) {
        if self.state.layout.is_visible(column) == visible {
            return;
        }
        self.state.layout.set_visibility(column, visible);
        self.changes.layout = true;
        tracing::debug!(column = column.as_str(), visible, "column visibility changed");
        self.clamp_focus();
    }

    /// Restore persisted visibility; columns absent from the map are shown.
    pub fn set_column_visibility_map(&mut self, visibility: &BTreeMap<ColumnId, bool>) {
        self.state.layout.set_visibility_map(visibility);
        self.changes.layout = true;
        self.clamp_focus();
    }

    // ---- pagination ----

    /// Zero is clamped to one. Always returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.pagination.set_page_size(page_size);
        self.changes.settings = true;
        self.changes.session = true;
        tracing::debug!(page_size = self.state.pagination.page_size(), "page size changed");
        self.clamp_focus();
    }

    pub fn next_page(&mut self) {
        let index = self.state.pagination.page_index().saturating_add(1);
        self.go_to_page(index);
    }

    pub fn previous_page(&mut self) {
        let index = self.state.pagination.page_index().saturating_sub(1);
        self.go_to_page(index);
    }

    /// Jump to a zero-based page, clamped to the last page.
    pub fn go_to_page(&mut self, index: usize) {
        let filtered = self.filtered_count();
        self.state.pagination.go_to(index, filtered);
        self.changes.session = true;
        tracing::debug!(page = self.state.pagination.page_index(), "page changed");
        self.clamp_focus();
    }

    fn clamp_page(&mut self) {
        self.changes.session = true;
        let filtered = self.filtered_count();
        self.state.pagination.clamp(filtered);
        self.clamp_focus();
    }

    // ---- focus ----

    pub(crate) fn set_focus(&mut self, focus: Option<FocusedCell>) {
        self.state.focus = focus;
    }

    /// Page position of a record's cell, if the record is on the current page
    /// and the column is visible.
    pub(crate) fn locate(&self, id: RecordId, column: ColumnId) -> Option<FocusedCell> {
        let view = self.derive();
        let row = view.rows.iter().position(|row| row.record.id == id)?;
        let column = view.columns.iter().position(|c| *c == column)?;
        Some(FocusedCell::new(row, column))
    }
}

fn dedupe(records: Vec<Record>) -> Vec<Record> {
    let mut seen = BTreeSet::new();
    let before = records.len();
    let records: Vec<Record> = records
        .into_iter()
        .filter(|record| seen.insert(record.id))
        .collect();
    if records.len() != before {
        tracing::warn!(
            dropped = before - records.len(),
            "dropped records with duplicate ids"
        );
    }
    records
}
