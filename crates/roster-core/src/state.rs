//! The view state value owned by [`RosterGrid`](crate::RosterGrid).
//!
//! Every field here is only mutated through engine operations; the types are
//! exposed read-only so hosts can render toolbars and badges from them.

use std::collections::{BTreeMap, BTreeSet};

use roster_model::{ColumnId, Record, RecordId, SortRule};

/// Free-text and categorical filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    global: String,
    fields: BTreeMap<ColumnId, BTreeSet<&'static str>>,
}

impl Filters {
    pub fn global(&self) -> &str {
        &self.global
    }

    /// Allowed values for a categorical column, or `None` when unfiltered.
    pub fn allowed(&self, column: ColumnId) -> Option<&BTreeSet<&'static str>> {
        self.fields.get(&column)
    }

    pub fn field_filters(&self) -> impl Iterator<Item = (ColumnId, &BTreeSet<&'static str>)> {
        self.fields.iter().map(|(column, allowed)| (*column, allowed))
    }

    pub fn is_active(&self) -> bool {
        !self.global.is_empty() || !self.fields.is_empty()
    }

    pub(crate) fn set_global(&mut self, text: &str) {
        self.global = text.to_string();
    }

    /// Replace the inclusion set for a categorical column.
    ///
    /// Values are matched case-insensitively against the column's choices;
    /// anything that is not a known choice is dropped.
    pub(crate) fn set_field<I, S>(&mut self, column: ColumnId, allowed: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let choices = column.choices();
        if choices.is_empty() {
            return false;
        }
        let allowed = allowed
            .into_iter()
            .filter_map(|value| {
                let value = value.as_ref().trim();
                choices
                    .iter()
                    .copied()
                    .find(|choice| choice.eq_ignore_ascii_case(value))
            })
            .collect();
        self.fields.insert(column, allowed);
        true
    }

    pub(crate) fn clear_field(&mut self, column: ColumnId) -> bool {
        self.fields.remove(&column).is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.global.clear();
        self.fields.clear();
    }

    /// Categorical filters first, then the free-text needle over every data
    /// column's display value.
    pub fn matches(&self, record: &Record) -> bool {
        let categorical = self.fields.iter().all(|(column, allowed)| {
            record
                .text(*column)
                .is_some_and(|value| allowed.contains(value))
        });
        if !categorical {
            return false;
        }

        let needle = self.global.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        ColumnId::ALL
            .into_iter()
            .filter(ColumnId::is_data)
            .any(|column| record.display(column).to_lowercase().contains(&needle))
    }
}

/// Column order and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    order: Vec<ColumnId>,
    visibility: BTreeMap<ColumnId, bool>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            order: ColumnId::ALL.to_vec(),
            visibility: BTreeMap::new(),
        }
    }
}

impl ColumnLayout {
    pub fn order(&self) -> &[ColumnId] {
        &self.order
    }

    pub fn visibility(&self) -> &BTreeMap<ColumnId, bool> {
        &self.visibility
    }

    pub fn is_visible(&self, column: ColumnId) -> bool {
        self.visibility.get(&column).copied().unwrap_or(true)
    }

    /// Visible columns in layout order.
    pub fn visible_columns(&self) -> Vec<ColumnId> {
        self.order
            .iter()
            .copied()
            .filter(|column| self.is_visible(*column))
            .collect()
    }

    /// Unknown and duplicate columns are dropped; missing ones are appended
    /// in default order. The result always lists every column exactly once.
    pub(crate) fn set_order(&mut self, sequence: &[ColumnId]) {
        let mut order: Vec<ColumnId> = Vec::with_capacity(ColumnId::ALL.len());
        for column in sequence.iter().copied().chain(ColumnId::ALL) {
            if !order.contains(&column) {
                order.push(column);
            }
        }
        self.order = order;
    }

    pub(crate) fn move_column(&mut self, column: ColumnId, target: ColumnId) -> bool {
        move_item(&mut self.order, &column, &target)
    }

    pub(crate) fn set_visibility(&mut self, column: ColumnId, visible: bool) {
        if visible {
            self.visibility.remove(&column);
        } else {
            self.visibility.insert(column, false);
        }
    }

    pub(crate) fn set_visibility_map(&mut self, visibility: &BTreeMap<ColumnId, bool>) {
        self.visibility.clear();
        for (column, visible) in visibility {
            self.set_visibility(*column, *visible);
        }
    }
}

/// Move `source` to the index `target` occupies, shifting the items between.
fn move_item<T: PartialEq>(items: &mut Vec<T>, source: &T, target: &T) -> bool {
    if source == target {
        return false;
    }
    let (Some(from), Some(to)) = (
        items.iter().position(|item| item == source),
        items.iter().position(|item| item == target),
    ) else {
        return false;
    };
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Page size and index. The index is clamped by the engine whenever the
/// filtered row count can shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    page_index: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_index: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self, filtered: usize) -> usize {
        filtered.div_ceil(self.page_size).max(1)
    }

    /// Index clamped to the last page for `filtered` rows.
    pub fn effective_index(&self, filtered: usize) -> usize {
        self.page_index.min(self.page_count(filtered) - 1)
    }

    pub(crate) fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    pub(crate) fn go_to(&mut self, index: usize, filtered: usize) {
        self.page_index = index;
        self.clamp(filtered);
    }

    pub(crate) fn clamp(&mut self, filtered: usize) {
        self.page_index = self.effective_index(filtered);
    }
}

/// The single in-flight cell edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub record: RecordId,
    pub column: ColumnId,
    pub staged: String,
    pub error: Option<String>,
}

/// Keyboard focus over the derived page: row index within the page, column
/// index within the visible columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusedCell {
    pub row: usize,
    pub column: usize,
}

impl FocusedCell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Everything that controls which records are shown and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) sort: Vec<SortRule>,
    pub(crate) filters: Filters,
    pub(crate) selection: BTreeSet<RecordId>,
    pub(crate) layout: ColumnLayout,
    pub(crate) pagination: Pagination,
    pub(crate) edit: Option<EditCursor>,
    pub(crate) focus: Option<FocusedCell>,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: Vec::new(),
            filters: Filters::default(),
            selection: BTreeSet::new(),
            layout: ColumnLayout::default(),
            pagination: Pagination::new(page_size),
            edit: None,
            focus: None,
        }
    }

    pub fn sort_rules(&self) -> &[SortRule] {
        &self.sort
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn selection(&self) -> &BTreeSet<RecordId> {
        &self.selection
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn edit_cursor(&self) -> Option<&EditCursor> {
        self.edit.as_ref()
    }

    pub fn focus(&self) -> Option<FocusedCell> {
        self.focus
    }
}
