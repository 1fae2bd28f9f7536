//! Computing the visible page from records and view state.

use std::cmp::Ordering;

use roster_model::{CellValue, ColumnId, Record, SortRule};

use crate::state::ViewState;

/// One row of the derived page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRow<'a> {
    pub record: &'a Record,
    pub selected: bool,
}

/// The page a host renders, plus the counts it needs for pager and badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub rows: Vec<DerivedRow<'a>>,
    /// Visible columns in layout order.
    pub columns: Vec<ColumnId>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl DerivedView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One-based range of filtered rows shown on this page, if any.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = self.page_index * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }
}

/// Records passing every filter, in record-set order.
pub(crate) fn filter<'a>(records: &'a [Record], state: &ViewState) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| state.filters.matches(record))
        .collect()
}

/// Stable multi-key sort in rule priority order.
pub(crate) fn sort(rows: &mut Vec<&Record>, rules: &[SortRule]) {
    if rules.is_empty() {
        return;
    }
    let mut keyed: Vec<(Vec<Option<CellValue>>, &Record)> = rows
        .drain(..)
        .map(|record| {
            let keys = rules.iter().map(|rule| record.value(rule.column)).collect();
            (keys, record)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, rules));
    rows.extend(keyed.into_iter().map(|(_, record)| record));
}

fn compare_keys(a: &[Option<CellValue>], b: &[Option<CellValue>], rules: &[SortRule]) -> Ordering {
    for ((left, right), rule) in a.iter().zip(b).zip(rules) {
        let ordering = match (left, right) {
            (Some(left), Some(right)) => left.compare(right),
            _ => Ordering::Equal,
        };
        let ordering = rule.direction.apply(ordering);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Filtered and sorted rows, before pagination.
pub(crate) fn ordered<'a>(records: &'a [Record], state: &ViewState) -> Vec<&'a Record> {
    let mut rows = filter(records, state);
    sort(&mut rows, &state.sort);
    rows
}

pub(crate) fn derive<'a>(records: &'a [Record], state: &ViewState) -> DerivedView<'a> {
    let rows = ordered(records, state);
    let filtered_count = rows.len();
    let pagination = state.pagination;
    let page_size = pagination.page_size();
    let page_index = pagination.effective_index(filtered_count);

    let rows = rows
        .into_iter()
        .skip(page_index * page_size)
        .take(page_size)
        .map(|record| DerivedRow {
            record,
            selected: state.selection.contains(&record.id),
        })
        .collect();

    DerivedView {
        rows,
        columns: state.layout.visible_columns(),
        filtered_count,
        total_count: records.len(),
        page_index,
        page_count: pagination.page_count(filtered_count),
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Major, RecordId, Status};

    fn record(id: u32, name: &str, age: i64) -> Record {
        Record {
            id: RecordId::new(id),
            name: name.to_string(),
            email: format!("s{id}@example.edu"),
            phone: "(555) 123-4567".to_string(),
            age,
            grade: 70,
            major: Major::Physics,
            status: Status::Active,
        }
    }

    fn ids(rows: &[&Record]) -> Vec<u32> {
        rows.iter().map(|record| record.id.get()).collect()
    }

    #[test]
    fn test_sort_is_stable_per_direction() {
        let records = vec![record(1, "A", 30), record(2, "B", 20), record(3, "C", 20)];
        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, &[SortRule::ascending(ColumnId::Age)]);
        assert_eq!(ids(&rows), vec![2, 3, 1]);

        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, &[SortRule::descending(ColumnId::Age)]);
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_secondary_key_breaks_ties() {
        let records = vec![record(1, "zed", 20), record(2, "Amy", 30), record(3, "bob", 20)];
        let mut rows: Vec<&Record> = records.iter().collect();
        sort(
            &mut rows,
            &[SortRule::ascending(ColumnId::Age), SortRule::ascending(ColumnId::Name)],
        );
        assert_eq!(ids(&rows), vec![3, 1, 2]);
    }

    #[test]
    fn test_derive_pages() {
        let records: Vec<Record> = (1..=5).map(|id| record(id, "Name", 20)).collect();
        let mut state = ViewState::new(2);
        state.pagination.go_to(2, records.len());
        let view = derive(&records, &state);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.row_range(), Some((5, 5)));
        assert_eq!(view.total_count, 5);
    }
}
