//! Property tests for engine invariants.

use std::collections::BTreeSet;

use proptest::prelude::*;
use roster_core::{EngineOptions, RosterGrid};
use roster_fixtures::RandomRoster;
use roster_model::{ColumnId, Record, RecordGenerator, RecordId, SortRule};

fn data_column() -> impl Strategy<Value = ColumnId> {
    prop::sample::select(
        ColumnId::ALL
            .into_iter()
            .filter(ColumnId::is_data)
            .collect::<Vec<_>>(),
    )
}

fn grid(seed: u64, count: usize, page_size: usize) -> RosterGrid {
    let records = RandomRoster::with_seed(seed).generate(count);
    RosterGrid::new(records, EngineOptions::default().with_default_page_size(page_size))
}

proptest! {
    #[test]
    fn toggling_a_new_column_three_times_restores_rules(
        seed in any::<u64>(),
        existing in prop::collection::vec(data_column(), 0..4),
        column in data_column(),
    ) {
        let mut grid = grid(seed, 5, 10);
        for other in existing.iter().filter(|c| **c != column) {
            if !grid.state().sort_rules().iter().any(|rule| rule.column == *other) {
                grid.toggle_sort(*other);
            }
        }
        let before: Vec<SortRule> = grid.state().sort_rules().to_vec();
        for _ in 0..3 {
            grid.toggle_sort(column);
        }
        prop_assert_eq!(grid.state().sort_rules(), before.as_slice());
    }

    #[test]
    fn sorting_is_stable(
        seed in any::<u64>(),
        count in 0usize..40,
        column in data_column(),
        descending in any::<bool>(),
    ) {
        let mut grid = grid(seed, count, 100);
        grid.toggle_sort(column);
        if descending {
            grid.toggle_sort(column);
        }
        let rows = grid.ordered_rows();
        let position = |record: &Record| {
            grid.records().iter().position(|r| r.id == record.id).unwrap_or(usize::MAX)
        };
        for pair in rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (left, right) = (a.value(column), b.value(column));
            if let (Some(left), Some(right)) = (left, right) {
                if left.compare(&right).is_eq() {
                    prop_assert!(position(a) < position(b));
                }
            }
        }
    }

    #[test]
    fn multi_key_sorting_is_stable(
        seed in any::<u64>(),
        count in 0usize..60,
        first in data_column(),
        second in data_column(),
        first_descending in any::<bool>(),
        second_descending in any::<bool>(),
    ) {
        prop_assume!(first != second);
        let rule = |column, descending| {
            if descending {
                SortRule::descending(column)
            } else {
                SortRule::ascending(column)
            }
        };
        let mut grid = grid(seed, count, 100);
        grid.set_sort_rules(&[rule(first, first_descending), rule(second, second_descending)]);
        prop_assert_eq!(grid.state().sort_rules().len(), 2);

        let rows = grid.ordered_rows();
        let position = |record: &Record| {
            grid.records().iter().position(|r| r.id == record.id).unwrap_or(usize::MAX)
        };
        let ties = |a: &Record, b: &Record, column| match (a.value(column), b.value(column)) {
            (Some(left), Some(right)) => left.compare(&right).is_eq(),
            _ => false,
        };
        for pair in rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if ties(a, b, first) && ties(a, b, second) {
                prop_assert!(position(a) < position(b));
            }
        }
    }

    #[test]
    fn derive_is_idempotent(
        seed in any::<u64>(),
        page_size in 1usize..15,
        column in data_column(),
        needle in "[a-z]{0,2}",
        page in 0usize..10,
    ) {
        let mut grid = grid(seed, 30, page_size);
        grid.toggle_sort(column);
        grid.set_global_filter(&needle);
        grid.go_to_page(page);
        prop_assert_eq!(grid.derive(), grid.derive());
    }

    #[test]
    fn deleted_ids_vanish_everywhere(
        seed in any::<u64>(),
        picks in prop::collection::btree_set(1u32..=25, 0..10),
        selected in prop::collection::btree_set(1u32..=25, 0..10),
    ) {
        let mut grid = grid(seed, 20, 7);
        for id in &selected {
            grid.set_selected(RecordId::new(*id), true);
        }
        let ids: BTreeSet<RecordId> = picks.iter().copied().map(RecordId::new).collect();
        grid.delete_records(&ids);

        prop_assert!(grid.records().iter().all(|record| !ids.contains(&record.id)));
        prop_assert!(grid.selected_ids().is_disjoint(&ids));
        prop_assert!(grid.derive().rows.iter().all(|row| !ids.contains(&row.record.id)));
    }

    #[test]
    fn page_index_never_exceeds_last_page(
        seed in any::<u64>(),
        page_size in 0usize..12,
        moves in prop::collection::vec(any::<bool>(), 0..20),
        needle in "[a-z]?",
    ) {
        let mut grid = grid(seed, 25, 10);
        grid.set_page_size(page_size);
        for forward in moves {
            if forward { grid.next_page() } else { grid.previous_page() }
        }
        grid.set_global_filter(&needle);
        let view = grid.derive();
        prop_assert!(grid.page_index() < grid.page_count());
        prop_assert_eq!(view.page_index, grid.page_index());
        prop_assert!(view.rows.len() <= view.page_size);
    }

    #[test]
    fn invalid_commits_leave_records_unchanged(
        seed in any::<u64>(),
        age in prop_oneof![-1000i64..16, 101i64..1000],
    ) {
        let mut grid = grid(seed, 3, 10);
        let id = grid.records()[0].id;
        let before = grid.records().to_vec();
        grid.begin_edit(id, ColumnId::Age);
        grid.stage_edit_value(&age.to_string());
        prop_assert!(grid.commit_edit().is_err());
        prop_assert_eq!(grid.records(), before.as_slice());
        let cursor = grid.state().edit_cursor();
        prop_assert!(cursor.is_some_and(|cursor| cursor.error.as_deref().is_some_and(|m| !m.is_empty())));
    }
}
