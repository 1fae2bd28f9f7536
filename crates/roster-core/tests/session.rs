//! Sessions backed by a directory store.

use roster_core::{EngineOptions, Session};
use roster_fixtures::RandomRoster;
use roster_model::{ColumnId, Record, RecordId};
use roster_persistence::{FileStore, KvStore, RECORDS_KEY, VIEW_SETTINGS_KEY};

fn options() -> EngineOptions {
    EngineOptions::default().with_record_count(12)
}

#[test]
fn edits_persist_across_processes() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = RandomRoster::with_seed(11);

    let mut session = Session::open(FileStore::new(dir.path()), options(), &mut generator);
    let id = session.grid().records()[0].id;
    session.update(|grid| {
        grid.begin_edit(id, ColumnId::Grade);
        grid.stage_edit_value("100");
        grid.commit_edit()
    })
    .unwrap();
    session.update(|grid| grid.move_column(ColumnId::Grade, ColumnId::Id));
    drop(session);

    let mut unused = |_: usize| -> Vec<Record> { Vec::new() };
    let reopened = Session::open(FileStore::new(dir.path()), options(), &mut unused);
    assert_eq!(reopened.grid().record(id).unwrap().grade, 100);
    assert_eq!(reopened.grid().state().layout().order()[1], ColumnId::Grade);
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set(VIEW_SETTINGS_KEY, b"[1, 2").unwrap();
    store.set(RECORDS_KEY, b"not json either").unwrap();

    let mut generator = RandomRoster::with_seed(3);
    let session = Session::open(store, options(), &mut generator);
    assert_eq!(session.grid().records().len(), 12);
    assert_eq!(session.grid().state().pagination().page_size(), 10);
}

#[test]
fn reset_clears_store_and_regenerates() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = RandomRoster::with_seed(5);
    let mut session = Session::open(FileStore::new(dir.path()), options(), &mut generator);
    session.update(|grid| {
        grid.set_selected(RecordId::new(1), true);
        grid.toggle_sort(ColumnId::Age);
    });

    let mut fresh = RandomRoster::with_seed(6).starting_at(500);
    let failures = session.reset(&mut fresh);
    assert!(failures.is_empty());
    assert!(session.grid().state().selection().is_empty());
    assert!(session.grid().state().sort_rules().is_empty());
    assert_eq!(session.grid().records()[0].id, RecordId::new(500));
}
