//! CSV export through the engine.

use chrono::NaiveDate;
use roster_core::{EngineOptions, ExportScope, RosterGrid};
use roster_model::{ColumnId, Major, Record, RecordId, Status};

fn grid() -> RosterGrid {
    let records = vec![
        Record {
            id: RecordId::new(1),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.edu".to_string(),
            phone: "(555) 123-4567".to_string(),
            age: 28,
            grade: 97,
            major: Major::Mathematics,
            status: Status::Graduated,
        },
        Record {
            id: RecordId::new(2),
            name: "Alan O'Brien, Jr.".to_string(),
            email: "alan@example.edu".to_string(),
            phone: "(555) 765-4321".to_string(),
            age: 19,
            grade: 64,
            major: Major::ComputerScience,
            status: Status::Active,
        },
        Record {
            id: RecordId::new(3),
            name: "Grace Hopper".to_string(),
            email: "grace@example.edu".to_string(),
            phone: "(555) 222-3333".to_string(),
            age: 22,
            grade: 88,
            major: Major::Physics,
            status: Status::Active,
        },
    ];
    RosterGrid::new(records, EngineOptions::default().with_default_page_size(1))
}

#[test]
fn exports_all_filtered_rows_across_pages() {
    let mut grid = grid();
    grid.toggle_sort(ColumnId::Grade);
    grid.toggle_sort(ColumnId::Grade);
    grid.set_column_visibility(ColumnId::Phone, false);
    grid.set_column_visibility(ColumnId::Email, false);

    let csv = grid.export_csv(ExportScope::AllFiltered).unwrap();
    insta::assert_snapshot!(csv, @r#"
    ID,Name,Age,Grade,Major,Status
    1,Ada Lovelace,28,97,Mathematics,Graduated
    3,Grace Hopper,22,88,Physics,Active
    2,"Alan O'Brien, Jr.",19,64,Computer Science,Active
    "#);
}

#[test]
fn exports_selected_rows_in_derived_order() {
    let mut grid = grid();
    grid.set_field_filter(ColumnId::Status, ["Active"]);
    grid.toggle_sort(ColumnId::Name);
    grid.set_selected(RecordId::new(3), true);
    grid.set_selected(RecordId::new(2), true);
    grid.set_selected(RecordId::new(1), true);

    let rows: Vec<u32> = grid
        .export_rows(ExportScope::Selected)
        .iter()
        .map(|record| record.id.get())
        .collect();
    assert_eq!(rows, vec![2, 3]);
}

#[test]
fn export_columns_follow_layout_and_skip_marker() {
    let mut grid = grid();
    grid.set_column_order(&[ColumnId::Select, ColumnId::Status, ColumnId::Name]);
    let columns = grid.export_columns();
    assert_eq!(columns[0], ColumnId::Status);
    assert!(!columns.contains(&ColumnId::Select));
}

#[test]
fn writes_dated_file() {
    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let path = grid()
        .export_csv_file(ExportScope::AllFiltered, dir.path(), date)
        .unwrap();
    assert!(path.ends_with("students-2025-01-31.csv"));
    let contents = std::fs::read_to_string(path).unwrap();
    assert_eq!(contents.lines().count(), 4);
}
