//! Integration tests for CSV export.

use chrono::NaiveDate;
use proptest::prelude::*;
use roster_model::{ColumnId, Major, Record, RecordId, Status};
use roster_output::{to_csv, write_csv_file};

fn record(id: u32, name: &str, email: &str, phone: &str) -> Record {
    Record {
        id: RecordId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        age: 19,
        grade: 91,
        major: Major::ComputerScience,
        status: Status::Graduated,
    }
}

#[test]
fn exports_labels_and_escapes_text_fields() {
    let rows = vec![
        record(1, "Ada Lovelace", "ada@example.edu", "555-010-0001"),
        record(2, "Smith, John", "john@example.edu", "555-010-0002"),
        record(3, "Dwayne \"The Rock\"", "rock@example.edu", "555-010-0003"),
    ];
    let csv = to_csv(&rows, &ColumnId::ALL).unwrap();
    insta::assert_snapshot!(csv, @r#"
    ID,Name,Email,Phone,Age,Grade,Major,Status
    1,Ada Lovelace,ada@example.edu,555-010-0001,19,91,Computer Science,Graduated
    2,"Smith, John",john@example.edu,555-010-0002,19,91,Computer Science,Graduated
    3,"Dwayne ""The Rock""",rock@example.edu,555-010-0003,19,91,Computer Science,Graduated
    "#);
}

#[test]
fn respects_column_selection_and_order() {
    let rows = vec![record(9, "Grace Hopper", "grace@example.edu", "555-010-0009")];
    let csv = to_csv(&rows, &[ColumnId::Grade, ColumnId::Name]).unwrap();
    assert_eq!(csv, "Grade,Name\n91,Grace Hopper\n");
}

#[test]
fn writes_date_stamped_file() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![record(1, "Ada Lovelace", "ada@example.edu", "555-010-0001")];
    let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

    let path = write_csv_file(dir.path(), &rows, &[ColumnId::Id, ColumnId::Name], date).unwrap();

    assert_eq!(path.file_name().unwrap(), "students-2025-01-31.csv");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "ID,Name\n1,Ada Lovelace\n");
    assert!(!dir.path().join("students-2025-01-31.csv.tmp").exists());
}

proptest! {
    #[test]
    fn csv_round_trips_through_a_reader(
        name in "[a-zA-Z ,\"\n]{0,20}",
        email in "[a-z@.,\"]{0,20}",
        phone in "[0-9 ()\\-\n]{0,16}",
    ) {
        let rows = vec![record(4, &name, &email, &phone)];
        let columns = [ColumnId::Id, ColumnId::Name, ColumnId::Email, ColumnId::Phone, ColumnId::Major];
        let csv = to_csv(&rows, &columns).unwrap();

        let mut reader = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        prop_assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["ID", "Name", "Email", "Phone", "Major"]);

        let parsed: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(parsed.len(), 1);
        let fields: Vec<&str> = parsed[0].iter().collect();
        prop_assert_eq!(fields, vec!["4", name.as_str(), email.as_str(), phone.as_str(), "Computer Science"]);
    }
}
