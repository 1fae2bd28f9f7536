//! Integration tests for field validation rules.

use proptest::prelude::*;
use roster_model::{ColumnId, Major, Record, RecordId, Status};
use roster_validate::{FieldIssue, Validation, Validator, validate};

fn message(column: ColumnId, raw: &str) -> String {
    validate(column, raw)
        .message()
        .map(str::to_string)
        .unwrap_or_default()
}

#[test]
fn age_bounds_are_inclusive() {
    assert!(validate(ColumnId::Age, "16").is_valid());
    assert!(validate(ColumnId::Age, "100").is_valid());
    assert_eq!(message(ColumnId::Age, "15"), "Age must be between 16 and 100");
    assert_eq!(message(ColumnId::Age, "101"), "Age must be between 16 and 100");
}

#[test]
fn unparsable_integers_are_rejected_not_defaulted() {
    assert_eq!(message(ColumnId::Grade, "abc"), "Grade must be a whole number");
    assert_eq!(message(ColumnId::Grade, "12.5"), "Grade must be a whole number");
    assert_eq!(message(ColumnId::Grade, "   "), "Grade is required");
    assert!(validate(ColumnId::Grade, " 0 ").is_valid());
}

#[test]
fn names_check_length_and_characters() {
    assert!(validate(ColumnId::Name, "Jean-Luc O'Neil Jr.").is_valid());
    assert!(validate(ColumnId::Name, "Zoë Åberg").is_valid());
    assert_eq!(message(ColumnId::Name, "  "), "Name is required");
    assert_eq!(
        message(ColumnId::Name, "J"),
        "Name must be between 2 and 50 characters"
    );
    assert_eq!(
        message(ColumnId::Name, &"a".repeat(51)),
        "Name must be between 2 and 50 characters"
    );
    assert_eq!(
        message(ColumnId::Name, "R2-D2"),
        "Name may only contain letters, spaces, apostrophes, hyphens and periods"
    );
}

#[test]
fn emails_need_local_domain_and_tld() {
    assert!(validate(ColumnId::Email, "first.last+tag@uni.example.edu").is_valid());
    for bad in ["", "plain", "a@b", "@example.com", "a b@example.com", "a@example.c"] {
        assert!(!validate(ColumnId::Email, bad).is_valid(), "accepted {bad:?}");
    }
}

#[test]
fn phones_count_digits_only() {
    assert!(validate(ColumnId::Phone, "(555) 123-4567").is_valid());
    assert!(validate(ColumnId::Phone, "+44 20 7946 0958").is_valid());
    assert_eq!(
        message(ColumnId::Phone, "555-1234"),
        "Phone must have between 10 and 15 digits"
    );
    assert_eq!(
        message(ColumnId::Phone, "555-123-4567 ext"),
        "Phone may only contain digits, spaces, dashes, dots and parentheses"
    );
}

#[test]
fn enumerations_check_membership() {
    assert!(validate(ColumnId::Major, "physics").is_valid());
    assert!(validate(ColumnId::Status, "Suspended").is_valid());
    assert_eq!(
        message(ColumnId::Status, "Expelled"),
        "Status must be one of: Active, Inactive, Graduated, Suspended"
    );
}

#[test]
fn validate_record_reports_each_failing_field() {
    let record = Record {
        id: RecordId::new(1),
        name: "X".to_string(),
        email: "nope".to_string(),
        phone: "(555) 123-4567".to_string(),
        age: 12,
        grade: 90,
        major: Major::Biology,
        status: Status::Active,
    };
    let issues = Validator::default().validate_record(&record);
    let columns: Vec<ColumnId> = issues.iter().map(|issue| issue.column).collect();
    assert_eq!(columns, vec![ColumnId::Name, ColumnId::Email, ColumnId::Age]);
    assert_eq!(
        issues[2],
        FieldIssue {
            column: ColumnId::Age,
            message: "Age must be between 16 and 100".to_string(),
        }
    );
}

proptest! {
    #[test]
    fn validation_is_total(column in prop::sample::select(ColumnId::ALL.to_vec()), raw in ".*") {
        let result = validate(column, &raw);
        if let Validation::Invalid(message) = result {
            prop_assert!(!message.is_empty());
        }
    }

    #[test]
    fn integers_in_range_pass(value in 0i64..=100) {
        prop_assert!(validate(ColumnId::Grade, &value.to_string()).is_valid());
    }
}
