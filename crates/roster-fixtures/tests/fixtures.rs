//! Generated fixtures must satisfy the same rules as user edits.

use std::collections::HashSet;

use roster_fixtures::RandomRoster;
use roster_model::RecordGenerator;
use roster_validate::{NameStrictness, ValidationOptions, Validator};

#[test]
fn generated_records_pass_strict_validation() {
    let validator =
        Validator::new(ValidationOptions::default().with_name_strictness(NameStrictness::FullName));
    let records = RandomRoster::with_seed(42).generate(500);

    for record in &records {
        let issues = validator.validate_record(record);
        assert!(issues.is_empty(), "record {} failed: {issues:?}", record.id);
    }
}

#[test]
fn identifiers_are_unique() {
    let records = RandomRoster::with_seed(3).generate(250);
    let ids: HashSet<_> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn seeded_generators_are_deterministic() {
    let a = RandomRoster::with_seed(99).generate(20);
    let b = RandomRoster::with_seed(99).generate(20);
    assert_eq!(a, b);
}
