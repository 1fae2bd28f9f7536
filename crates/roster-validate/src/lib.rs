//! Field validation for roster cell edits.
//!
//! Validation is a pure function of (column, raw string). The rule for each
//! column comes from the model's descriptor table, so adding a column means
//! adding a descriptor, not a new code path here.
//!
//! # Example
//!
//! ```
//! use roster_model::ColumnId;
//! use roster_validate::{Validation, validate};
//!
//! assert!(validate(ColumnId::Age, "21").is_valid());
//! assert_eq!(
//!     validate(ColumnId::Age, "15"),
//!     Validation::Invalid("Age must be between 16 and 100".to_string())
//! );
//! ```

mod checks;

use roster_model::{ColumnId, FieldRule, Record};

pub use checks::contact::{PHONE_MAX_DIGITS, PHONE_MIN_DIGITS};
pub use checks::name::{NAME_MAX_CHARS, NAME_MIN_CHARS};

/// Outcome of validating one raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(message) => Some(message),
        }
    }

    fn from_check(result: Option<String>) -> Self {
        match result {
            Some(message) => Validation::Invalid(message),
            None => Validation::Valid,
        }
    }
}

/// How strictly person names are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameStrictness {
    /// Character set and length only.
    #[default]
    Lenient,
    /// Additionally require at least two whitespace-separated tokens.
    FullName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub name_strictness: NameStrictness,
}

impl ValidationOptions {
    pub fn with_name_strictness(mut self, strictness: NameStrictness) -> Self {
        self.name_strictness = strictness;
        self
    }
}

/// A failing field found by [`Validator::validate_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub column: ColumnId,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Validate a raw value for a column. Columns without a rule always pass.
    pub fn validate(&self, column: ColumnId, raw: &str) -> Validation {
        let descriptor = column.descriptor();
        let label = descriptor.label;
        let result = match descriptor.rule {
            FieldRule::Unchecked => None,
            FieldRule::PersonName => checks::name::check(label, raw, self.options.name_strictness),
            FieldRule::Email => checks::contact::check_email(label, raw),
            FieldRule::Phone => checks::contact::check_phone(label, raw),
            FieldRule::Bounded { min, max } => checks::integer::check(label, raw, min, max),
            FieldRule::OneOf(allowed) => checks::choice::check(label, raw, allowed),
        };
        Validation::from_check(result)
    }

    /// Check every editable field of a record.
    pub fn validate_record(&self, record: &Record) -> Vec<FieldIssue> {
        ColumnId::ALL
            .into_iter()
            .filter(ColumnId::is_editable)
            .filter_map(|column| match self.validate(column, &record.display(column)) {
                Validation::Valid => None,
                Validation::Invalid(message) => Some(FieldIssue { column, message }),
            })
            .collect()
    }
}

/// Validate with default (lenient) options.
pub fn validate(column: ColumnId, raw: &str) -> Validation {
    Validator::default().validate(column, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_columns_always_pass() {
        assert!(validate(ColumnId::Id, "").is_valid());
        assert!(validate(ColumnId::Select, "anything").is_valid());
    }

    #[test]
    fn test_full_name_strictness() {
        let strict =
            Validator::new(ValidationOptions::default().with_name_strictness(NameStrictness::FullName));
        assert!(validate(ColumnId::Name, "Cher").is_valid());
        assert_eq!(
            strict.validate(ColumnId::Name, "Cher").message(),
            Some("Name must include a first and last name")
        );
        assert!(strict.validate(ColumnId::Name, "Marie Curie").is_valid());
    }
}
