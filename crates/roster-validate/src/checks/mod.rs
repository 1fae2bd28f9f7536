//! Validation check modules.
//!
//! Each module checks one [`FieldRule`](roster_model::FieldRule) and returns
//! `Some(message)` when the raw value is rejected.

pub(crate) mod choice;
pub(crate) mod contact;
pub(crate) mod integer;
pub(crate) mod name;
