//! Data model for the student roster grid.
//!
//! - [`Record`] and its typed [`CellValue`] projection
//! - [`ColumnId`] and the declarative [`ColumnDescriptor`] table
//! - categorical enumerations ([`Major`], [`Status`]) and [`SortRule`]
//! - the [`RecordGenerator`] seam used to seed or reset the record set

pub mod column;
pub mod enums;
pub mod error;
pub mod generator;
pub mod ids;
pub mod record;
pub mod sort;

pub use column::{
    AGE_MAX, AGE_MIN, COLUMNS, ColumnDescriptor, ColumnId, ColumnKind, FieldRule, GRADE_MAX,
    GRADE_MIN,
};
pub use enums::{Major, SortDirection, Status};
pub use error::{ModelError, Result};
pub use generator::RecordGenerator;
pub use ids::RecordId;
pub use record::{CellValue, Record};
pub use sort::SortRule;
