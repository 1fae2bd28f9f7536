//! Declarative column descriptor table.
//!
//! Every grid column is described once here: its label, the kind of value it
//! holds, whether it can be edited and which validation rule applies. Sorting,
//! filtering, validation and CSV export all interpret this table instead of
//! carrying per-column code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Major, ModelError, Status};

/// Identifier of a grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    /// Row selection checkbox. Carries no record data.
    Select,
    Id,
    Name,
    Email,
    Phone,
    Age,
    Grade,
    Major,
    Status,
}

impl ColumnId {
    /// All columns in default display order.
    pub const ALL: [ColumnId; 9] = [
        ColumnId::Select,
        ColumnId::Id,
        ColumnId::Name,
        ColumnId::Email,
        ColumnId::Phone,
        ColumnId::Age,
        ColumnId::Grade,
        ColumnId::Major,
        ColumnId::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Select => "select",
            ColumnId::Id => "id",
            ColumnId::Name => "name",
            ColumnId::Email => "email",
            ColumnId::Phone => "phone",
            ColumnId::Age => "age",
            ColumnId::Grade => "grade",
            ColumnId::Major => "major",
            ColumnId::Status => "status",
        }
    }

    pub fn descriptor(&self) -> &'static ColumnDescriptor {
        &COLUMNS[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.descriptor().label
    }

    pub fn kind(&self) -> ColumnKind {
        self.descriptor().kind
    }

    pub fn is_editable(&self) -> bool {
        self.descriptor().editable
    }

    /// Columns backed by record data (everything except the selection marker).
    pub fn is_data(&self) -> bool {
        self.kind() != ColumnKind::Marker
    }

    /// Categorical columns accept per-field inclusion filters.
    pub fn is_categorical(&self) -> bool {
        self.kind() == ColumnKind::Enum
    }

    /// Allowed values of a categorical column, empty for other kinds.
    pub fn choices(&self) -> &'static [&'static str] {
        match self.descriptor().rule {
            FieldRule::OneOf(values) => values,
            _ => &[],
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = ModelError;

    /// Parse a column from its identifier or its label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ColumnId::ALL
            .into_iter()
            .find(|column| {
                column.as_str().eq_ignore_ascii_case(trimmed)
                    || (!column.label().is_empty() && column.label().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}

/// Kind of value stored in a column; drives comparison and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Marker,
    Identifier,
    Text,
    Integer,
    Enum,
}

/// Validation rule attached to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// No constraint; always valid.
    Unchecked,
    PersonName,
    Email,
    Phone,
    /// Closed integer range.
    Bounded { min: i64, max: i64 },
    /// Membership in a fixed label set.
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub editable: bool,
    pub rule: FieldRule,
}

pub const AGE_MIN: i64 = 16;
pub const AGE_MAX: i64 = 100;
pub const GRADE_MIN: i64 = 0;
pub const GRADE_MAX: i64 = 100;

/// Descriptor table, indexed by `ColumnId as usize`.
pub static COLUMNS: [ColumnDescriptor; 9] = [
    ColumnDescriptor {
        id: ColumnId::Select,
        label: "",
        kind: ColumnKind::Marker,
        editable: false,
        rule: FieldRule::Unchecked,
    },
    ColumnDescriptor {
        id: ColumnId::Id,
        label: "ID",
        kind: ColumnKind::Identifier,
        editable: false,
        rule: FieldRule::Unchecked,
    },
    ColumnDescriptor {
        id: ColumnId::Name,
        label: "Name",
        kind: ColumnKind::Text,
        editable: true,
        rule: FieldRule::PersonName,
    },
    ColumnDescriptor {
        id: ColumnId::Email,
        label: "Email",
        kind: ColumnKind::Text,
        editable: true,
        rule: FieldRule::Email,
    },
    ColumnDescriptor {
        id: ColumnId::Phone,
        label: "Phone",
        kind: ColumnKind::Text,
        editable: true,
        rule: FieldRule::Phone,
    },
    ColumnDescriptor {
        id: ColumnId::Age,
        label: "Age",
        kind: ColumnKind::Integer,
        editable: true,
        rule: FieldRule::Bounded {
            min: AGE_MIN,
            max: AGE_MAX,
        },
    },
    ColumnDescriptor {
        id: ColumnId::Grade,
        label: "Grade",
        kind: ColumnKind::Integer,
        editable: true,
        rule: FieldRule::Bounded {
            min: GRADE_MIN,
            max: GRADE_MAX,
        },
    },
    ColumnDescriptor {
        id: ColumnId::Major,
        label: "Major",
        kind: ColumnKind::Enum,
        editable: true,
        rule: FieldRule::OneOf(&Major::LABELS),
    },
    ColumnDescriptor {
        id: ColumnId::Status,
        label: "Status",
        kind: ColumnKind::Enum,
        editable: true,
        rule: FieldRule::OneOf(&Status::LABELS),
    },
];
