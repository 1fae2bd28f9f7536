use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ColumnId, ColumnKind, Major, ModelError, RecordId, Result, Status};

/// One student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i64,
    pub grade: i64,
    pub major: Major,
    pub status: Status,
}

/// Typed value of a single cell, as seen by sorting and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Choice(&'static str),
}

impl CellValue {
    /// Natural ordering: numeric for integers, case-insensitive lexicographic
    /// for text (exact comparison breaks ties), label order for choices.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => compare_text(a, b),
            (CellValue::Choice(a), CellValue::Choice(b)) => compare_text(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Integer(_) => 0,
            CellValue::Text(_) => 1,
            CellValue::Choice(_) => 2,
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Choice(label) => f.write_str(label),
        }
    }
}

impl Record {
    /// Value of a data column; `None` for the selection marker.
    pub fn value(&self, column: ColumnId) -> Option<CellValue> {
        let value = match column {
            ColumnId::Select => return None,
            ColumnId::Id => CellValue::Integer(i64::from(self.id.get())),
            ColumnId::Name => CellValue::Text(self.name.clone()),
            ColumnId::Email => CellValue::Text(self.email.clone()),
            ColumnId::Phone => CellValue::Text(self.phone.clone()),
            ColumnId::Age => CellValue::Integer(self.age),
            ColumnId::Grade => CellValue::Integer(self.grade),
            ColumnId::Major => CellValue::Choice(self.major.as_str()),
            ColumnId::Status => CellValue::Choice(self.status.as_str()),
        };
        Some(value)
    }

    /// Display string of a column, empty for the selection marker.
    pub fn display(&self, column: ColumnId) -> String {
        self.value(column)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    /// Borrowed text of a text or choice column, matched by categorical filters.
    pub fn text(&self, column: ColumnId) -> Option<&str> {
        match column {
            ColumnId::Name => Some(&self.name),
            ColumnId::Email => Some(&self.email),
            ColumnId::Phone => Some(&self.phone),
            ColumnId::Major => Some(self.major.as_str()),
            ColumnId::Status => Some(self.status.as_str()),
            _ => None,
        }
    }

    /// Write a raw string into an editable column, converting it to the
    /// column's semantic type.
    ///
    /// Callers validate first; this only fails when the string cannot be
    /// converted at all.
    pub fn assign(&mut self, column: ColumnId, raw: &str) -> Result<()> {
        if !column.is_editable() {
            return Err(ModelError::NotEditable(column));
        }
        let trimmed = raw.trim();
        match column.kind() {
            ColumnKind::Integer => {
                let parsed =
                    trimmed
                        .parse::<i64>()
                        .map_err(|_| ModelError::InvalidInteger {
                            column,
                            value: raw.to_string(),
                        })?;
                match column {
                    ColumnId::Age => self.age = parsed,
                    ColumnId::Grade => self.grade = parsed,
                    _ => return Err(ModelError::NotEditable(column)),
                }
            }
            ColumnKind::Enum => match column {
                ColumnId::Major => self.major = trimmed.parse()?,
                ColumnId::Status => self.status = trimmed.parse()?,
                _ => return Err(ModelError::NotEditable(column)),
            },
            ColumnKind::Text => match column {
                ColumnId::Name => self.name = collapse_whitespace(trimmed),
                ColumnId::Email => self.email = trimmed.to_string(),
                ColumnId::Phone => self.phone = trimmed.to_string(),
                _ => return Err(ModelError::NotEditable(column)),
            },
            ColumnKind::Marker | ColumnKind::Identifier => {
                return Err(ModelError::NotEditable(column));
            }
        }
        Ok(())
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
