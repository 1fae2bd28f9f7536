use thiserror::Error;

use crate::ColumnId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("unknown major: {0}")]
    UnknownMajor(String),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("column {0} cannot be edited")]
    NotEditable(ColumnId),
    #[error("invalid integer for {column}: {value}")]
    InvalidInteger { column: ColumnId, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
