use roster_model::{ColumnId, RecordId};
use thiserror::Error;

/// Rejection of a cell edit. The edit cursor stays open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{message}")]
    Invalid { column: ColumnId, message: String },
}

impl EditError {
    pub fn message(&self) -> &str {
        match self {
            EditError::Invalid { message, .. } => message,
        }
    }
}

/// Result of [`commit_edit`](crate::RosterGrid::commit_edit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed { record: RecordId, column: ColumnId },
    /// No edit was open.
    NoActiveEdit,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The request named no records.
    NothingSelected,
    /// Number of records actually removed (unknown ids are skipped).
    Deleted(usize),
}
