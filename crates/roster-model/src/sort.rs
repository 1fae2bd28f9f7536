use serde::{Deserialize, Serialize};

use crate::{ColumnId, SortDirection};

/// One (column, direction) pair. A sequence of rules encodes priority,
/// first rule being the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortRule {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl SortRule {
    pub fn ascending(column: ColumnId) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: ColumnId) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}
