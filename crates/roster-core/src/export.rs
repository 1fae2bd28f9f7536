//! CSV export of the filtered or selected rows.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use roster_model::{ColumnId, Record};

use crate::engine::RosterGrid;

/// Which rows an export covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportScope {
    /// Every filtered row in sorted order, across all pages.
    #[default]
    AllFiltered,
    /// Selected rows only, in derived order.
    Selected,
}

impl RosterGrid {
    pub fn export_rows(&self, scope: ExportScope) -> Vec<&Record> {
        let rows = self.ordered_rows();
        match scope {
            ExportScope::AllFiltered => rows,
            ExportScope::Selected => rows
                .into_iter()
                .filter(|record| self.selected_ids().contains(&record.id))
                .collect(),
        }
    }

    /// Visible data columns in layout order.
    pub fn export_columns(&self) -> Vec<ColumnId> {
        self.state()
            .layout()
            .visible_columns()
            .into_iter()
            .filter(ColumnId::is_data)
            .collect()
    }

    pub fn export_csv(&self, scope: ExportScope) -> roster_output::Result<String> {
        roster_output::to_csv(self.export_rows(scope), &self.export_columns())
    }

    pub fn export_csv_file(
        &self,
        scope: ExportScope,
        dir: &Path,
        date: NaiveDate,
    ) -> roster_output::Result<PathBuf> {
        roster_output::write_csv_file(dir, self.export_rows(scope), &self.export_columns(), date)
    }
}
