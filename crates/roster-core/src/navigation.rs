//! Keyboard navigation over the derived page.
//!
//! Focus is a pair of indices into the current page rows and visible
//! columns. It never refers to rendered output; hosts map it to whatever
//! widget they draw.

use roster_model::{ColumnId, RecordId};

use crate::engine::RosterGrid;
use crate::state::FocusedCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// First visible column.
    Home,
    /// Last visible column.
    End,
}

impl RosterGrid {
    /// Current focus, if any, already clamped to the page bounds.
    pub fn focus(&self) -> Option<FocusedCell> {
        self.state().focus()
    }

    /// Move focus one step. With no focus yet, lands on the first cell.
    pub fn move_focus(&mut self, direction: Direction) {
        let Some((rows, columns)) = self.page_bounds() else {
            self.set_focus(None);
            return;
        };
        let next = match self.focus() {
            None => FocusedCell::new(0, 0),
            Some(FocusedCell { row, column }) => match direction {
                Direction::Up => FocusedCell::new(row.saturating_sub(1), column),
                Direction::Down => FocusedCell::new((row + 1).min(rows - 1), column),
                Direction::Left => FocusedCell::new(row, column.saturating_sub(1)),
                Direction::Right => FocusedCell::new(row, (column + 1).min(columns - 1)),
                Direction::Home => FocusedCell::new(row, 0),
                Direction::End => FocusedCell::new(row, columns - 1),
            },
        };
        self.set_focus(Some(next));
    }

    /// Focus a cell by page indices, clamped to the page bounds.
    pub fn focus_cell(&mut self, row: usize, column: usize) {
        let focus = self
            .page_bounds()
            .map(|(rows, columns)| FocusedCell::new(row.min(rows - 1), column.min(columns - 1)));
        self.set_focus(focus);
    }

    pub fn clear_focus(&mut self) {
        self.set_focus(None);
    }

    /// Record id and column under the focus.
    pub fn focused_record(&self) -> Option<(RecordId, ColumnId)> {
        let focus = self.focus()?;
        let view = self.derive();
        let row = view.rows.get(focus.row)?;
        let column = view.columns.get(focus.column)?;
        Some((row.record.id, *column))
    }

    /// Open the editor on the focused cell.
    pub fn begin_edit_at_focus(&mut self) -> bool {
        match self.focused_record() {
            Some((id, column)) => self.begin_edit(id, column),
            None => false,
        }
    }

    /// Re-fit focus after the page or visible columns changed.
    pub(crate) fn clamp_focus(&mut self) {
        let Some(focus) = self.focus() else {
            return;
        };
        let clamped = self.page_bounds().map(|(rows, columns)| {
            FocusedCell::new(focus.row.min(rows - 1), focus.column.min(columns - 1))
        });
        self.set_focus(clamped);
    }

    /// Row and column counts of the current page; `None` when either is zero.
    fn page_bounds(&self) -> Option<(usize, usize)> {
        let view = self.derive();
        let rows = view.rows.len();
        let columns = view.columns.len();
        (rows > 0 && columns > 0).then_some((rows, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EngineOptions;
    use roster_model::{Major, Record, Status};

    fn grid(count: u32) -> RosterGrid {
        let records = (1..=count)
            .map(|id| Record {
                id: RecordId::new(id),
                name: format!("Student {}", char::from(b'A' + (id % 26) as u8)),
                email: format!("s{id}@example.edu"),
                phone: "(555) 123-4567".to_string(),
                age: 20,
                grade: 80,
                major: Major::Economics,
                status: Status::Active,
            })
            .collect();
        RosterGrid::new(records, EngineOptions::default().with_default_page_size(3))
    }

    #[test]
    fn test_first_move_lands_on_origin() {
        let mut grid = grid(5);
        grid.move_focus(Direction::Down);
        assert_eq!(grid.focus(), Some(FocusedCell::new(0, 0)));
    }

    #[test]
    fn test_moves_clamp_to_page() {
        let mut grid = grid(5);
        grid.focus_cell(0, 0);
        for _ in 0..10 {
            grid.move_focus(Direction::Down);
        }
        assert_eq!(grid.focus(), Some(FocusedCell::new(2, 0)));
        grid.move_focus(Direction::End);
        assert_eq!(grid.focus(), Some(FocusedCell::new(2, ColumnId::ALL.len() - 1)));
        grid.move_focus(Direction::Right);
        assert_eq!(grid.focus(), Some(FocusedCell::new(2, ColumnId::ALL.len() - 1)));
        grid.move_focus(Direction::Home);
        grid.move_focus(Direction::Left);
        assert_eq!(grid.focus(), Some(FocusedCell::new(2, 0)));
    }

    #[test]
    fn test_focus_follows_short_last_page() {
        let mut grid = grid(5);
        grid.focus_cell(2, 1);
        grid.next_page();
        assert_eq!(grid.focus(), Some(FocusedCell::new(1, 1)));
    }

    #[test]
    fn test_begin_edit_at_focus() {
        let mut grid = grid(5);
        grid.focus_cell(1, 2);
        assert_eq!(grid.focused_record(), Some((RecordId::new(2), ColumnId::Name)));
        assert!(grid.begin_edit_at_focus());
        assert_eq!(grid.state().edit_cursor().unwrap().staged, "Student C");

        grid.focus_cell(0, 1);
        assert!(!grid.begin_edit_at_focus(), "identifier column is read-only");
    }

    #[test]
    fn test_empty_page_drops_focus() {
        let mut grid = grid(5);
        grid.focus_cell(0, 0);
        grid.set_global_filter("no such student");
        assert_eq!(grid.focus(), None);
    }
}
