//! Terminal rendering of the derived page.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::{DerivedView, FocusedCell, RosterGrid, SelectionState};
use roster_model::{ColumnId, ColumnKind, SortDirection};

const SELECTED_MARK: &str = "[x]";
const UNSELECTED_MARK: &str = "[ ]";
const PARTIAL_MARK: &str = "[-]";

/// Render the current page of `grid` as a table.
pub fn page_table(grid: &RosterGrid) -> Table {
    let view = grid.derive();
    let mut table = Table::new();
    table.set_header(
        view.columns
            .iter()
            .map(|column| column_header(grid, *column))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in view.columns.iter().enumerate() {
        match column.kind() {
            ColumnKind::Integer | ColumnKind::Identifier => {
                align_column(&mut table, index, CellAlignment::Right);
            }
            ColumnKind::Marker => align_column(&mut table, index, CellAlignment::Center),
            ColumnKind::Text | ColumnKind::Enum => {}
        }
    }

    let focus = grid.focus();
    for (row_index, row) in view.rows.iter().enumerate() {
        let cells = view.columns.iter().enumerate().map(|(column_index, column)| {
            let cell = if *column == ColumnId::Select {
                selection_cell(row.selected)
            } else {
                Cell::new(row.record.display(*column))
            };
            if focus == Some(FocusedCell::new(row_index, column_index)) {
                cell.add_attribute(Attribute::Reverse)
            } else {
                cell
            }
        });
        table.add_row(cells.collect::<Vec<_>>());
    }
    table
}

/// "Rows 11-20 of 37 (filtered from 50) | Page 2/4" style footer.
pub fn pager_line(view: &DerivedView<'_>) -> String {
    let rows = match view.row_range() {
        Some((first, last)) => format!("Rows {first}-{last} of {}", view.filtered_count),
        None => "No matching rows".to_string(),
    };
    let filtered = if view.filtered_count == view.total_count {
        String::new()
    } else {
        format!(" (filtered from {})", view.total_count)
    };
    format!(
        "{rows}{filtered} | Page {}/{} | {} per page",
        view.page_index + 1,
        view.page_count,
        view.page_size
    )
}

/// One line per active sort rule, filter and selection count.
pub fn status_lines(grid: &RosterGrid) -> Vec<String> {
    let state = grid.state();
    let mut lines = Vec::new();

    if !state.sort_rules().is_empty() {
        let rules: Vec<String> = state
            .sort_rules()
            .iter()
            .map(|rule| format!("{} {}", rule.column.label(), rule.direction.as_str()))
            .collect();
        lines.push(format!("Sorted by: {}", rules.join(", ")));
    }

    let filters = state.filters();
    if !filters.global().is_empty() {
        lines.push(format!("Search: \"{}\"", filters.global()));
    }
    for (column, allowed) in filters.field_filters() {
        let values: Vec<&str> = allowed.iter().copied().collect();
        let values = if values.is_empty() {
            "(none)".to_string()
        } else {
            values.join(", ")
        };
        lines.push(format!("{}: {values}", column.label()));
    }

    let selected = grid.selected_ids().len();
    if selected > 0 {
        lines.push(format!("Selected: {selected}"));
    }
    lines
}

/// Full page rendering: status lines, table and pager.
pub fn render_page(grid: &RosterGrid) -> String {
    let mut out = String::new();
    for line in status_lines(grid) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&page_table(grid).to_string());
    out.push('\n');
    out.push_str(&pager_line(&grid.derive()));
    out
}

fn column_header(grid: &RosterGrid, column: ColumnId) -> Cell {
    if column == ColumnId::Select {
        let mark = match grid.header_selection() {
            SelectionState::None => UNSELECTED_MARK,
            SelectionState::Some => PARTIAL_MARK,
            SelectionState::All => SELECTED_MARK,
        };
        return header_cell(mark);
    }
    let rules = grid.state().sort_rules();
    let label = match rules.iter().position(|rule| rule.column == column) {
        Some(priority) => {
            let arrow = match rules[priority].direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            };
            if rules.len() > 1 {
                format!("{} {arrow}{}", column.label(), priority + 1)
            } else {
                format!("{} {arrow}", column.label())
            }
        }
        None => column.label().to_string(),
    };
    header_cell(&label)
}

fn selection_cell(selected: bool) -> Cell {
    if selected {
        Cell::new(SELECTED_MARK).fg(Color::Green)
    } else {
        Cell::new(UNSELECTED_MARK).fg(Color::DarkGrey)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
