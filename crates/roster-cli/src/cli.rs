//! CLI argument definitions for the roster host.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::ColumnId;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Student roster grid - filter, sort, page, edit and export student records",
    long_about = "Browse and edit a roster of student records from the terminal.\n\n\
                  Every command loads the persisted roster, applies one change, saves it\n\
                  back and prints the current page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding the persisted roster (default: platform data dir).
    #[arg(long = "state-dir", value_name = "DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// Number of records generated on first run and on reset.
    #[arg(long = "record-count", default_value_t = 50, global = true)]
    pub record_count: usize,

    /// Default rows per page, used on first run and on reset.
    #[arg(long = "default-page-size", default_value_t = 10, global = true)]
    pub default_page_size: usize,

    /// Seed for generated records (random when omitted).
    #[arg(long = "seed", global = true)]
    pub seed: Option<u64>,

    /// Require a first and last name when editing names.
    #[arg(long = "strict-names", global = true)]
    pub strict_names: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the current page.
    Show,

    /// Cycle a column's sort (ascending, descending, off) or clear sorting.
    Sort(SortArgs),

    /// Change the search text or category filters.
    Filter(FilterArgs),

    /// Select or deselect rows.
    Select(SelectArgs),

    /// Edit a single cell.
    Edit(EditArgs),

    /// Delete rows by id, or the current selection when no ids are given.
    Delete(DeleteArgs),

    /// Move a row to another row's position.
    Move(MoveArgs),

    /// Reorder, show or hide columns.
    Columns(ColumnsArgs),

    /// Change page or page size.
    Page(PageArgs),

    /// Export rows as CSV.
    Export(ExportArgs),

    /// Regenerate all records and reset every view setting.
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct SortArgs {
    /// Column to toggle (id or label, e.g. `age` or `Grade`).
    #[arg(value_name = "COLUMN", required_unless_present = "clear")]
    pub column: Option<ColumnId>,

    /// Drop the column's rule instead of cycling it.
    #[arg(long = "remove", requires = "column")]
    pub remove: bool,

    /// Remove every sort rule.
    #[arg(long = "clear", conflicts_with = "column")]
    pub clear: bool,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Free-text search over every column (empty string disables it).
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Category filter, e.g. `status=Active,Graduated`. An empty list hides all rows.
    #[arg(long = "field", value_name = "COLUMN=VALUES", value_parser = parse_field_filter)]
    pub field: Vec<FieldFilterArg>,

    /// Remove the category filter on a column.
    #[arg(long = "clear-field", value_name = "COLUMN")]
    pub clear_field: Vec<ColumnId>,

    /// Remove every filter.
    #[arg(long = "clear")]
    pub clear: bool,
}

/// A parsed `COLUMN=VALUE,VALUE` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilterArg {
    pub column: ColumnId,
    pub values: Vec<String>,
}

fn parse_field_filter(raw: &str) -> Result<FieldFilterArg, String> {
    let (column, values) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=VALUES, got `{raw}`"))?;
    let column: ColumnId = column.parse().map_err(|error| format!("{error}"))?;
    if !column.is_categorical() {
        return Err(format!("`{}` is not a category column", column.label()));
    }
    let values = values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    Ok(FieldFilterArg { column, values })
}

#[derive(Args)]
pub struct SelectArgs {
    /// Record ids to select.
    #[arg(value_name = "ID")]
    pub ids: Vec<u32>,

    /// Deselect the given ids instead.
    #[arg(long = "off")]
    pub off: bool,

    /// Select every row matching the current filters.
    #[arg(long = "all", conflicts_with_all = ["none", "ids"])]
    pub all: bool,

    /// Deselect every row matching the current filters.
    #[arg(long = "none", conflicts_with = "ids")]
    pub none: bool,

    /// Clear the whole selection, filtered or not.
    #[arg(long = "clear", conflicts_with_all = ["all", "none", "ids"])]
    pub clear: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Record id.
    #[arg(value_name = "ID")]
    pub id: u32,

    /// Column to edit.
    #[arg(value_name = "COLUMN")]
    pub column: ColumnId,

    /// New value.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Record ids (defaults to the current selection).
    #[arg(value_name = "ID")]
    pub ids: Vec<u32>,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Record to move.
    #[arg(value_name = "SOURCE")]
    pub source: u32,

    /// Record whose position it takes.
    #[arg(value_name = "TARGET")]
    pub target: u32,
}

#[derive(Args)]
pub struct ColumnsArgs {
    /// New column order, comma separated; unlisted columns keep default order after these.
    #[arg(long = "order", value_name = "COLUMNS", value_delimiter = ',')]
    pub order: Vec<ColumnId>,

    /// Move one column to another column's position: `--move phone --to name`.
    #[arg(long = "move", value_name = "COLUMN", requires = "to")]
    pub moved: Option<ColumnId>,

    /// Target column for `--move`.
    #[arg(long = "to", value_name = "COLUMN", requires = "moved")]
    pub to: Option<ColumnId>,

    /// Hide columns.
    #[arg(long = "hide", value_name = "COLUMN")]
    pub hide: Vec<ColumnId>,

    /// Show columns.
    #[arg(long = "show", value_name = "COLUMN")]
    pub show: Vec<ColumnId>,
}

#[derive(Args)]
pub struct PageArgs {
    /// Go to the next page.
    #[arg(long = "next", conflicts_with_all = ["prev", "go"])]
    pub next: bool,

    /// Go to the previous page.
    #[arg(long = "prev", conflicts_with = "go")]
    pub prev: bool,

    /// Go to a page (1-based).
    #[arg(long = "go", value_name = "PAGE")]
    pub go: Option<usize>,

    /// Rows per page (returns to the first page).
    #[arg(long = "size", value_name = "ROWS")]
    pub size: Option<usize>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Which rows to export.
    #[arg(long = "scope", value_enum, default_value = "filtered")]
    pub scope: ExportScopeArg,

    /// Directory for the dated CSV file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Write CSV to stdout instead of a file.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportScopeArg {
    /// All rows matching the filters, in sorted order.
    Filtered,
    /// Selected rows only.
    Selected,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm that all records and settings should be discarded.
    #[arg(long = "yes")]
    pub yes: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field_filter() {
        assert_eq!(
            parse_field_filter("status=active, graduated"),
            Ok(FieldFilterArg {
                column: ColumnId::Status,
                values: vec!["active".to_string(), "graduated".to_string()],
            })
        );
        assert_eq!(
            parse_field_filter("Major=").map(|arg| arg.values.len()),
            Ok(0)
        );
        assert!(parse_field_filter("age=20").is_err());
        assert!(parse_field_filter("status").is_err());
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["roster", "--state-dir", "/tmp/x", "edit", "3", "age", "21"]);
        let Command::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!((args.id, args.column, args.value.as_str()), (3, ColumnId::Age, "21"));

        let cli = Cli::parse_from(["roster", "columns", "--order", "name,status"]);
        let Command::Columns(args) = cli.command else {
            panic!("expected columns");
        };
        assert_eq!(args.order, vec![ColumnId::Name, ColumnId::Status]);
    }
}
