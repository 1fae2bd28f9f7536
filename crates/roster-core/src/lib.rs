//! View engine for the student roster grid.
//!
//! [`RosterGrid`] owns the record set and a single [`ViewState`] value.
//! Hosts call its operations in response to input and render whatever
//! [`RosterGrid::derive`] returns; nothing in here knows about widgets or
//! terminals.
//!
//! # Pipeline
//!
//! `derive()` applies, in order:
//!
//! 1. categorical field filters
//! 2. the free-text filter over every data column
//! 3. a stable multi-key sort in rule priority order
//! 4. the page slice
//!
//! # Example
//!
//! ```
//! use roster_core::{EngineOptions, RosterGrid};
//! use roster_fixtures::RandomRoster;
//! use roster_model::ColumnId;
//!
//! let mut grid = RosterGrid::generate(&mut RandomRoster::with_seed(7), EngineOptions::default());
//! grid.toggle_sort(ColumnId::Grade);
//! grid.set_field_filter(ColumnId::Status, ["Active"]);
//!
//! let view = grid.derive();
//! assert!(view.rows.len() <= 10);
//! assert!(view.rows.iter().all(|row| row.record.status.as_str() == "Active"));
//! ```

mod derive;
mod engine;
mod error;
mod export;
mod navigation;
mod options;
mod session;
mod state;

pub use derive::{DerivedRow, DerivedView};
pub use engine::{Changes, RosterGrid, SelectionState};
pub use error::{CommitOutcome, DeleteOutcome, EditError};
pub use export::ExportScope;
pub use navigation::Direction;
pub use options::{DEFAULT_PAGE_SIZE, DEFAULT_RECORD_COUNT, EngineOptions};
pub use session::Session;
pub use state::{ColumnLayout, EditCursor, Filters, FocusedCell, Pagination, ViewState};
