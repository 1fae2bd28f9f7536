//! Persistent storage for roster records and view preferences.
//!
//! # Features
//!
//! - **Key-value adapter**: the [`KvStore`] trait with in-memory and
//!   directory-backed implementations
//! - **Atomic writes** in [`FileStore`] to prevent corrupted values
//! - **Forgiving reads**: malformed or future-version snapshots load as absent
//!
//! # Example
//!
//! ```
//! use roster_persistence::{MemoryStore, ViewSettings, load_view_settings, save_view_settings};
//!
//! let mut store = MemoryStore::new();
//! save_view_settings(&mut store, &ViewSettings::new(20)).unwrap();
//! assert_eq!(load_view_settings(&store).unwrap().page_size, 20);
//! ```
//!
//! # Architecture
//!
//! - `store/` - the byte store trait and its implementations
//! - `snapshot.rs` - keys, JSON encoding and typed load/save helpers
//! - `error.rs` - error types with user-friendly messages

mod error;
mod snapshot;
mod store;

pub use error::{PersistenceError, Result};
pub use snapshot::{
    ALL_KEYS, COLUMN_ORDER_KEY, COLUMN_VISIBILITY_KEY, ColumnVisibility, RECORDS_KEY,
    VIEW_SESSION_KEY, VIEW_SETTINGS_KEY, VIEW_SETTINGS_VERSION, ViewSession, ViewSettings,
    clear_all, load_column_order, load_column_visibility, load_json, load_records,
    load_view_session, load_view_settings, save_column_order, save_column_visibility, save_json,
    save_records, save_view_session, save_view_settings, try_load_json,
};
pub use store::{FileStore, KvStore, MemoryStore};
