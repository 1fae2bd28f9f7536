//! JSON snapshots of roster state kept in a [`KvStore`].
//!
//! Reads never fail the caller: a missing key, malformed JSON or a settings
//! blob from a newer schema all come back as `None` (with a warning logged)
//! so the caller falls back to defaults.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use roster_model::{ColumnId, Record, RecordId, SortRule};

use crate::error::{PersistenceError, Result};
use crate::store::KvStore;

pub const RECORDS_KEY: &str = "roster.records";
pub const COLUMN_ORDER_KEY: &str = "roster.column_order";
pub const COLUMN_VISIBILITY_KEY: &str = "roster.column_visibility";
pub const VIEW_SETTINGS_KEY: &str = "roster.view_settings";
pub const VIEW_SESSION_KEY: &str = "roster.view_session";

/// Every key this crate writes, in the order they are cleared on reset.
pub const ALL_KEYS: [&str; 5] = [
    RECORDS_KEY,
    COLUMN_ORDER_KEY,
    COLUMN_VISIBILITY_KEY,
    VIEW_SETTINGS_KEY,
    VIEW_SESSION_KEY,
];

/// Current view settings schema version.
pub const VIEW_SETTINGS_VERSION: u32 = 1;

/// Column visibility map. Columns absent from the map are visible.
pub type ColumnVisibility = BTreeMap<ColumnId, bool>;

/// Persisted view preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub version: u32,
    pub page_size: usize,
    #[serde(default)]
    pub sort: Vec<SortRule>,
    #[serde(default)]
    pub column_visibility: ColumnVisibility,
}

impl ViewSettings {
    pub fn new(page_size: usize) -> Self {
        Self {
            version: VIEW_SETTINGS_VERSION,
            page_size,
            sort: Vec::new(),
            column_visibility: ColumnVisibility::new(),
        }
    }
}

/// Short-lived view state carried between host invocations: filters,
/// selection and the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSession {
    #[serde(default)]
    pub page_index: usize,
    #[serde(default)]
    pub global_filter: String,
    #[serde(default)]
    pub field_filters: BTreeMap<ColumnId, Vec<String>>,
    #[serde(default)]
    pub selection: Vec<RecordId>,
}

/// Serialize a value as JSON and store it.
pub fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    S: KvStore + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(value).map_err(|source| PersistenceError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &bytes)
}

/// Read and decode a JSON value, reporting why it could not be read.
pub fn try_load_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(bytes) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| PersistenceError::Deserialization {
            key: key.to_string(),
            source,
        })
}

/// Read and decode a JSON value; any failure is logged and treated as absent.
pub fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    match try_load_json(store, key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "discarding unreadable persisted value");
            None
        }
    }
}

pub fn load_records<S: KvStore + ?Sized>(store: &S) -> Option<Vec<Record>> {
    load_json(store, RECORDS_KEY)
}

pub fn save_records<S: KvStore + ?Sized>(store: &mut S, records: &[Record]) -> Result<()> {
    save_json(store, RECORDS_KEY, records)
}

pub fn load_column_order<S: KvStore + ?Sized>(store: &S) -> Option<Vec<ColumnId>> {
    load_json(store, COLUMN_ORDER_KEY)
}

pub fn save_column_order<S: KvStore + ?Sized>(store: &mut S, order: &[ColumnId]) -> Result<()> {
    save_json(store, COLUMN_ORDER_KEY, order)
}

pub fn load_column_visibility<S: KvStore + ?Sized>(store: &S) -> Option<ColumnVisibility> {
    load_json(store, COLUMN_VISIBILITY_KEY)
}

pub fn save_column_visibility<S: KvStore + ?Sized>(
    store: &mut S,
    visibility: &ColumnVisibility,
) -> Result<()> {
    save_json(store, COLUMN_VISIBILITY_KEY, visibility)
}

/// Load view settings, discarding blobs written by a newer schema.
pub fn load_view_settings<S: KvStore + ?Sized>(store: &S) -> Option<ViewSettings> {
    let settings: ViewSettings = load_json(store, VIEW_SETTINGS_KEY)?;
    if settings.version > VIEW_SETTINGS_VERSION {
        let error = PersistenceError::UnsupportedVersion {
            key: VIEW_SETTINGS_KEY.to_string(),
            found: settings.version,
            max_supported: VIEW_SETTINGS_VERSION,
        };
        tracing::warn!(%error, "discarding persisted view settings");
        return None;
    }
    Some(settings)
}

pub fn save_view_settings<S: KvStore + ?Sized>(
    store: &mut S,
    settings: &ViewSettings,
) -> Result<()> {
    save_json(store, VIEW_SETTINGS_KEY, settings)
}

pub fn load_view_session<S: KvStore + ?Sized>(store: &S) -> Option<ViewSession> {
    load_json(store, VIEW_SESSION_KEY)
}

pub fn save_view_session<S: KvStore + ?Sized>(store: &mut S, session: &ViewSession) -> Result<()> {
    save_json(store, VIEW_SESSION_KEY, session)
}

/// Remove every roster key from the store.
pub fn clear_all<S: KvStore + ?Sized>(store: &mut S) -> Result<()> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}
