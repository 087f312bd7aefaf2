// Persistent tool records
//
// Each book owns its whole collection, loads it once when opened, and writes
// it back to storage after every mutation.

pub mod activity;
pub mod error;
pub mod notes;
pub mod vault;

pub use activity::{ActivityEntry, ActivityKind, ActivityLog, ActivityTotals};
pub use error::RecordError;
pub use notes::{Note, NoteBook, NoteDraft, NoteKind};
pub use vault::{PasswordVault, VaultEntry};

use crate::store::Storage;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read a JSON collection, treating a missing key as empty
pub(crate) fn load_collection<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> Result<Vec<T>, RecordError> {
    match storage.get(key)? {
        Some(blob) => serde_json::from_str(&blob).map_err(|source| RecordError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

pub(crate) fn save_collection<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    items: &[T],
) -> Result<(), RecordError> {
    let blob = serde_json::to_string(items).map_err(|source| RecordError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &blob)?;
    Ok(())
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Today's local date as shown on records
pub(crate) fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
