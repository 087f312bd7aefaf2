use crate::records::{load_collection, new_id, save_collection, RecordError};
use crate::store::Storage;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const VAULT_KEY: &str = "omni_passwords";
const MASK: &str = "••••••••••";

/// A saved credential. Stored as plain JSON; the vault does not encrypt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultEntry {
    pub id: String,
    pub title: String,
    #[serde(rename = "pass")]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl VaultEntry {
    /// Password text as shown when not revealed
    pub fn masked(&self) -> &'static str {
        MASK
    }

    pub fn display_password(&self, reveal: bool) -> &str {
        if reveal {
            &self.password
        } else {
            self.masked()
        }
    }
}

pub struct PasswordVault<S: Storage> {
    storage: S,
    entries: Vec<VaultEntry>,
}

impl<S: Storage> PasswordVault<S> {
    pub fn open(storage: S) -> Result<Self, RecordError> {
        let entries = load_collection(&storage, VAULT_KEY)?;
        Ok(Self { storage, entries })
    }

    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    /// Append a credential; title and password are required
    pub fn add(
        &mut self,
        title: &str,
        username: Option<&str>,
        password: &str,
    ) -> Result<VaultEntry, RecordError> {
        if title.trim().is_empty() || password.is_empty() {
            return Err(RecordError::Invalid(
                "title and password are required".to_string(),
            ));
        }

        let entry = VaultEntry {
            id: new_id(),
            title: title.to_string(),
            password: password.to_string(),
            username: username.filter(|u| !u.is_empty()).map(str::to_string),
        };
        let mut entries = self.entries.clone();
        entries.push(entry.clone());
        self.commit(entries)?;
        info!(id = %entry.id, "added vault entry");
        Ok(entry)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), RecordError> {
        let entries: Vec<VaultEntry> =
            self.entries.iter().filter(|e| e.id != id).cloned().collect();
        if entries.len() == self.entries.len() {
            return Err(RecordError::NotFound(id.to_string()));
        }
        self.commit(entries)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, entries: Vec<VaultEntry>) -> Result<(), RecordError> {
        save_collection(&mut self.storage, VAULT_KEY, &entries)?;
        self.entries = entries;
        Ok(())
    }
}
