use super::*;

use std::path::PathBuf;
use tracing::{debug, info};

/// Binary snapshot of the whole book, encoded with `postcard`.
pub struct SnapshotStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl SnapshotStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "bin".to_string(),
            path: path.into(),
        }
    }
}

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for SnapshotStorage {
    fn load(&self) -> Result<ContactManager, AppError> {
        let Some(bytes) = read_if_exists(&self.path)? else {
            info!(path = %self.path.display(), "no snapshot yet, starting empty");
            return Ok(ContactManager::new());
        };

        // postcard rejects zero bytes, treat an empty file as an empty book
        if bytes.is_empty() {
            return Ok(ContactManager::new());
        }

        let contacts: Vec<Contact> = postcard::from_bytes(&bytes)?;
        debug!(path = %self.path.display(), count = contacts.len(), "snapshot loaded");
        Ok(ContactManager::from_contacts(contacts))
    }

    fn save(&self, contacts: &ContactManager) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let bytes = postcard::to_stdvec(contacts.contact_list())?;
        fs::write(&self.path, bytes)?;

        debug!(path = %self.path.display(), count = contacts.len(), "snapshot saved");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<ContactManager, AppError> {
        let Some(bytes) = read_if_exists(&self.path)? else {
            info!(path = %self.path.display(), "no snapshot yet, starting empty");
            return Ok(ContactManager::new());
        };

        // serde_json will give an error if data is empty
        if bytes.is_empty() {
            return Ok(ContactManager::new());
        }

        let contacts: Vec<Contact> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = contacts.len(), "snapshot loaded");
        Ok(ContactManager::from_contacts(contacts))
    }

    fn save(&self, contacts: &ContactManager) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contacts = serde_json::to_string_pretty(contacts.contact_list())?;
        fs::write(&self.path, json_contacts)?;

        debug!(path = %self.path.display(), count = contacts.len(), "snapshot saved");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
