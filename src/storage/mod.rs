pub mod stores;

use crate::prelude::{AppError, Contact, ContactManager};
use std::fs;
use std::path::Path;

pub const DEFAULT_SNAPSHOT_PATH: &str = "addressbook.bin";

/// Whole-book persistence: one load at start-up, one save at exit.
pub trait ContactStore {
    fn load(&self) -> Result<ContactManager, AppError>;

    fn save(&self, contacts: &ContactManager) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Bin,
    Json,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_bin(&self) -> bool {
        matches!(self, StorageMediums::Bin)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "bin" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_ascii_lowercase().as_str() {
            "bin" => Ok(StorageMediums::Bin),
            "json" => Ok(StorageMediums::Json),
            _ => Err(AppError::Validation(format!(
                "'{str}' is not a recognized storage medium (bin, json)"
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &Path,
) -> Box<dyn ContactStore> {
    match medium {
        StorageMediums::Bin => Box::new(stores::SnapshotStorage::new(path)),
        StorageMediums::Json => Box::new(stores::JsonStorage::new(path)),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Reads `path`, or `None` when the file has not been written yet.
fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>, AppError> {
    if !fs::exists(path)? {
        return Ok(None);
    }
    Ok(Some(fs::read(path)?))
}
