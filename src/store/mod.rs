pub mod json;
pub mod memory;

use crate::domain::{ContactStore, Record};
use crate::errors::AppError;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

/// Snapshot persistence for the whole contact book: read once at start, written
/// once at the end of a session.
pub trait Storage {
    fn load(&self) -> Result<ContactStore, AppError>;

    fn save(&self, store: &ContactStore) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageMedium {
    Json,
    Mem,
}

pub fn parse_storage_type(medium: StorageMedium, path: &str) -> Box<dyn Storage> {
    match medium {
        StorageMedium::Json => Box::new(JsonStorage::new(path)),
        StorageMedium::Mem => Box::new(MemStorage::new()),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
