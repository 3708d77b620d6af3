use super::*;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use tracing::{debug, info};

pub const STORAGE_PATH: &str = "./.instance/addressbook.json";

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<ContactStore, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            debug!(path = %self.path, "no contact book on disk yet");
            return Ok(ContactStore::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(ContactStore::new());
        }

        // Duplicate names collapse through `add_record`
        let records: Vec<Record> = serde_json::from_str(&data)?;
        let store: ContactStore = records.into_iter().collect();

        info!(path = %self.path, contacts = store.len(), "contact book loaded");
        Ok(store)
    }

    fn save(&self, store: &ContactStore) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let json_contact = serde_json::to_string_pretty(store.records())?;
        file.write_all(json_contact.as_bytes())?;

        info!(path = %self.path, contacts = store.len(), "contact book saved");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
