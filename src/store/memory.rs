use super::*;

/// Keeps the book for the current session only; nothing is written anywhere.
pub struct MemStorage {
    pub medium: String,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn load(&self) -> Result<ContactStore, AppError> {
        Ok(ContactStore::new())
    }

    fn save(&self, _store: &ContactStore) -> Result<(), AppError> {
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
