use super::*;

/// Name-keyed collection of contacts. Iteration follows insertion order; replacing a
/// record under an existing name keeps that name's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    mem: Vec<Record>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { mem: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.mem.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.mem
    }

    fn get_index_by_name(&self, name: &str) -> Option<usize> {
        self.mem.iter().position(|r| r.name() == name)
    }

    pub fn add_record(&mut self, record: Record) {
        match self.get_index_by_name(record.name()) {
            Some(index) => self.mem[index] = record,
            None => self.mem.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.mem.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.mem.iter_mut().find(|r| r.name() == name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.get_index_by_name(name)?;
        Some(self.mem.remove(index))
    }
}

impl FromIterator<Record> for ContactStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = ContactStore::new();
        for record in iter {
            store.add_record(record);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn add_and_find_by_exact_name() {
        let mut store = ContactStore::new();
        store.add_record(record("Alice", "0123456789"));

        assert!(store.find("Alice").is_some());
        assert!(store.find("alice").is_none());
        assert!(store.find("Ali").is_none());
    }

    #[test]
    fn overwrite_keeps_insertion_position() {
        let mut store = ContactStore::new();
        store.add_record(record("Alice", "0123456789"));
        store.add_record(record("Bob", "1111111111"));
        store.add_record(record("Alice", "2222222222"));

        let names: Vec<&str> = store.iter().map(Record::name).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(store.find("Alice").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn every_key_matches_its_record_name() {
        let store: ContactStore = ["Alice", "Bob", "Alice", "Carol"]
            .into_iter()
            .map(|n| record(n, "0123456789"))
            .collect();

        assert_eq!(store.len(), 3);
        for name in ["Alice", "Bob", "Carol"] {
            assert_eq!(store.find(name).unwrap().name(), name);
        }
    }

    #[test]
    fn delete_missing_name_leaves_store_unchanged() {
        let mut store = ContactStore::new();
        store.add_record(record("Alice", "0123456789"));
        let before = store.clone();

        assert!(store.delete("Zed").is_none());
        assert_eq!(store, before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_preserves_order_of_the_rest() {
        let mut store: ContactStore = ["Alice", "Bob", "Carol"]
            .into_iter()
            .map(|n| record(n, "0123456789"))
            .collect();

        let removed = store.delete("Bob").unwrap();
        assert_eq!(removed.name(), "Bob");

        let names: Vec<&str> = store.iter().map(Record::name).collect();
        assert_eq!(names, ["Alice", "Carol"]);
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut store = ContactStore::new();
        store.add_record(record("Alice", "0123456789"));

        store
            .find_mut("Alice")
            .unwrap()
            .set_birthday("01.01.1990")
            .unwrap();

        assert!(store.find("Alice").unwrap().birthday().is_some());
    }
}
