use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Keyed, RecordStore, StoreError};

/// Insertion-ordered in-memory collection of one record kind. The lock gives
/// each operation the single-writer-at-a-time behavior the handlers assume;
/// actix runs them on a worker pool.
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone + Send + Sync> RecordStore<T> for MemoryStore<T> {
    fn insert(&self, record: T) {
        self.write().push(record);
    }

    fn insert_unique(&self, record: T, conflict: &dyn Fn(&T) -> bool) -> Result<(), StoreError> {
        let mut records = self.write();
        if records.iter().any(conflict) {
            return Err(StoreError::Conflict);
        }
        records.push(record);
        Ok(())
    }

    fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    fn find(&self, pred: &dyn Fn(&T) -> bool) -> Option<T> {
        self.read().iter().find(|r| pred(r)).cloned()
    }

    fn get(&self, id: &str) -> Result<T, StoreError> {
        self.read()
            .iter()
            .find(|r| r.key() == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn update(&self, id: &str, apply: &dyn Fn(&mut T)) -> Result<T, StoreError> {
        let mut records = self.write();
        match records.iter_mut().find(|r| r.key() == id) {
            Some(record) => {
                apply(record);
                Ok(record.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.write();
        match records.iter().position(|r| r.key() == id) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    impl Keyed for Note {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert(note("a", "first"));
        store.insert(note("b", "second"));
        store.insert(note("c", "third"));

        let ids: Vec<String> = store.list().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn list_is_empty_for_new_store() {
        let store: MemoryStore<Note> = MemoryStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn get_returns_not_found_for_unknown_key() {
        let store = MemoryStore::new();
        store.insert(note("a", "first"));

        assert_eq!(store.get("a").unwrap().text, "first");
        assert_eq!(store.get("zzz"), Err(StoreError::NotFound));
    }

    #[test]
    fn find_matches_first_record() {
        let store = MemoryStore::new();
        store.insert(note("a", "dup"));
        store.insert(note("b", "dup"));

        let found = store.find(&|n: &Note| n.text == "dup").unwrap();
        assert_eq!(found.id, "a");
        assert!(store.find(&|n: &Note| n.text == "missing").is_none());
    }

    #[test]
    fn update_applies_in_place_and_returns_updated() {
        let store = MemoryStore::new();
        store.insert(note("a", "old"));

        let updated = store
            .update("a", &|n| n.text = "new".to_string())
            .unwrap();
        assert_eq!(updated.text, "new");
        assert_eq!(store.get("a").unwrap().text, "new");

        assert_eq!(
            store.update("zzz", &|_| {}),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn remove_is_not_idempotent() {
        let store = MemoryStore::new();
        store.insert(note("a", "first"));

        assert_eq!(store.remove("a"), Ok(()));
        assert_eq!(store.remove("a"), Err(StoreError::NotFound));
        assert!(store.list().is_empty());
    }

    #[test]
    fn insert_unique_rejects_conflicts() {
        let store = MemoryStore::new();
        assert_eq!(
            store.insert_unique(note("a", "dup"), &|n: &Note| n.text == "dup"),
            Ok(())
        );
        assert_eq!(
            store.insert_unique(note("b", "dup"), &|n: &Note| n.text == "dup"),
            Err(StoreError::Conflict)
        );
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn insert_unique_admits_exactly_one_under_contention() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.insert_unique(note(&format!("id-{}", i), "same-key"), &|n: &Note| {
                        n.text == "same-key"
                    })
                })
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let admitted = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(admitted, 1);
        assert_eq!(store.list().len(), 1);
    }
}
