mod memory;

pub use memory::MemoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound,
    Conflict,
}

/// Exposes the identifier a record is stored under.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Storage seam for one resource kind. The in-memory implementation is the
/// only one today; a durable backend can slot in behind the same trait
/// without touching handler logic.
///
/// Predicates are passed as `&dyn Fn` so the trait stays object-safe.
pub trait RecordStore<T: Keyed + Clone>: Send + Sync {
    /// Appends a record. Always succeeds.
    fn insert(&self, record: T);

    /// Appends only if no existing record matches `conflict`. The check and
    /// the append happen under a single lock acquisition, so two concurrent
    /// inserts with the same key cannot both pass the check.
    fn insert_unique(&self, record: T, conflict: &dyn Fn(&T) -> bool) -> Result<(), StoreError>;

    /// All records in insertion order.
    fn list(&self) -> Vec<T>;

    /// First record matching the predicate.
    fn find(&self, pred: &dyn Fn(&T) -> bool) -> Option<T>;

    /// Record with the given key.
    fn get(&self, id: &str) -> Result<T, StoreError>;

    /// Runs `apply` against the record with the given key and returns the
    /// updated record.
    fn update(&self, id: &str, apply: &dyn Fn(&mut T)) -> Result<T, StoreError>;

    /// Removes the record with the given key.
    fn remove(&self, id: &str) -> Result<(), StoreError>;
}
