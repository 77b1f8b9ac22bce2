//! Per-kind memoization of resolved records.
//!
//! A cache hands out `Rc<T>` so two lookups of the same id yield the same
//! instance. The backing map is created on first insertion and lives as long
//! as the owning [`Dex`](crate::Dex). Single-threaded only.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Lazily created id -> record map.
#[derive(Debug)]
pub struct EntityCache<T> {
    kind: &'static str,
    entries: RefCell<Option<HashMap<String, Rc<T>>>>,
}

impl<T> EntityCache<T> {
    pub const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: RefCell::new(None),
        }
    }

    pub fn get(&self, id: &str) -> Option<Rc<T>> {
        self.entries
            .borrow()
            .as_ref()
            .and_then(|map| map.get(id))
            .cloned()
    }

    /// Return the cached record for `id`, building and storing it on a miss.
    ///
    /// `build` runs without any borrow held, so it may consult other caches.
    pub fn get_or_insert_with(&self, id: &str, build: impl FnOnce() -> T) -> Rc<T> {
        if let Some(hit) = self.get(id) {
            tracing::trace!(kind = self.kind, id, "cache hit");
            return hit;
        }
        let record = Rc::new(build());
        tracing::debug!(kind = self.kind, id, "cached new record");
        let mut entries = self.entries.borrow_mut();
        entries
            .get_or_insert_with(HashMap::new)
            .entry(id.to_string())
            .or_insert(record)
            .clone()
    }

    /// Whether any record of this kind has been resolved yet.
    pub fn is_initialized(&self) -> bool {
        self.entries.borrow().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Only test harnesses that need isolation call this.
    pub fn clear(&self) {
        *self.entries.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_creation_and_identity() {
        let cache: EntityCache<String> = EntityCache::new("test");
        assert!(!cache.is_initialized());
        assert!(cache.get("a").is_none());

        let first = cache.get_or_insert_with("a", || "alpha".to_string());
        assert!(cache.is_initialized());
        let second = cache.get_or_insert_with("a", || unreachable!("must not rebuild"));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache: EntityCache<u8> = EntityCache::new("test");
        cache.get_or_insert_with("x", || 1);
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.is_initialized());
    }
}
