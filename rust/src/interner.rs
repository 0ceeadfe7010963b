//! String interning for course names.
//!
//! Converts course names to dense integer ids so the conflict graph hashes
//! small integers instead of strings. Released ids are recycled.

use rustc_hash::FxHashMap;

/// Interned item ID (u32 for compact storage and fast hashing).
pub type ItemId = u32;

/// Arena mapping course names to integer ids and back.
#[derive(Debug, Clone)]
pub struct ItemInterner {
    to_int: FxHashMap<String, ItemId>,
    from_int: Vec<Option<String>>,
    free: Vec<ItemId>,
}

impl ItemInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Intern a name, returning its integer ID.
    /// If already interned, returns the existing ID.
    pub fn intern(&mut self, s: &str) -> ItemId {
        if let Some(&id) = self.to_int.get(s) {
            return id;
        }
        let id = match self.free.pop() {
            Some(id) => {
                self.from_int[id as usize] = Some(s.to_string());
                id
            }
            None => {
                let id = self.from_int.len() as ItemId;
                self.from_int.push(Some(s.to_string()));
                id
            }
        };
        self.to_int.insert(s.to_string(), id);
        id
    }

    /// Release a name. Its id may be handed out again by a later `intern`.
    pub fn release(&mut self, s: &str) -> Option<ItemId> {
        let id = self.to_int.remove(s)?;
        self.from_int[id as usize] = None;
        self.free.push(id);
        Some(id)
    }

    /// Get the integer ID for a name, if it exists.
    #[inline]
    pub fn get(&self, s: &str) -> Option<ItemId> {
        self.to_int.get(s).copied()
    }

    /// Get the name for an integer ID.
    #[inline]
    pub fn resolve(&self, id: ItemId) -> Option<&str> {
        self.from_int
            .get(id as usize)
            .and_then(|slot| slot.as_deref())
    }

    /// Upper bound (exclusive) on ids handed out so far; sizes id-indexed vectors.
    pub fn capacity_bound(&self) -> usize {
        self.from_int.len()
    }

    /// Number of live names.
    pub fn len(&self) -> usize {
        self.to_int.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.to_int.is_empty()
    }

    /// Iterate over live `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &str)> {
        self.from_int
            .iter()
            .enumerate()
            .filter_map(|(id, name)| name.as_deref().map(|n| (id as ItemId, n)))
    }

    /// Drop every name and id.
    pub fn clear(&mut self) {
        self.to_int.clear();
        self.from_int.clear();
        self.free.clear();
    }
}

impl Default for ItemInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let mut interner = ItemInterner::with_capacity(10);

        let id1 = interner.intern("Maths");
        let id2 = interner.intern("Physics");
        let id3 = interner.intern("Maths"); // duplicate

        assert_eq!(id1, id3);
        assert_ne!(id1, id2);

        assert_eq!(interner.resolve(id1), Some("Maths"));
        assert_eq!(interner.resolve(id2), Some("Physics"));
        assert_eq!(interner.get("Maths"), Some(id1));
        assert_eq!(interner.get("nonexistent"), None);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_release_recycles_id() {
        let mut interner = ItemInterner::default();
        let a = interner.intern("a");
        interner.intern("b");

        assert_eq!(interner.release("a"), Some(a));
        assert_eq!(interner.get("a"), None);
        assert_eq!(interner.resolve(a), None);
        assert_eq!(interner.len(), 1);
        assert_eq!(interner.release("a"), None);

        let c = interner.intern("c");
        assert_eq!(c, a);
        assert_eq!(interner.resolve(c), Some("c"));
        assert_eq!(interner.capacity_bound(), 2);
    }

    #[test]
    fn test_iter_skips_released() {
        let mut interner = ItemInterner::default();
        interner.intern("a");
        interner.intern("b");
        interner.intern("c");
        interner.release("b");

        let live: Vec<&str> = interner.iter().map(|(_, name)| name).collect();
        assert_eq!(live, vec!["a", "c"]);
    }
}
