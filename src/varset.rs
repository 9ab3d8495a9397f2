//! The `VarMap<T>` helper from the data model: an identifier-keyed map
//! with "insert and tell me what was there before" semantics, matching
//! the original's `insert_value`/`insert_data` pattern used throughout
//! `find_free_vars`, `find_bound_vars`, and the mock-binding-token
//! alpha-equivalence algorithm to detect shadowing.

use hashbrown::HashMap;
use indexmap::IndexSet;

use crate::atom::Ident;

#[derive(Debug, Clone, Default)]
pub struct VarMap<T> {
    inner: HashMap<Ident, T>,
}

impl<T> VarMap<T> {
    pub fn new() -> Self {
        VarMap { inner: HashMap::new() }
    }

    /// Insert `key -> val`, returning whatever was previously bound to
    /// `key`, if anything. Callers use the returned value to detect and
    /// later restore shadowed bindings.
    pub fn insert(&mut self, key: Ident, val: T) -> Option<T> {
        self.inner.insert(key, val)
    }

    pub fn remove(&mut self, key: Ident) -> Option<T> {
        self.inner.remove(&key)
    }

    pub fn get(&self, key: Ident) -> Option<&T> {
        self.inner.get(&key)
    }

    pub fn contains(&self, key: Ident) -> bool {
        self.inner.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Order-preserving identifier set, used for `free_vars`/`bound_vars`
/// results so output order is stable and matches insertion (traversal)
/// order - the teacher uses `indexmap` for the same reason in `tc.rs`.
pub type VarSet = IndexSet<Ident>;

#[cfg(test)]
mod varmap_tests {
    use super::*;
    use crate::atom::intern;

    #[test]
    fn insert_returns_prior() {
        let mut m: VarMap<u32> = VarMap::new();
        let k = intern("varmap_tests::k");
        assert_eq!(m.insert(k, 1), None);
        assert_eq!(m.insert(k, 2), Some(1));
        assert_eq!(m.get(k), Some(&2));
    }

    #[test]
    fn remove_then_absent() {
        let mut m: VarMap<u32> = VarMap::new();
        let k = intern("varmap_tests::removed");
        m.insert(k, 1);
        assert_eq!(m.remove(k), Some(1));
        assert!(!m.contains(k));
    }
}
