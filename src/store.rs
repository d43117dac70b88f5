//! Section visibility state shared by every section of one table.
//!
//! The store holds an immutable [`VisibilityMap`]. Writes never mutate the
//! current map in place; they build a new one with a single entry replaced
//! and swap it in, so a snapshot taken earlier keeps reading the old values.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

/// Identity of a section inside one table. This is the section title.
pub type SectionId = String;

/// Immutable mapping from section id to its open state.
///
/// Ids without an entry read as closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    entries: Rc<HashMap<SectionId, bool>>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `id` is open, `false` when it was never written.
    pub fn is_open(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Returns a new map with `id` set to `open`. `self` is left untouched.
    pub fn with(&self, id: &str, open: bool) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(id.to_string(), open);
        Self {
            entries: Rc::new(entries),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries.iter().map(|(id, open)| (id.as_str(), *open))
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    current: VisibilityMap,
    /// Bumped on every write that changes what a consumer would read.
    revision: u64,
}

/// Handle to the visibility state of one table.
///
/// Cloning the handle shares the same underlying state; every section
/// controller of a table holds a clone. The handle is `!Send`: all reads
/// and writes happen on the UI thread inside the host's update loop.
#[derive(Debug, Clone, Default)]
pub struct VisibilityStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl VisibilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, id: &str) -> bool {
        self.inner.borrow().current.is_open(id)
    }

    /// Point-update of a single section.
    ///
    /// Returns `true` when the value a consumer reads for `id` changed.
    /// The entry is recorded even when the value is unchanged, so a first
    /// write of `false` still creates the key.
    pub fn write(&self, id: &str, open: bool) -> bool {
        let mut inner = self.inner.borrow_mut();
        let changed = inner.current.is_open(id) != open;
        if changed || !inner.current.contains(id) {
            inner.current = inner.current.with(id, open);
        }
        if changed {
            inner.revision += 1;
            debug!("section {:?} -> {}", id, if open { "open" } else { "closed" });
        }
        changed
    }

    /// The current map. Later writes do not affect the returned value.
    pub fn snapshot(&self) -> VisibilityMap {
        self.inner.borrow().current.clone()
    }

    /// Counter that increases whenever a write changes a visible value.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_section_reads_closed() {
        let store = VisibilityStore::new();
        assert!(!store.read("Fruits"));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let store = VisibilityStore::new();
        assert!(store.write("Fruits", true));
        assert!(store.read("Fruits"));
        assert!(store.write("Fruits", false));
        assert!(!store.read("Fruits"));
    }

    #[test]
    fn test_writes_are_isolated_per_section() {
        let store = VisibilityStore::new();
        store.write("Veggies", false);
        store.write("Fruits", true);
        assert!(!store.read("Veggies"));
        store.write("Fruits", false);
        assert!(!store.read("Veggies"));
    }

    #[test]
    fn test_snapshot_is_stable_after_write() {
        let store = VisibilityStore::new();
        store.write("Fruits", true);
        let before = store.snapshot();

        store.write("Fruits", false);
        store.write("Veggies", true);

        assert!(before.is_open("Fruits"));
        assert!(!before.contains("Veggies"));
        assert!(!store.snapshot().is_open("Fruits"));
    }

    #[test]
    fn test_same_value_write_does_not_bump_revision() {
        let store = VisibilityStore::new();
        store.write("Fruits", true);
        let revision = store.revision();

        assert!(!store.write("Fruits", true));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_first_false_write_records_entry() {
        let store = VisibilityStore::new();
        assert!(!store.write("Fruits", false));
        assert!(store.snapshot().contains("Fruits"));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let store = VisibilityStore::new();
        let other = store.clone();
        other.write("Fruits", true);
        assert!(store.read("Fruits"));
        assert!(!VisibilityStore::new().read("Fruits"));
    }
}
