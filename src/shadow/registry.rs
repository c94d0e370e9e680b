// Registry of tracked lists, keyed by handle identity

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::list::CursorList;
use crate::shadow::ShadowList;

/// The ordered collection of tracked lists.
///
/// Lists are identified by their handle, not by their contents: two handles
/// refer to the same tracked list exactly when `Rc::ptr_eq` says so.
/// Registering a known list under a new alias augments its entry instead of
/// creating a second one; alias names are unique across the whole registry.
pub struct Registry<T, L> {
    entries: Vec<ShadowList<T, L>>,
    claimed_names: FxHashSet<String>,
}

impl<T, L> Registry<T, L>
where
    T: Clone,
    L: CursorList<T>,
{
    pub fn new() -> Self {
        Registry {
            entries: Vec::new(),
            claimed_names: FxHashSet::default(),
        }
    }

    /// Track `list` under `name`, or add `name` as a further alias if the
    /// list is already tracked. Returns the entry's ordinal position.
    ///
    /// An empty name, or a name already claimed by a different list, is
    /// silently declined; a new entry is only created once a first alias is
    /// accepted. Re-registering an existing alias of a known list is
    /// idempotent.
    pub fn register(&mut self, list: &Rc<RefCell<L>>, name: &str) -> Option<usize> {
        let accepted = !name.is_empty() && !self.claimed_names.contains(name);

        if let Some(index) = self.find(list) {
            if accepted {
                self.claimed_names.insert(name.to_string());
                self.entries[index].names.push(name.to_string());
            }
            return Some(index);
        }

        if !accepted {
            return None;
        }

        let mut shadow = ShadowList::new(Rc::clone(list));
        shadow.names.push(name.to_string());
        self.claimed_names.insert(name.to_string());
        self.entries.push(shadow);
        Some(self.entries.len() - 1)
    }

    /// Stop tracking `list` entirely, freeing its aliases for reuse.
    /// Unknown lists are ignored.
    pub fn unregister(&mut self, list: &Rc<RefCell<L>>) {
        if let Some(index) = self.find(list) {
            let removed = self.entries.remove(index);
            for name in &removed.names {
                self.claimed_names.remove(name);
            }
        }
    }

    /// Ordinal position of the entry tracking `list`, if any.
    pub fn find(&self, list: &Rc<RefCell<L>>) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| Rc::ptr_eq(&entry.source, list))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShadowList<T, L>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ShadowList<T, L>] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ShadowList<T, L>] {
        &mut self.entries
    }
}

impl<T, L> Default for Registry<T, L>
where
    T: Clone,
    L: CursorList<T>,
{
    fn default() -> Self {
        Self::new()
    }
}
