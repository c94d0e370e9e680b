//! Shadow state for tracked lists
//!
//! Every list handed to the animator gets a [`ShadowList`]: a renderable
//! mirror of the real list's contents together with the bookkeeping the
//! renderer needs (cursor position, mark, annotation text, alias names).
//! The mirror is copied element by element at registration and evolved
//! incrementally by the command interpreter afterwards; only a CONCAT
//! rebuilds it wholesale.
//!
//! The [`registry::Registry`] owns the shadows and resolves list handles to
//! them by pointer identity.

mod registry;

pub use registry::Registry;

use std::cell::RefCell;
use std::rc::Rc;

use crate::list::CursorList;

/// The renderable mirror of one tracked list.
///
/// `cursor` is `None` when no element is current. `Some(len)` is a transient
/// "just walked past the end" marker: the next NEXT collapses it to `None`.
/// `mark` survives cursor movement until UNMARK clears it.
pub struct ShadowList<T, L> {
    pub(crate) source: Rc<RefCell<L>>,
    pub(crate) names: Vec<String>,
    pub(crate) mirror: Vec<T>,
    pub(crate) cursor: Option<usize>,
    pub(crate) mark: Option<usize>,
    pub(crate) caption: String,
    pub(crate) len_before_concat: usize,
}

impl<T, L> ShadowList<T, L>
where
    T: Clone,
    L: CursorList<T>,
{
    pub(crate) fn new(source: Rc<RefCell<L>>) -> Self {
        let mut shadow = ShadowList {
            source,
            names: Vec::new(),
            mirror: Vec::new(),
            cursor: None,
            mark: None,
            caption: String::new(),
            len_before_concat: 0,
        };
        shadow.resync();
        shadow
    }

    /// Replace the mirror with a fresh forward copy of the real list.
    ///
    /// Walks the real list from the first element to the end, so the real
    /// cursor is left one past the last element afterwards.
    pub(crate) fn resync(&mut self) {
        let mut source = self.source.borrow_mut();
        self.mirror.clear();
        source.to_first();
        while let Some(value) = source.current() {
            self.mirror.push(value.clone());
            source.advance();
        }
        self.cursor = None;
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn mirror(&self) -> &[T] {
        &self.mirror
    }

    pub fn len(&self) -> usize {
        self.mirror.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirror.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn mark(&self) -> Option<usize> {
        self.mark
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Element count recorded just before the last CONCAT on this list;
    /// nodes at or past this index arrived with that CONCAT.
    pub fn len_before_concat(&self) -> usize {
        self.len_before_concat
    }
}
