//! Per-command shadow updates
//!
//! Two rules keep the shadow and the real list in step:
//!
//! - Cursor announcements (TOFIRST, TOLAST, NEXT) only move the shadow
//!   cursor: the caller has already positioned the real list itself.
//! - Reading announcements (APPEND, INSERT, CONCAT) have to walk the real
//!   list to fetch the new element, so they finish by restoring the real
//!   cursor to the position the shadow cursor implies. With no current
//!   element the real cursor is parked one past the last element.

use crate::command::{Command, Highlight};
use crate::list::CursorList;
use crate::shadow::{Registry, ShadowList};

/// Apply one announced command to the entry at `target`.
///
/// The explanation text, when present, is stored on the entry regardless of
/// whether the command itself took effect. Returns the highlight tag the
/// next frame should carry; an out-of-range `target` does nothing.
pub fn apply<T, L>(
    registry: &mut Registry<T, L>,
    target: usize,
    command: Command,
    explanation: Option<&str>,
) -> Highlight
where
    T: Clone,
    L: CursorList<T>,
{
    let entries = registry.entries_mut();
    if target >= entries.len() {
        return Highlight::None;
    }

    let tag = match command {
        Command::ToFirst => to_first(&mut entries[target]),
        Command::ToLast => to_last(&mut entries[target]),
        Command::Next => next(&mut entries[target]),
        Command::GetContent => get_content(&entries[target]),
        Command::SetContent => set_content(&mut entries[target]),
        Command::Append => append(&mut entries[target]),
        Command::Insert => insert(&mut entries[target]),
        Command::Concat => concat(entries, target),
        Command::Remove => remove(&mut entries[target]),
        Command::Mark => mark(&mut entries[target]),
        Command::Unmark => unmark(&mut entries[target]),
    };

    if let Some(text) = explanation {
        entries[target].caption = text.to_string();
    }
    tag
}

fn to_first<T, L>(entry: &mut ShadowList<T, L>) -> Highlight {
    if !entry.mirror.is_empty() {
        entry.cursor = Some(0);
    }
    Highlight::None
}

fn to_last<T, L>(entry: &mut ShadowList<T, L>) -> Highlight {
    if !entry.mirror.is_empty() {
        entry.cursor = Some(entry.mirror.len() - 1);
    }
    Highlight::None
}

fn next<T, L>(entry: &mut ShadowList<T, L>) -> Highlight {
    match entry.cursor {
        // the past-the-end marker collapses to "no current element"
        Some(i) if i >= entry.mirror.len() => entry.cursor = None,
        Some(i) => entry.cursor = Some(i + 1),
        None => {}
    }
    Highlight::None
}

fn get_content<T, L>(entry: &ShadowList<T, L>) -> Highlight {
    if entry.cursor.is_some() {
        Highlight::GetContent
    } else {
        Highlight::None
    }
}

fn set_content<T, L>(entry: &mut ShadowList<T, L>) -> Highlight
where
    T: Clone,
    L: CursorList<T>,
{
    let Some(i) = entry.cursor else {
        return Highlight::None;
    };
    let value = entry.source.borrow().current().cloned();
    if let (Some(value), Some(slot)) = (value, entry.mirror.get_mut(i)) {
        *slot = value;
    }
    Highlight::SetContent
}

fn append<T, L>(entry: &mut ShadowList<T, L>) -> Highlight
where
    T: Clone,
    L: CursorList<T>,
{
    // the caller has just appended to the real list; mirror its new tail
    let value = {
        let mut source = entry.source.borrow_mut();
        source.to_last();
        source.current().cloned()
    };
    let Some(value) = value else {
        return Highlight::None;
    };
    entry.mirror.push(value);
    restore_source_cursor(entry);
    Highlight::Append
}

fn insert<T, L>(entry: &mut ShadowList<T, L>) -> Highlight
where
    T: Clone,
    L: CursorList<T>,
{
    if entry.mirror.is_empty() {
        // insertion into an empty list; the cursor stays off the list
        let value = {
            let mut source = entry.source.borrow_mut();
            source.to_first();
            source.current().cloned()
        };
        let Some(value) = value else {
            return Highlight::None;
        };
        entry.mirror.push(value);
        restore_source_cursor(entry);
        Highlight::Insert
    } else if let Some(i) = entry.cursor {
        // the caller inserted before its cursor; fetch the new element,
        // which now sits where the cursor index points
        let value = {
            let mut source = entry.source.borrow_mut();
            source.to_first();
            for _ in 0..i {
                source.advance();
            }
            source.current().cloned()
        };
        let Some(value) = value else {
            return Highlight::None;
        };
        entry.mirror.insert(i, value);
        entry.cursor = Some(i + 1);
        restore_source_cursor(entry);
        Highlight::Insert
    } else {
        Highlight::None
    }
}

fn concat<T, L>(entries: &mut [ShadowList<T, L>], target: usize) -> Highlight
where
    T: Clone,
    L: CursorList<T>,
{
    {
        let entry = &mut entries[target];
        entry.len_before_concat = entry.mirror.len();
        entry.resync();
    }

    // concatenation shares structure: some other tracked list may have just
    // been drained into this one
    for (index, other) in entries.iter_mut().enumerate() {
        if index == target {
            continue;
        }
        if other.source.borrow().is_empty() {
            other.mirror.clear();
            other.cursor = None;
            other.mark = None;
        }
    }
    Highlight::Concat
}

fn remove<T, L>(entry: &mut ShadowList<T, L>) -> Highlight {
    let Some(i) = entry.cursor else {
        return Highlight::None;
    };
    if i >= entry.mirror.len() {
        return Highlight::None;
    }
    // the cursor index is kept: it now names the successor, or sits one
    // past the end until the next NEXT collapses it
    entry.mirror.remove(i);
    Highlight::Remove
}

fn mark<T, L>(entry: &mut ShadowList<T, L>) -> Highlight {
    match entry.cursor {
        Some(i) if i < entry.mirror.len() => {
            entry.mark = Some(i);
            Highlight::Mark
        }
        _ => Highlight::None,
    }
}

fn unmark<T, L>(entry: &mut ShadowList<T, L>) -> Highlight {
    entry.mark = None;
    Highlight::Unmark
}

/// Walk the real list's cursor back to the position the shadow cursor
/// implies; with no current element, park it one past the last element.
fn restore_source_cursor<T, L>(entry: &mut ShadowList<T, L>)
where
    T: Clone,
    L: CursorList<T>,
{
    let mut source = entry.source.borrow_mut();
    match entry.cursor {
        Some(i) if i < entry.mirror.len() => {
            source.to_first();
            for _ in 0..i {
                source.advance();
            }
        }
        _ => {
            source.to_last();
            source.advance();
        }
    }
}
