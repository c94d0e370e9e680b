//! The command vocabulary and its interpreter
//!
//! The caller mutates its own lists and announces each mutation as a
//! [`Command`]; [`apply`] translates the announcement into the matching
//! update of the tracked shadow state and reports which [`Highlight`] the
//! next frame should carry.
//!
//! Announcements whose precondition does not hold (moving a cursor that is
//! off the list, removing with nothing current, ...) are silent no-ops that
//! leave both the shadow and the highlight untouched. This is a display
//! tool, not a validator.

mod apply;

pub use apply::apply;

use std::fmt;

/// One announced list mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToFirst,
    ToLast,
    Next,
    GetContent,
    SetContent,
    Append,
    Insert,
    Concat,
    Remove,
    Mark,
    Unmark,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Command::ToFirst => "TOFIRST",
            Command::ToLast => "TOLAST",
            Command::Next => "NEXT",
            Command::GetContent => "GETCONTENT",
            Command::SetContent => "SETCONTENT",
            Command::Append => "APPEND",
            Command::Insert => "INSERT",
            Command::Concat => "CONCAT",
            Command::Remove => "REMOVE",
            Command::Mark => "MARK",
            Command::Unmark => "UNMARK",
        };
        f.write_str(word)
    }
}

/// Which nodes of the last-touched list the renderer should outline.
///
/// Reset to [`Highlight::None`] at the start of every command; only the
/// command that just ran leaves a tag behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    GetContent,
    SetContent,
    Append,
    Insert,
    Concat,
    Remove,
    Mark,
    Unmark,
}
