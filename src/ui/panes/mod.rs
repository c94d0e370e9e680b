//! Pane rendering for the animator's terminal UI
//!
//! - [`list`]: one pane per tracked list (node boxes, link arrows, the
//!   `null` terminator slot, cursor pointer, mark and command highlights)
//! - [`status`]: bottom bar with mode, speed, last command and keybinds
//!
//! All render functions are stateless: they draw a frame from the scene
//! snapshots they are given and never touch core state.

pub mod list;
pub mod status;

pub use list::{render_list_pane, PANE_HEIGHT};
pub use status::render_status_bar;
