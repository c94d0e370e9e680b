//! Terminal user interface built on [ratatui](https://docs.rs/ratatui).
//!
//! Three layers:
//!
//! - **[`app`]** — terminal setup/teardown, the [`app::TuiSink`] frame sink,
//!   and the keyboard input thread feeding the step controller
//! - **[`panes`]** — stateless render functions (list panes, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The core never depends on this module; it draws through the
//! [`FrameSink`](crate::animator::FrameSink) boundary only.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{spawn_input_thread, TuiSink};
