//! The animator facade
//!
//! [`Animator`] ties the pieces together: it owns the [`Registry`] of
//! tracked lists, a shared [`StepController`], and a [`FrameSink`] that
//! turns shadow state into pixels (or cells). Every announced command runs
//! the same loop: apply, snapshot, present, await advance.
//!
//! The sink boundary keeps the core free of any UI dependency: a sink gets
//! read-only [`ListScene`] snapshots and may not reach back into the core.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use crate::command::{self, Command, Highlight};
use crate::list::CursorList;
use crate::shadow::Registry;
use crate::stepper::StepController;

/// Read-only snapshot of one tracked list, as handed to a [`FrameSink`].
pub struct ListScene<'a, T> {
    pub names: &'a [String],
    pub mirror: &'a [T],
    pub cursor: Option<usize>,
    pub mark: Option<usize>,
    pub caption: &'a str,
    /// Tag of the command that produced this frame; [`Highlight::None`] on
    /// every list except the one the command targeted.
    pub highlight: Highlight,
    /// For a CONCAT frame, the element count before the concatenation:
    /// nodes at or past this index are the newly arrived ones.
    pub fresh_from: Option<usize>,
}

/// Where frames go. Implementations draw; they never mutate core state.
pub trait FrameSink<T> {
    fn present(&mut self, scenes: &[ListScene<'_, T>], message: &str) -> io::Result<()>;
}

/// Orchestrates registry, interpreter, renderer and step control.
pub struct Animator<T, L, S> {
    registry: Registry<T, L>,
    controller: Arc<StepController>,
    sink: S,
    last: Option<(usize, Highlight)>,
    status: String,
}

impl<T, L, S> Animator<T, L, S>
where
    T: Clone,
    L: CursorList<T>,
    S: FrameSink<T>,
{
    pub fn new(sink: S) -> Self {
        Self::with_controller(sink, Arc::new(StepController::new()))
    }

    /// Build around an existing controller, for callers that wired a
    /// control surface (such as an input thread) to it beforehand.
    pub fn with_controller(sink: S, controller: Arc<StepController>) -> Self {
        Animator {
            registry: Registry::new(),
            controller,
            sink,
            last: None,
            status: String::from("ready"),
        }
    }

    /// Shared handle for a control surface running on another thread.
    pub fn controller(&self) -> Arc<StepController> {
        Arc::clone(&self.controller)
    }

    pub fn registry(&self) -> &Registry<T, L> {
        &self.registry
    }

    /// Track `list` under `name` (or add the alias to its existing entry)
    /// and redraw. Registration never blocks.
    pub fn add_list(&mut self, list: &Rc<RefCell<L>>, name: &str) -> io::Result<()> {
        if self.registry.register(list, name).is_some() {
            self.status = format!("tracking {name}");
        }
        self.present()
    }

    /// Stop tracking `list` and redraw. Unknown lists are ignored.
    pub fn remove_list(&mut self, list: &Rc<RefCell<L>>) -> io::Result<()> {
        let Some(index) = self.registry.find(list) else {
            return Ok(());
        };
        self.registry.unregister(list);
        // keep the recorded highlight pointing at the same pane
        self.last = match self.last {
            Some((t, _)) if t == index => None,
            Some((t, tag)) if t > index => Some((t - 1, tag)),
            other => other,
        };
        self.status = String::from("list removed");
        self.present()
    }

    /// Announce `command` for the first registered list.
    pub fn animate(&mut self, command: Command, explanation: Option<&str>) -> io::Result<()> {
        if self.registry.is_empty() {
            return Ok(());
        }
        self.run_step(0, command, explanation)
    }

    /// Announce `command` for a specific tracked list. Unknown lists are
    /// ignored.
    pub fn animate_list(
        &mut self,
        list: &Rc<RefCell<L>>,
        command: Command,
        explanation: Option<&str>,
    ) -> io::Result<()> {
        match self.registry.find(list) {
            Some(index) => self.run_step(index, command, explanation),
            None => Ok(()),
        }
    }

    /// Redraw the current state without applying anything or waiting.
    pub fn refresh(&mut self) -> io::Result<()> {
        self.present()
    }

    /// Tear the animator apart, handing the sink back to the caller (for
    /// terminal restoration and the like).
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn run_step(
        &mut self,
        target: usize,
        command: Command,
        explanation: Option<&str>,
    ) -> io::Result<()> {
        let tag = command::apply(&mut self.registry, target, command, explanation);
        self.last = Some((target, tag));
        self.status = match self.registry.get(target).and_then(|e| e.names().first()) {
            Some(name) => format!("{command} on {name}"),
            None => command.to_string(),
        };
        self.present()?;
        self.controller.await_advance();
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let last = self.last;
        let scenes: Vec<ListScene<'_, T>> = self
            .registry
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let highlight = match last {
                    Some((target, tag)) if target == index => tag,
                    _ => Highlight::None,
                };
                let fresh_from =
                    (highlight == Highlight::Concat).then(|| entry.len_before_concat());
                ListScene {
                    names: entry.names(),
                    mirror: entry.mirror(),
                    cursor: entry.cursor(),
                    mark: entry.mark(),
                    caption: entry.caption(),
                    highlight,
                    fresh_from,
                }
            })
            .collect();
        self.sink.present(&scenes, &self.status)
    }
}
