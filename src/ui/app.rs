//! Terminal lifecycle, keyboard adapter and the ratatui frame sink
//!
//! [`TuiSink`] owns the terminal: it enters raw mode plus the alternate
//! screen on construction and draws one pane per tracked list with a status
//! bar underneath. [`spawn_input_thread`] runs the control surface: a
//! polling loop that translates key presses into step-controller signals.
//! The core never sees a key event.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::animator::{FrameSink, ListScene};
use crate::stepper::StepController;
use crate::ui::panes::{self, PANE_HEIGHT};

/// Frame sink drawing every tracked list into the terminal.
pub struct TuiSink {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    controller: Arc<StepController>,
}

impl TuiSink {
    /// Enter raw mode and the alternate screen.
    pub fn new(controller: Arc<StepController>) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TuiSink {
            terminal,
            controller,
        })
    }

    /// Leave the alternate screen and hand the terminal back.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl<T: std::fmt::Display> FrameSink<T> for TuiSink {
    fn present(&mut self, scenes: &[ListScene<'_, T>], message: &str) -> io::Result<()> {
        let mode = self.controller.mode();
        let speed = self.controller.speed();
        self.terminal.draw(|frame| {
            let mut constraints: Vec<Constraint> = scenes
                .iter()
                .map(|_| Constraint::Length(PANE_HEIGHT))
                .collect();
            constraints.push(Constraint::Min(0));
            constraints.push(Constraint::Length(1));
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(frame.area());

            for (scene, chunk) in scenes.iter().zip(chunks.iter()) {
                panes::render_list_pane(frame, *chunk, scene);
            }
            panes::render_status_bar(frame, chunks[chunks.len() - 1], message, mode, speed);
        })?;
        Ok(())
    }
}

/// Run the keyboard control surface on its own thread.
///
/// Space steps, `p` pauses, `a` (or Enter) plays, the arrow keys change the
/// speed in steps of ten, `q` shuts the controller down. The thread exits
/// once the controller is shut down.
pub fn spawn_input_thread(controller: Arc<StepController>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !controller.is_shut_down() {
            match event::poll(Duration::from_millis(50)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => break,
            }
            let Ok(Event::Key(key)) = event::read() else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char(' ') => controller.single_step(),
                KeyCode::Char('p') => controller.pause(),
                KeyCode::Char('a') | KeyCode::Enter => controller.play(),
                KeyCode::Left => {
                    let speed = controller.speed();
                    controller.set_speed(speed.saturating_sub(10));
                }
                KeyCode::Right => {
                    let speed = controller.speed();
                    controller.set_speed(speed.saturating_add(10));
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => controller.shutdown(),
                _ => {}
            }
        }
    })
}
