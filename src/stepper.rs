//! Blocking step control between the caller and the control surface
//!
//! After every rendered frame the caller suspends itself in
//! [`StepController::await_advance`] and the control surface decides when it
//! may continue. Two threads are involved: the caller thread, which applies
//! commands and waits, and the control thread (keyboard input, or a test
//! harness), which delivers [`pause`](StepController::pause),
//! [`single_step`](StepController::single_step),
//! [`play`](StepController::play) and speed changes.
//!
//! The handshake is a single advance flag under a mutex/condvar pair. A
//! step signal sets the flag and wakes the waiter; the waiter re-checks the
//! flag in a loop (spurious wakeups) and consumes it on release. Because
//! the flag outlives the notification, a step delivered before the caller
//! starts waiting is still observed.
//!
//! In auto mode there is nothing to wait for: `await_advance` sleeps for a
//! speed-dependent delay and returns. [`shutdown`](StepController::shutdown)
//! releases the caller permanently so a quit key can unwind a running
//! script.

use std::sync::{Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

/// Upper end of the speed range; at this speed the auto delay is zero.
pub const MAX_SPEED: u8 = 100;

/// Auto-mode delay per missing speed point.
const DELAY_PER_POINT: Duration = Duration::from_millis(20);

/// Whether steps advance on key presses or on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Manual,
    Auto,
}

#[derive(Debug)]
struct ControlState {
    mode: Mode,
    advance_requested: bool,
    speed: u8,
    released: bool,
}

/// The synchronization primitive between caller and control surface.
#[derive(Debug)]
pub struct StepController {
    state: Mutex<ControlState>,
    advanced: Condvar,
}

impl StepController {
    pub fn new() -> Self {
        StepController {
            state: Mutex::new(ControlState {
                mode: Mode::Manual,
                advance_requested: false,
                speed: 50,
                released: false,
            }),
            advanced: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControlState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Switch to manual mode. Does not release a wait already in progress.
    pub fn pause(&self) {
        self.lock().mode = Mode::Manual;
    }

    /// Release exactly one wait, current or upcoming, regardless of mode.
    pub fn single_step(&self) {
        let mut state = self.lock();
        state.advance_requested = true;
        self.advanced.notify_one();
    }

    /// Switch to auto mode; a caller currently blocked is released at once.
    pub fn play(&self) {
        let mut state = self.lock();
        state.mode = Mode::Auto;
        self.advanced.notify_all();
    }

    /// Set the playback speed, clamped to `0..=MAX_SPEED`. Takes effect at
    /// the next auto-mode wait; never releases a blocked caller.
    pub fn set_speed(&self, speed: u8) {
        self.lock().speed = speed.min(MAX_SPEED);
    }

    pub fn speed(&self) -> u8 {
        self.lock().speed
    }

    pub fn mode(&self) -> Mode {
        self.lock().mode
    }

    /// Release the caller permanently: the current wait and every later one
    /// return immediately. Used on quit.
    pub fn shutdown(&self) {
        let mut state = self.lock();
        state.released = true;
        self.advanced.notify_all();
    }

    pub fn is_shut_down(&self) -> bool {
        self.lock().released
    }

    /// Suspend the caller until the next step is authorized.
    ///
    /// Manual mode blocks until a step signal or a switch to auto arrives;
    /// there is deliberately no timeout. Auto mode sleeps for
    /// `(MAX_SPEED - speed) * 20 ms` and returns.
    pub fn await_advance(&self) {
        let mut state = self.lock();
        if state.released {
            return;
        }

        if state.mode == Mode::Auto {
            let delay = DELAY_PER_POINT * u32::from(MAX_SPEED - state.speed);
            drop(state);
            thread::sleep(delay);
            return;
        }

        while state.mode == Mode::Manual && !state.advance_requested && !state.released {
            state = self.advanced.wait(state).unwrap_or_else(|e| e.into_inner());
        }
        if state.advance_requested {
            state.advance_requested = false;
        }
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}
