// Step controller liveness: release rules between caller and control thread

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use vislist::stepper::{Mode, StepController, MAX_SPEED};

/// Long enough to decide "still blocked" without flaking.
const BLOCKED: Duration = Duration::from_millis(80);
/// Generous release deadline.
const RELEASED: Duration = Duration::from_secs(2);

fn spawn_waiter(controller: &Arc<StepController>) -> Receiver<()> {
    let (tx, rx) = mpsc::channel();
    let controller = Arc::clone(controller);
    thread::spawn(move || {
        controller.await_advance();
        let _ = tx.send(());
    });
    rx
}

#[test]
fn manual_mode_blocks_until_a_single_step() {
    let controller = Arc::new(StepController::new());
    assert_eq!(controller.mode(), Mode::Manual);

    let waiter = spawn_waiter(&controller);
    assert!(
        waiter.recv_timeout(BLOCKED).is_err(),
        "a manual-mode wait must not release on its own"
    );

    controller.single_step();
    assert!(
        waiter.recv_timeout(RELEASED).is_ok(),
        "a step must release the waiter"
    );
}

#[test]
fn one_step_releases_exactly_one_wait() {
    let controller = Arc::new(StepController::new());

    let first = spawn_waiter(&controller);
    controller.single_step();
    assert!(first.recv_timeout(RELEASED).is_ok());

    // the step is consumed: the next wait blocks again
    let second = spawn_waiter(&controller);
    assert!(second.recv_timeout(BLOCKED).is_err());
    controller.single_step();
    assert!(second.recv_timeout(RELEASED).is_ok());
}

#[test]
fn a_step_sent_before_the_wait_is_not_lost() {
    let controller = Arc::new(StepController::new());

    controller.single_step();
    let waiter = spawn_waiter(&controller);

    assert!(waiter.recv_timeout(RELEASED).is_ok());
}

#[test]
fn speed_changes_do_not_release_a_blocked_wait() {
    let controller = Arc::new(StepController::new());

    let waiter = spawn_waiter(&controller);
    assert!(waiter.recv_timeout(BLOCKED).is_err());
    controller.set_speed(90);
    assert!(
        waiter.recv_timeout(BLOCKED).is_err(),
        "set_speed must never act as a step"
    );

    controller.single_step();
    assert!(waiter.recv_timeout(RELEASED).is_ok());
}

#[test]
fn pause_does_not_release_a_blocked_wait() {
    let controller = Arc::new(StepController::new());

    let waiter = spawn_waiter(&controller);
    assert!(waiter.recv_timeout(BLOCKED).is_err());
    controller.pause();
    assert!(waiter.recv_timeout(BLOCKED).is_err());

    controller.single_step();
    assert!(waiter.recv_timeout(RELEASED).is_ok());
}

#[test]
fn play_releases_a_blocked_wait_immediately() {
    let controller = Arc::new(StepController::new());

    let waiter = spawn_waiter(&controller);
    assert!(waiter.recv_timeout(BLOCKED).is_err());

    controller.play();
    assert!(waiter.recv_timeout(RELEASED).is_ok());
    assert_eq!(controller.mode(), Mode::Auto);
}

#[test]
fn auto_mode_waits_out_the_speed_delay() {
    let controller = StepController::new();
    controller.play();
    controller.set_speed(95); // (100 - 95) * 20 ms

    let start = Instant::now();
    controller.await_advance();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(100), "returned after {elapsed:?}");
}

#[test]
fn auto_mode_at_full_speed_returns_at_once() {
    let controller = StepController::new();
    controller.play();
    controller.set_speed(MAX_SPEED);

    let start = Instant::now();
    controller.await_advance();

    assert!(start.elapsed() < BLOCKED);
}

#[test]
fn pause_after_play_blocks_again() {
    let controller = Arc::new(StepController::new());
    controller.play();
    controller.set_speed(MAX_SPEED);
    controller.await_advance();

    controller.pause();
    assert_eq!(controller.mode(), Mode::Manual);

    let waiter = spawn_waiter(&controller);
    assert!(waiter.recv_timeout(BLOCKED).is_err());
    controller.single_step();
    assert!(waiter.recv_timeout(RELEASED).is_ok());
}

#[test]
fn shutdown_releases_now_and_forever() {
    let controller = Arc::new(StepController::new());

    let waiter = spawn_waiter(&controller);
    assert!(waiter.recv_timeout(BLOCKED).is_err());

    controller.shutdown();
    assert!(waiter.recv_timeout(RELEASED).is_ok());
    assert!(controller.is_shut_down());

    let start = Instant::now();
    controller.await_advance();
    assert!(start.elapsed() < BLOCKED);
}

#[test]
fn speed_is_clamped_to_the_range() {
    let controller = StepController::new();
    assert_eq!(controller.speed(), 50);

    controller.set_speed(200);
    assert_eq!(controller.speed(), MAX_SPEED);

    controller.set_speed(0);
    assert_eq!(controller.speed(), 0);
}
