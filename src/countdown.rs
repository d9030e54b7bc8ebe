//! Countdown component: the timer state machine behind the egg timer screen.
//!
//! The component owns a configured duration, a once-per-second countdown and
//! an `Idle`/`Running` phase, following the Elm architecture used throughout
//! this crate: operations mutate the model and hand back commands, ticks
//! arrive as messages through `update()`.
//!
//! # Basic Usage
//!
//! ```rust
//! use eggtimer::countdown;
//!
//! let mut timer = countdown::new(60);
//! assert_eq!(timer.view(), "01:00");
//!
//! // start() validates the duration and returns the first tick command
//! let _cmd = timer.start().expect("non-zero duration");
//! assert_eq!(timer.phase(), countdown::Phase::Running);
//! ```
//!
//! # Message Flow
//!
//! `start()` schedules a [`TickMsg`] one second out; each tick processed by
//! `update()` decrements the remaining time and schedules the next one. When
//! the countdown reaches zero the model returns to `Idle` and emits a
//! [`CompletedMsg`] command so the application can post its notification.
//! `cancel()` bumps the run tag, which deterministically invalidates any
//! tick still in flight for the cancelled run.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use thiserror::Error;

/// Upper bound for the configurable duration: 15 minutes.
pub const MAX_DURATION_SECS: u32 = 15 * 60;

/// Duration preselected when the screen opens.
pub const DEFAULT_DURATION_SECS: u32 = 60;

// Internal ID management for countdown instances.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Formats whole seconds as `MM:SS`, the only clock format the screen shows.
///
/// ```rust
/// use eggtimer::countdown::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(90), "01:30");
/// assert_eq!(format_clock(900), "15:00");
/// ```
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The coarse state of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No countdown is active; the duration control is live.
    Idle,
    /// A countdown is in progress and ticks are scheduled.
    Running,
}

/// The one user-reachable failure: starting with a zero duration.
///
/// Recovery is local and synchronous: the caller surfaces the message and the
/// user adjusts the slider and retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartError {
    /// The configured duration was zero when `start()` was called.
    #[error("set the timer for more than 0 seconds")]
    InvalidDuration,
}

/// Message delivered once per elapsed second while a countdown runs.
///
/// Ticks carry the countdown's instance `id` and the `tag` of the run that
/// scheduled them. A tick whose tag no longer matches belongs to a run that
/// was cancelled or restarted and is dropped without touching the model.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The countdown instance this tick targets.
    pub id: i64,
    /// The run that scheduled this tick.
    pub(crate) tag: i64,
}

/// Message emitted as the zero-granularity final callback when the countdown
/// reaches zero. The application reacts by posting the completion
/// notification and refreshing the screen.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// The countdown instance that finished.
    pub id: i64,
}

/// Countdown model: configured duration, remaining time and phase.
///
/// The remaining time is only meaningful while `Running`. While `Idle` the
/// view mirrors the configured duration, except right after a completed run
/// where it holds at `00:00` until the user adjusts the duration again.
#[derive(Debug, Clone)]
pub struct Model {
    configured: u32,
    remaining: u32,
    phase: Phase,
    completed: bool,
    id: i64,
    tag: i64,
}

/// Creates a countdown with the given initial duration, clamped to
/// [`MAX_DURATION_SECS`].
pub fn new(configured_secs: u32) -> Model {
    Model {
        configured: configured_secs.min(MAX_DURATION_SECS),
        remaining: 0,
        phase: Phase::Idle,
        completed: false,
        id: next_id(),
        tag: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new(DEFAULT_DURATION_SECS)
    }
}

impl Model {
    /// Returns the unique identifier of this countdown instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    // The tag of the current run; ticks carrying any other tag are stale.
    pub(crate) fn run_tag(&self) -> i64 {
        self.tag
    }

    /// Returns whether a countdown is in progress.
    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Returns the configured duration in seconds.
    pub fn configured_secs(&self) -> u32 {
        self.configured
    }

    /// Returns the seconds left in the current run; 0 while idle.
    pub fn remaining_secs(&self) -> u32 {
        match self.phase {
            Phase::Running => self.remaining,
            Phase::Idle => 0,
        }
    }

    /// Updates the configured duration, clamped to 0–[`MAX_DURATION_SECS`].
    ///
    /// Ignored while a countdown runs; the duration control is disabled then,
    /// and this guard keeps the model safe even if a caller forgets.
    pub fn set_duration(&mut self, secs: u32) {
        if self.phase == Phase::Running {
            return;
        }
        self.configured = secs.min(MAX_DURATION_SECS);
        self.completed = false;
    }

    /// Starts a countdown from the configured duration.
    ///
    /// Returns the command that schedules the first tick, or
    /// [`StartError::InvalidDuration`] when the configured duration is zero,
    /// in which case no tick is scheduled and the phase stays `Idle`.
    ///
    /// Starting bumps the run tag, so any tick still in flight from an
    /// earlier run is invalidated before the new one begins.
    pub fn start(&mut self) -> Result<Cmd, StartError> {
        if self.configured == 0 {
            return Err(StartError::InvalidDuration);
        }
        self.phase = Phase::Running;
        self.remaining = self.configured;
        self.completed = false;
        self.tag += 1;
        Ok(self.tick())
    }

    /// Stops the current run and returns to `Idle`.
    ///
    /// The run tag is bumped so the pending tick for the cancelled run is
    /// rejected when it arrives; no further `TickMsg` reaches the model.
    /// The view falls back to the configured duration. No-op while idle.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.phase = Phase::Idle;
        self.completed = false;
        self.tag += 1;
    }

    // Schedules the next tick for the current run.
    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(Duration::from_secs(1), move |_| {
            Box::new(TickMsg { id, tag }) as Msg
        })
    }

    // The final callback fires immediately rather than a second later.
    fn completed_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CompletedMsg { id }) as Msg
        })
    }

    /// Processes tick messages, advancing the countdown by one second each.
    ///
    /// Ticks for other instances, for stale runs, or arriving while idle are
    /// ignored. Reaching zero transitions back to `Idle` and returns the
    /// completion command; otherwise the next tick is scheduled.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if self.phase != Phase::Running {
                return None;
            }
            if tick_msg.id != 0 && tick_msg.id != self.id {
                return None;
            }
            if tick_msg.tag != self.tag {
                return None;
            }

            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.phase = Phase::Idle;
                self.completed = true;
                self.tag += 1;
                return Some(self.completed_cmd());
            }
            return Some(self.tick());
        }

        None
    }

    /// Renders the clock as `MM:SS`.
    ///
    /// Shows the remaining time while running, `00:00` right after a
    /// completed run, and the configured duration otherwise.
    pub fn view(&self) -> String {
        match self.phase {
            Phase::Running => format_clock(self.remaining),
            Phase::Idle if self.completed => format_clock(0),
            Phase::Idle => format_clock(self.configured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_for(timer: &Model) -> Box<TickMsg> {
        Box::new(TickMsg {
            id: timer.id(),
            tag: timer.tag,
        })
    }

    #[test]
    fn test_new_defaults() {
        let timer = Model::default();

        assert_eq!(timer.configured_secs(), DEFAULT_DURATION_SECS);
        assert_eq!(timer.phase(), Phase::Idle);
        assert!(!timer.running());
        assert_eq!(timer.view(), "01:00");
    }

    #[test]
    fn test_new_clamps_to_max() {
        let timer = new(10_000);
        assert_eq!(timer.configured_secs(), MAX_DURATION_SECS);
        assert_eq!(timer.view(), "15:00");
    }

    #[test]
    fn test_unique_ids() {
        let a = new(10);
        let b = new(10);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(599), "09:59");
        assert_eq!(format_clock(900), "15:00");
    }

    #[test]
    fn test_set_duration_clamps() {
        let mut timer = new(60);
        timer.set_duration(10_000);
        assert_eq!(timer.configured_secs(), MAX_DURATION_SECS);

        timer.set_duration(0);
        assert_eq!(timer.configured_secs(), 0);
        assert_eq!(timer.view(), "00:00");
    }

    #[test]
    fn test_set_duration_ignored_while_running() {
        let mut timer = new(30);
        timer.start().unwrap();

        timer.set_duration(5);
        assert_eq!(timer.configured_secs(), 30);
        assert_eq!(timer.view(), "00:30");
    }

    #[test]
    fn test_start_with_zero_duration_fails() {
        let mut timer = new(0);

        let err = timer.start().err().unwrap();
        assert_eq!(err, StartError::InvalidDuration);
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_begins_run() {
        let mut timer = new(30);

        let cmd = timer.start();
        assert!(cmd.is_ok());
        assert_eq!(timer.phase(), Phase::Running);
        assert_eq!(timer.remaining_secs(), 30);
        assert_eq!(timer.view(), "00:30");
    }

    #[test]
    fn test_tick_decrements_and_reschedules() {
        let mut timer = new(5);
        timer.start().unwrap();

        let cmd = timer.update(tick_for(&timer));
        assert!(cmd.is_some());
        assert_eq!(timer.remaining_secs(), 4);
        assert_eq!(timer.view(), "00:04");
    }

    #[test]
    fn test_five_second_display_sequence() {
        let mut timer = new(5);
        timer.start().unwrap();
        assert_eq!(timer.view(), "00:05");

        let mut views = Vec::new();
        for _ in 0..5 {
            timer.update(tick_for(&timer));
            views.push(timer.view());
        }
        assert_eq!(views, vec!["00:04", "00:03", "00:02", "00:01", "00:00"]);
    }

    #[test]
    fn test_full_run_ends_idle_at_zero() {
        // The property holds for every selectable duration; spot-check the
        // bounds and a middle value rather than looping the full range.
        for d in [1u32, 7, 90, MAX_DURATION_SECS] {
            let mut timer = new(d);
            timer.start().unwrap();
            for _ in 0..d {
                timer.update(tick_for(&timer));
            }
            assert_eq!(timer.phase(), Phase::Idle, "duration {}", d);
            assert_eq!(timer.view(), "00:00", "duration {}", d);
        }
    }

    #[test]
    fn test_completion_emits_final_command() {
        let mut timer = new(1);
        timer.start().unwrap();

        let cmd = timer.update(tick_for(&timer));
        assert!(cmd.is_some()); // the CompletedMsg command
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn test_cancel_restores_configured_display() {
        let mut timer = new(90);
        timer.start().unwrap();
        timer.update(tick_for(&timer));
        timer.update(tick_for(&timer));
        assert_eq!(timer.view(), "01:28");

        timer.cancel();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.view(), "01:30");
    }

    #[test]
    fn test_cancel_invalidates_pending_tick() {
        let mut timer = new(10);
        timer.start().unwrap();
        let stale = tick_for(&timer);
        timer.cancel();

        // The tick scheduled before cancel() must not restart anything.
        let cmd = timer.update(stale);
        assert!(cmd.is_none());
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.view(), "00:10");
    }

    #[test]
    fn test_cancel_while_idle_is_noop() {
        let mut timer = new(45);
        timer.cancel();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.view(), "00:45");
    }

    #[test]
    fn test_wrong_id_rejected() {
        let mut timer = new(10);
        timer.start().unwrap();

        let foreign = Box::new(TickMsg {
            id: timer.id() + 999,
            tag: timer.tag,
        });
        assert!(timer.update(foreign).is_none());
        assert_eq!(timer.remaining_secs(), 10);
    }

    #[test]
    fn test_restart_invalidates_previous_run() {
        let mut timer = new(10);
        timer.start().unwrap();
        let stale = tick_for(&timer);

        timer.cancel();
        timer.set_duration(20);
        timer.start().unwrap();

        // A tick from the first run must not decrement the second.
        assert!(timer.update(stale).is_none());
        assert_eq!(timer.remaining_secs(), 20);
    }

    #[test]
    fn test_display_holds_zero_after_completion_until_adjusted() {
        let mut timer = new(2);
        timer.start().unwrap();
        timer.update(tick_for(&timer));
        timer.update(tick_for(&timer));
        assert_eq!(timer.view(), "00:00");

        timer.set_duration(120);
        assert_eq!(timer.view(), "02:00");
    }
}
