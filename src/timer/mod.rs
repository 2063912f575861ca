//! Pomodoro timer core
//!
//! This module contains the session tracker, the countdown engine and the
//! controller that wires them to a scheduler and a display surface.

pub mod controller;
pub mod countdown;
pub mod format;
pub mod phase;
pub mod session;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use controller::{Action, Pomodoro};
pub use countdown::{CountdownEngine, EngineState, EngineStatus, TickOutcome};
pub use format::{check_marks, format_clock};
pub use phase::{Color, Phase};
pub use session::{SessionStep, SessionTracker};
pub use surface::{Display, Scheduler, TickHandle};

/// Work interval length in minutes
pub const WORK_MIN: u64 = 5;
/// Short break length in minutes
pub const SHORT_BREAK_MIN: u64 = 2;
/// Long break length in minutes
pub const LONG_BREAK_MIN: u64 = 3;
/// Repetitions in one full cycle: four work intervals, three short breaks, one long break
pub const REPS_PER_CYCLE: u32 = 8;
/// Length of one tick in seconds
pub const TICK_SECONDS: u64 = 1;
