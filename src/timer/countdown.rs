//! Countdown engine
//!
//! Owns the remaining time of the current phase and the single pending tick.
//! The engine never talks to a clock: it asks a [`Scheduler`] for a tick and
//! is driven by the caller handing that tick back through [`CountdownEngine::tick`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{format_clock, Display, Scheduler, TickHandle, TICK_SECONDS};

/// Engine state. The pending tick and the pause snapshot live in different
/// variants so they can never coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running { pending: TickHandle },
    Paused { snapshot: u64 },
}

/// Coarse engine status for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick was not the pending one and has been dropped
    Stale,
    /// Time remains, next tick scheduled
    Continued,
    /// Countdown reached zero, engine is Idle again
    Finished,
}

#[derive(Debug)]
pub struct CountdownEngine {
    state: EngineState,
    remaining_seconds: u64,
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            remaining_seconds: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn status(&self) -> EngineStatus {
        match self.state {
            EngineState::Idle => EngineStatus::Idle,
            EngineState::Running { .. } => EngineStatus::Running,
            EngineState::Paused { .. } => EngineStatus::Paused,
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        match self.state {
            EngineState::Running { pending } => Some(pending),
            _ => None,
        }
    }

    pub fn pause_snapshot(&self) -> Option<u64> {
        match self.state {
            EngineState::Paused { snapshot } => Some(snapshot),
            _ => None,
        }
    }

    /// Begin counting down `duration_seconds`. Only valid from Idle.
    pub fn start<S: Scheduler, D: Display>(
        &mut self,
        duration_seconds: u64,
        scheduler: &mut S,
        display: &mut D,
    ) -> bool {
        if self.state != EngineState::Idle {
            debug!("Ignoring start while {:?}", self.status());
            return false;
        }

        self.remaining_seconds = duration_seconds;
        display.display_time(&format_clock(self.remaining_seconds));
        let pending = scheduler.schedule(Duration::from_secs(TICK_SECONDS));
        self.state = EngineState::Running { pending };
        true
    }

    /// Continue from the pause snapshot. Only valid from Paused.
    pub fn resume<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        let EngineState::Paused { snapshot } = self.state else {
            debug!("Ignoring resume while {:?}", self.status());
            return false;
        };

        self.remaining_seconds = snapshot;
        let pending = scheduler.schedule(Duration::from_secs(TICK_SECONDS));
        self.state = EngineState::Running { pending };
        true
    }

    /// Handle a delivered tick.
    ///
    /// Ticks that do not match the pending handle were cancelled and are dropped.
    pub fn tick<S: Scheduler, D: Display>(
        &mut self,
        handle: TickHandle,
        scheduler: &mut S,
        display: &mut D,
    ) -> TickOutcome {
        match self.state {
            EngineState::Running { pending } if pending == handle => {}
            _ => {
                debug!("Dropping stale tick {:?}", handle);
                return TickOutcome::Stale;
            }
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        display.display_time(&format_clock(self.remaining_seconds));

        if self.remaining_seconds == 0 {
            self.state = EngineState::Idle;
            return TickOutcome::Finished;
        }

        let pending = scheduler.schedule(Duration::from_secs(TICK_SECONDS));
        self.state = EngineState::Running { pending };
        TickOutcome::Continued
    }

    /// Stop ticking and keep the remaining time. Only valid from Running.
    pub fn pause<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        let EngineState::Running { pending } = self.state else {
            debug!("Ignoring pause while {:?}", self.status());
            return false;
        };

        scheduler.cancel(pending);
        self.state = EngineState::Paused {
            snapshot: self.remaining_seconds,
        };
        true
    }

    /// Cancel any pending tick and zero the countdown
    pub fn reset<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(pending) = self.pending_tick() {
            scheduler.cancel(pending);
        }
        self.remaining_seconds = 0;
        self.state = EngineState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::{FakeScheduler, RecordingDisplay};

    fn running(seconds: u64) -> (CountdownEngine, FakeScheduler, RecordingDisplay) {
        let mut engine = CountdownEngine::new();
        let mut scheduler = FakeScheduler::default();
        let mut display = RecordingDisplay::default();
        assert!(engine.start(seconds, &mut scheduler, &mut display));
        (engine, scheduler, display)
    }

    fn tick(engine: &mut CountdownEngine, scheduler: &mut FakeScheduler, display: &mut RecordingDisplay) -> TickOutcome {
        let handle = engine.pending_tick().expect("no pending tick");
        engine.tick(handle, scheduler, display)
    }

    #[test]
    fn test_start_renders_and_schedules() {
        let (engine, scheduler, display) = running(125);
        assert_eq!(engine.status(), EngineStatus::Running);
        assert_eq!(engine.remaining_seconds(), 125);
        assert_eq!(display.times, vec!["02:05"]);
        assert_eq!(scheduler.pending.len(), 1);
        assert_eq!(scheduler.delays, vec![Duration::from_secs(1)]);
    }

    #[test]
    fn test_start_ignored_unless_idle() {
        let (mut engine, mut scheduler, mut display) = running(10);
        assert!(!engine.start(99, &mut scheduler, &mut display));
        assert_eq!(engine.remaining_seconds(), 10);
        assert_eq!(scheduler.pending.len(), 1);
    }

    #[test]
    fn test_tick_counts_down() {
        let (mut engine, mut scheduler, mut display) = running(125);
        for _ in 0..3 {
            assert_eq!(tick(&mut engine, &mut scheduler, &mut display), TickOutcome::Continued);
        }
        assert_eq!(engine.remaining_seconds(), 122);
        assert_eq!(display.times, vec!["02:05", "02:04", "02:03", "02:02"]);
        assert_eq!(scheduler.pending.len(), 1);
    }

    #[test]
    fn test_tick_finishes_at_zero() {
        let (mut engine, mut scheduler, mut display) = running(2);
        assert_eq!(tick(&mut engine, &mut scheduler, &mut display), TickOutcome::Continued);
        assert_eq!(tick(&mut engine, &mut scheduler, &mut display), TickOutcome::Finished);
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(display.times.last().map(String::as_str), Some("00:00"));
        assert!(scheduler.pending.is_empty());
    }

    #[test]
    fn test_zero_length_countdown_finishes_on_first_tick() {
        let (mut engine, mut scheduler, mut display) = running(0);
        assert_eq!(tick(&mut engine, &mut scheduler, &mut display), TickOutcome::Finished);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_pause_resume_preserves_remaining() {
        let (mut paused, mut scheduler, mut display) = running(125);
        for _ in 0..3 {
            tick(&mut paused, &mut scheduler, &mut display);
        }
        assert!(paused.pause(&mut scheduler));
        assert_eq!(paused.pause_snapshot(), Some(122));
        assert!(paused.pending_tick().is_none());
        assert!(scheduler.pending.is_empty());
        assert!(paused.resume(&mut scheduler));
        assert!(paused.pause_snapshot().is_none());

        let (mut straight, mut scheduler, mut display) = running(125);
        for _ in 0..3 {
            tick(&mut straight, &mut scheduler, &mut display);
        }

        assert_eq!(paused.remaining_seconds(), straight.remaining_seconds());
        assert_eq!(paused.status(), EngineStatus::Running);
    }

    #[test]
    fn test_pause_and_resume_outside_their_state_are_noops() {
        let mut engine = CountdownEngine::new();
        let mut scheduler = FakeScheduler::default();
        assert!(!engine.pause(&mut scheduler));
        assert!(!engine.resume(&mut scheduler));
        assert_eq!(engine.state(), EngineState::Idle);

        let (mut engine, mut scheduler, _) = running(30);
        assert!(!engine.resume(&mut scheduler));
        assert!(engine.pause(&mut scheduler));
        assert!(!engine.pause(&mut scheduler));
        assert_eq!(engine.pause_snapshot(), Some(30));
    }

    #[test]
    fn test_cancelled_tick_is_dropped() {
        let (mut engine, mut scheduler, mut display) = running(30);
        let stale = engine.pending_tick().expect("no pending tick");
        engine.pause(&mut scheduler);
        engine.resume(&mut scheduler);

        assert_eq!(engine.tick(stale, &mut scheduler, &mut display), TickOutcome::Stale);
        assert_eq!(engine.remaining_seconds(), 30);
        assert_eq!(scheduler.cancelled, vec![stale]);
    }

    #[test]
    fn test_reset_from_any_state() {
        let (mut engine, mut scheduler, _) = running(30);
        engine.reset(&mut scheduler);
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(scheduler.pending.is_empty());

        let (mut engine, mut scheduler, _) = running(30);
        engine.pause(&mut scheduler);
        engine.reset(&mut scheduler);
        assert!(engine.pause_snapshot().is_none());
        assert_eq!(engine.remaining_seconds(), 0);

        let mut engine = CountdownEngine::new();
        engine.reset(&mut scheduler);
        assert_eq!(engine.state(), EngineState::Idle);
    }
}
