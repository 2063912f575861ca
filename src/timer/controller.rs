//! Pomodoro controller
//!
//! Single owner of the session tracker, the countdown engine and the two
//! presentation collaborators. Every user action and every delivered tick goes
//! through here, one at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    format_clock, CountdownEngine, Display, Phase, Scheduler, SessionTracker, TickHandle,
    TickOutcome,
};

/// User-facing controls of the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Pause,
    Resume,
    Reset,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Pause => "pause",
            Action::Resume => "resume",
            Action::Reset => "reset",
        }
    }
}

#[derive(Debug)]
pub struct Pomodoro<S, D> {
    tracker: SessionTracker,
    engine: CountdownEngine,
    scheduler: S,
    display: D,
}

impl<S: Scheduler, D: Display> Pomodoro<S, D> {
    /// Create an idle timer and paint the idle face
    pub fn new(scheduler: S, display: D) -> Self {
        let mut pomodoro = Self {
            tracker: SessionTracker::new(),
            engine: CountdownEngine::new(),
            scheduler,
            display,
        };
        pomodoro.paint_idle();
        pomodoro
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn engine(&self) -> &CountdownEngine {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Apply a user action. Returns false when the action was ignored.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Start => self.start(),
            Action::Pause => self.pause(),
            Action::Resume => self.resume(),
            Action::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Start button: resumes a paused countdown, otherwise begins the next phase.
    ///
    /// Ignored while a countdown is already running.
    pub fn start(&mut self) -> bool {
        if self.engine.pause_snapshot().is_some() {
            return self.resume();
        }
        if self.engine.pending_tick().is_some() {
            debug!("Start ignored, countdown already running");
            return false;
        }
        self.advance_session();
        true
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.engine.pause(&mut self.scheduler);
        if paused {
            info!(
                "Paused at {} in {:?}",
                format_clock(self.engine.remaining_seconds()),
                self.tracker.phase()
            );
        }
        paused
    }

    pub fn resume(&mut self) -> bool {
        let resumed = self.engine.resume(&mut self.scheduler);
        if resumed {
            info!(
                "Resumed at {} in {:?}",
                format_clock(self.engine.remaining_seconds()),
                self.tracker.phase()
            );
        }
        resumed
    }

    /// Cancel everything and return to the idle face
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.scheduler);
        self.tracker.reset();
        self.paint_idle();
        info!("Timer reset");
    }

    /// Deliver a scheduled tick
    pub fn tick(&mut self, handle: TickHandle) -> TickOutcome {
        let outcome = self.engine.tick(handle, &mut self.scheduler, &mut self.display);
        if outcome == TickOutcome::Finished {
            debug!("{:?} finished", self.tracker.phase());
            self.advance_session();
        }
        outcome
    }

    fn advance_session(&mut self) {
        let step = self.tracker.advance();
        self.display.display_progress(step.completed_work_intervals);
        self.display
            .display_phase(step.phase.label(), step.phase.color());

        if step.phase.is_idle() {
            info!(
                "Cycle complete after {} work intervals",
                step.completed_work_intervals
            );
            return;
        }

        info!(
            "Starting {:?} for {}",
            step.phase,
            format_clock(step.duration_seconds)
        );
        self.engine
            .start(step.duration_seconds, &mut self.scheduler, &mut self.display);
    }

    fn paint_idle(&mut self) {
        self.display.display_time(&format_clock(0));
        self.display
            .display_phase(Phase::Idle.label(), Phase::Idle.color());
        self.display.display_progress(0);
    }
}
