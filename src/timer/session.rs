//! Session tracker: the repetition counter and the phase derived from it

use tracing::debug;

use super::{Phase, REPS_PER_CYCLE};

/// Result of advancing the session by one repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStep {
    pub phase: Phase,
    pub duration_seconds: u64,
    /// Work intervals done, counted before an end-of-cycle reset
    pub completed_work_intervals: u32,
}

#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    repetition: u32,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repetition(&self) -> u32 {
        self.repetition
    }

    /// Move to the next repetition and report the phase it starts.
    ///
    /// Past the last repetition the counter wraps to zero and the step is Idle.
    pub fn advance(&mut self) -> SessionStep {
        self.repetition += 1;
        debug!("Session repetition = {}", self.repetition);

        let completed_work_intervals = self.repetition / 2;
        let phase = if self.repetition > REPS_PER_CYCLE {
            self.repetition = 0;
            Phase::Idle
        } else if self.repetition == REPS_PER_CYCLE {
            Phase::LongBreak
        } else if self.repetition % 2 == 1 {
            Phase::Work
        } else {
            Phase::ShortBreak
        };

        SessionStep {
            phase,
            duration_seconds: phase.duration_seconds(),
            completed_work_intervals,
        }
    }

    /// Phase for the current repetition
    pub fn phase(&self) -> Phase {
        match self.repetition {
            0 => Phase::Idle,
            r if r == REPS_PER_CYCLE => Phase::LongBreak,
            r if r % 2 == 1 => Phase::Work,
            _ => Phase::ShortBreak,
        }
    }

    pub fn completed_work_intervals(&self) -> u32 {
        self.repetition / 2
    }

    pub fn reset(&mut self) {
        self.repetition = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_phases() {
        let mut tracker = SessionTracker::new();
        let phases: Vec<Phase> = (0..8).map(|_| tracker.advance().phase).collect();
        assert_eq!(
            phases,
            vec![
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::LongBreak,
            ]
        );
        assert_eq!(tracker.repetition(), 8);

        let ninth = tracker.advance();
        assert_eq!(ninth.phase, Phase::Idle);
        assert_eq!(ninth.duration_seconds, 0);
        assert_eq!(ninth.completed_work_intervals, 4);
        assert_eq!(tracker.repetition(), 0);
        assert_eq!(tracker.phase(), Phase::Idle);
    }

    #[test]
    fn test_completed_work_intervals() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.completed_work_intervals(), 0);
        for k in 1..=8u32 {
            let step = tracker.advance();
            assert_eq!(tracker.completed_work_intervals(), k / 2);
            assert_eq!(step.completed_work_intervals, k / 2);
        }
    }

    #[test]
    fn test_durations_follow_phase() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.advance().duration_seconds, 300);
        assert_eq!(tracker.advance().duration_seconds, 120);
        for _ in 0..5 {
            tracker.advance();
        }
        assert_eq!(tracker.advance().duration_seconds, 180);
    }

    #[test]
    fn test_phase_matches_advance() {
        let mut tracker = SessionTracker::new();
        for _ in 0..8 {
            let step = tracker.advance();
            assert_eq!(tracker.phase(), step.phase);
        }
    }

    #[test]
    fn test_reset_restarts_cycle() {
        let mut tracker = SessionTracker::new();
        tracker.advance();
        tracker.advance();
        tracker.advance();
        tracker.reset();
        assert_eq!(tracker.repetition(), 0);
        assert_eq!(tracker.phase(), Phase::Idle);
        assert_eq!(tracker.advance().phase, Phase::Work);
    }
}
