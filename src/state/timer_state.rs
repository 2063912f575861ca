//! Timer snapshot published to the presentation layer

use serde::{Deserialize, Serialize};

use crate::{
    display::ClockFace,
    timer::{check_marks, Color, EngineStatus, Phase, Pomodoro, Scheduler},
};

/// Point-in-time view of the timer and its clock face
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub status: EngineStatus,
    pub phase: Phase,
    pub label: String,
    pub color: Color,
    pub color_hex: String,
    pub clock: String,
    pub remaining_seconds: u64,
    pub repetition: u32,
    /// Work intervals shown on the progress indicator
    pub completed_work_intervals: u32,
    pub check_marks: String,
}

impl TimerSnapshot {
    /// Snapshot of a freshly started, idle timer
    pub fn new() -> Self {
        Self {
            status: EngineStatus::Idle,
            phase: Phase::Idle,
            label: Phase::Idle.label().to_string(),
            color: Phase::Idle.color(),
            color_hex: Phase::Idle.color().hex(),
            clock: "00:00".to_string(),
            remaining_seconds: 0,
            repetition: 0,
            completed_work_intervals: 0,
            check_marks: check_marks(0),
        }
    }

    /// Capture the current state of a timer painting on a [`ClockFace`]
    pub fn capture<S: Scheduler>(pomodoro: &Pomodoro<S, ClockFace>) -> Self {
        let face = pomodoro.display();
        let tracker = pomodoro.tracker();
        let engine = pomodoro.engine();

        Self {
            status: engine.status(),
            phase: tracker.phase(),
            label: face.label.clone(),
            color: face.color,
            color_hex: face.color.hex(),
            clock: face.time_text.clone(),
            remaining_seconds: engine.remaining_seconds(),
            repetition: tracker.repetition(),
            completed_work_intervals: face.mark_count,
            check_marks: face.check_marks(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == EngineStatus::Running
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::FakeScheduler;

    #[test]
    fn test_capture_after_full_cycle_keeps_progress_consistent() {
        let mut pomodoro = Pomodoro::new(FakeScheduler::default(), ClockFace::new());
        pomodoro.start();
        while let Some(handle) = pomodoro.engine().pending_tick() {
            pomodoro.tick(handle);
        }

        let snapshot = TimerSnapshot::capture(&pomodoro);
        assert_eq!(snapshot.status, EngineStatus::Idle);
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.repetition, 0);
        assert_eq!(snapshot.completed_work_intervals, 4);
        assert_eq!(snapshot.check_marks, check_marks(snapshot.completed_work_intervals));
    }

    #[test]
    fn test_capture_mid_cycle() {
        let mut pomodoro = Pomodoro::new(FakeScheduler::default(), ClockFace::new());
        pomodoro.start();
        for _ in 0..300 {
            let handle = pomodoro.engine().pending_tick().unwrap();
            pomodoro.tick(handle);
        }

        let snapshot = TimerSnapshot::capture(&pomodoro);
        assert_eq!(snapshot.phase, Phase::ShortBreak);
        assert_eq!(snapshot.label, "Break");
        assert_eq!(snapshot.clock, "02:00");
        assert_eq!(snapshot.completed_work_intervals, 1);
        assert_eq!(snapshot.check_marks, "✔");
    }
}
