//! In-memory collaborators for driving the timer synchronously in tests

use std::time::Duration;

use super::{Color, Display, Scheduler, TickHandle};

#[derive(Debug, Default)]
pub struct FakeScheduler {
    next_id: u64,
    pub pending: Vec<TickHandle>,
    pub cancelled: Vec<TickHandle>,
    pub delays: Vec<Duration>,
}

impl FakeScheduler {
    /// Take the single pending tick, as if its delay elapsed
    pub fn fire(&mut self) -> Option<TickHandle> {
        assert!(self.pending.len() <= 1, "more than one tick pending: {:?}", self.pending);
        self.pending.pop()
    }
}

impl Scheduler for FakeScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending.push(handle);
        self.delays.push(delay);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub times: Vec<String>,
    pub phases: Vec<(String, Color)>,
    pub progress: Vec<u32>,
}

impl Display for RecordingDisplay {
    fn display_time(&mut self, text: &str) {
        self.times.push(text.to_string());
    }

    fn display_phase(&mut self, label: &str, color: Color) {
        self.phases.push((label.to_string(), color));
    }

    fn display_progress(&mut self, mark_count: u32) {
        self.progress.push(mark_count);
    }
}
