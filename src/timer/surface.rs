//! Collaborators the timer core needs from its presentation layer

use std::time::Duration;

use super::Color;

/// Cancellation token for a scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Delivers a tick back to the timer after a delay
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

/// Surface the clock face is rendered on
pub trait Display {
    fn display_time(&mut self, text: &str);
    fn display_phase(&mut self, label: &str, color: Color);
    fn display_progress(&mut self, mark_count: u32);
}
