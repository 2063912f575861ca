//! Background tasks module
//!
//! This module contains the timer task and the tokio scheduler it ticks with.

pub mod scheduler;
pub mod timer_loop;

// Re-export main types
pub use scheduler::TokioScheduler;
pub use timer_loop::{spawn_timer_task, CommandOutcome, TimerHandle};
