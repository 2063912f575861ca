//! Display surfaces for the timer
//!
//! The clock face is the in-memory surface the controller paints on; the
//! terminal renderer draws snapshots of it.

pub mod clock_face;
pub mod terminal;

// Re-export main types
pub use clock_face::ClockFace;
pub use terminal::terminal_clock_task;
