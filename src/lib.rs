//! Tomato Timer - a Pomodoro countdown timer
//!
//! The timer core alternates work intervals with short and long breaks and
//! renders a clock face. Around it sit a tokio timer task, a terminal clock
//! face and an HTTP control surface with one endpoint per button.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use state::{AppState, TimerSnapshot};
pub use api::create_router;
pub use tasks::spawn_timer_task;
pub use utils::signals::shutdown_signal;
