//! Errors of the runtime plumbing around the timer core

use thiserror::Error;

/// Errors that can occur while talking to the timer task or the terminal
#[derive(Error, Debug)]
pub enum TimerError {
    #[error("Timer task is not running")]
    TaskUnavailable,

    #[error("Timer task dropped the reply for {0}")]
    ReplyDropped(&'static str),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T, E = TimerError> = std::result::Result<T, E>;
