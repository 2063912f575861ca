//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::TimerSnapshot;
use crate::{
    error::Result,
    tasks::{CommandOutcome, TimerHandle},
    timer::Action,
};

/// Application state shared by the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Handle to the timer task
    pub timer: TimerHandle,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState around a running timer task
    pub fn new(port: u16, host: String, timer: TimerHandle) -> Self {
        Self {
            timer,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Apply a button press and record it as the last action if it took effect
    pub async fn apply(&self, action: Action) -> Result<CommandOutcome> {
        let outcome = self.timer.apply(action).await?;

        if outcome.applied {
            info!("Action applied: {} -> {} {}", action.as_str(), outcome.snapshot.label, outcome.snapshot.clock);
            if let Ok(mut last_action) = self.last_action.lock() {
                *last_action = Some(action.as_str().to_string());
            }
            if let Ok(mut last_time) = self.last_action_time.lock() {
                *last_time = Some(Utc::now());
            }
        }

        Ok(outcome)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> TimerSnapshot {
        self.timer.current()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
