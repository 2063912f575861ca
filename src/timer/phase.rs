//! Phases of a Pomodoro cycle and their palette

use serde::{Deserialize, Serialize};

use super::{LONG_BREAK_MIN, SHORT_BREAK_MIN, WORK_MIN};

/// The activity the countdown currently represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Label pushed to the phase display
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Timer",
            Phase::Work => "Work",
            Phase::ShortBreak => "Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Phase::Idle | Phase::Work => Color::Green,
            Phase::ShortBreak => Color::Pink,
            Phase::LongBreak => Color::Red,
        }
    }

    /// Countdown length for this phase, zero for Idle
    pub fn duration_seconds(&self) -> u64 {
        match self {
            Phase::Idle => 0,
            Phase::Work => WORK_MIN * 60,
            Phase::ShortBreak => SHORT_BREAK_MIN * 60,
            Phase::LongBreak => LONG_BREAK_MIN * 60,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }
}

/// Fixed palette of the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Pink,
    Red,
    Yellow,
}

impl Color {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Green => (0x9b, 0xde, 0xac),
            Color::Pink => (0xe2, 0x97, 0x9c),
            Color::Red => (0xe7, 0x30, 0x5b),
            Color::Yellow => (0xf7, 0xf5, 0xdd),
        }
    }

    /// Hex notation, e.g. `#9bdeac`
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}
