//! In-memory clock face

use crate::timer::{check_marks, Color, Display, Phase};

/// Last values pushed to each element of the clock face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time_text: String,
    pub label: String,
    pub color: Color,
    pub mark_count: u32,
}

impl ClockFace {
    pub fn new() -> Self {
        Self {
            time_text: "00:00".to_string(),
            label: Phase::Idle.label().to_string(),
            color: Phase::Idle.color(),
            mark_count: 0,
        }
    }

    pub fn check_marks(&self) -> String {
        check_marks(self.mark_count)
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ClockFace {
    fn display_time(&mut self, text: &str) {
        self.time_text.clear();
        self.time_text.push_str(text);
    }

    fn display_phase(&mut self, label: &str, color: Color) {
        self.label.clear();
        self.label.push_str(label);
        self.color = color;
    }

    fn display_progress(&mut self, mark_count: u32) {
        self.mark_count = mark_count;
    }
}
