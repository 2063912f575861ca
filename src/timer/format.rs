//! Clock face formatting

/// Format whole seconds as "MM:SS"
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One check mark per completed work interval
pub fn check_marks(count: u32) -> String {
    "✔".repeat(count as usize)
}
